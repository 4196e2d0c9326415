//! Charge Search Handlers

use std::sync::Arc;

use salvo::prelude::*;
use serde::Deserialize;

use charge_app::domain::charges::models::ChargeSearchCondition;

use crate::{
    charges::{errors::into_status_error, views},
    extensions::*,
    state::State,
};

/// Search Condition Form
#[derive(Debug, Default, Deserialize)]
pub(crate) struct SearchForm {
    #[serde(default)]
    pub(crate) name: Option<String>,
}

impl From<SearchForm> for ChargeSearchCondition {
    fn from(form: SearchForm) -> Self {
        ChargeSearchCondition { name: form.name }
    }
}

/// Show the empty search form. The flash message from a preceding delete
/// lands here.
#[handler]
pub(crate) async fn show_condition(depot: &mut Depot, res: &mut Response) {
    let message = depot.incoming_message();

    res.render(Text::Html(views::charge_search_condition(
        message.as_deref(),
    )));
}

/// Run the substring search and render the result listing.
#[handler]
pub(crate) async fn search(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<(), StatusError> {
    let form = req
        .parse_form::<SearchForm>()
        .await
        .map_err(|_| StatusError::bad_request().brief("invalid search form"))?;

    let condition = ChargeSearchCondition::from(form);

    let state = depot.obtain_or_500::<Arc<State>>()?;

    let result = state
        .app
        .charges
        .find_by_conditions(condition.clone())
        .await
        .map_err(into_status_error)?;

    res.render(Text::Html(views::charge_search_result(&condition, &result)));

    Ok(())
}
