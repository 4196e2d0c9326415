//! Edit Charge Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    charges::{errors::into_status_error, form::ChargeForm, views},
    extensions::*,
    state::State,
};

/// Present the edit view for an existing charge. Absent ids are a 404; a
/// malformed id is a 400. The flash message from a preceding save lands here.
#[handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<(), StatusError> {
    let id = req
        .param::<i32>("id")
        .ok_or_else(|| StatusError::bad_request().brief("invalid charge id"))?;

    let message = depot.incoming_message();

    let state = depot.obtain_or_500::<Arc<State>>()?;

    let charge = state
        .app
        .charges
        .find_by_id(id)
        .await
        .map_err(into_status_error)?
        .ok_or_else(StatusError::not_found)?;

    res.render(Text::Html(views::charge_edit(
        &ChargeForm::from(charge),
        &[],
        message.as_deref(),
    )));

    Ok(())
}
