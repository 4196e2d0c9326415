//! Save Charge Handler

use std::sync::Arc;

use salvo::flash::FlashDepotExt;
use salvo::{http::header::LOCATION, prelude::*};

use crate::{
    charges::{errors::into_status_error, form::ChargeForm, views},
    extensions::*,
    state::State,
};

/// Persist a submitted charge.
///
/// Binding or validation errors re-render the edit view with the submitted
/// values; no redirect happens and nothing reaches the store. On success the
/// operator is redirected to the edit view of the assigned id with a
/// one-shot saved message (Post/Redirect/Get).
#[handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<(), StatusError> {
    let form = req
        .parse_form::<ChargeForm>()
        .await
        .map_err(|_| StatusError::bad_request().brief("invalid charge form"))?;

    let data = match form.bind() {
        Ok(data) => data,
        Err(errors) => {
            res.render(Text::Html(views::charge_edit(&form, &errors, None)));

            return Ok(());
        }
    };

    let state = depot.obtain_or_500::<Arc<State>>()?;

    let charge_id = state
        .app
        .charges
        .save(data)
        .await
        .map_err(into_status_error)?
        .charge_id;

    depot.outgoing_flash_mut().info("保存しました。");

    res.add_header(LOCATION, format!("/charge/edit/{charge_id}"), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::FOUND);

    Ok(())
}
