//! Add Charge Handler

use salvo::prelude::*;

use crate::charges::{form::ChargeForm, views};

/// Present the edit view with a blank charge.
#[handler]
pub(crate) async fn handler(res: &mut Response) {
    res.render(Text::Html(views::charge_edit(
        &ChargeForm::default(),
        &[],
        None,
    )));
}
