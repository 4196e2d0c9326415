//! Test helpers.

use std::sync::Arc;

use jiff::{Timestamp, civil::date};
use salvo::{affix_state::inject, flash::CookieStore, http::header::CONTENT_TYPE, prelude::*};
use salvo::test::RequestBuilder;

use charge_app::{
    context::AppContext,
    domain::charges::{MockChargesService, models::Charge},
};

use crate::{router, state::State};

pub(crate) fn make_charge(charge_id: i32, name: &str) -> Charge {
    Charge {
        charge_id,
        name: name.to_string(),
        amount: 1000,
        start_date: date(2024, 1, 1),
        end_date: None,
        created_date: Timestamp::UNIX_EPOCH,
        updated_date: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn state_with_charges(charges: MockChargesService) -> Arc<State> {
    Arc::new(State::new(AppContext {
        charges: Arc::new(charges),
    }))
}

/// The production routing table wired to a mocked service.
pub(crate) fn charge_service(charges: MockChargesService) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_charges(charges)))
            .hoop(CookieStore::new().into_handler())
            .push(router::charge_router()),
    )
}

/// Attach an urlencoded form body the way a browser submits it.
pub(crate) fn form_request(builder: RequestBuilder, body: &'static str) -> RequestBuilder {
    builder
        .add_header(CONTENT_TYPE, "application/x-www-form-urlencoded", true)
        .body(body)
}
