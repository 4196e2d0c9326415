//! Charge Errors

use salvo::http::StatusError;
use tracing::error;

use charge_app::domain::charges::ChargesServiceError;

pub(crate) fn into_status_error(error: ChargesServiceError) -> StatusError {
    match error {
        ChargesServiceError::NotFound => StatusError::not_found(),
        ChargesServiceError::MissingRequiredData => {
            StatusError::bad_request().brief("missing required charge data")
        }
        ChargesServiceError::Sql(source) => {
            error!("charge store failure: {source}");

            StatusError::internal_server_error()
        }
    }
}
