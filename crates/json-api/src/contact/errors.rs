//! Errors

use darkroom_app::domain::contact::ContactServiceError;
use salvo::http::StatusError;
use tracing::error;

pub(crate) fn into_status_error(error: ContactServiceError) -> StatusError {
    match error {
        ContactServiceError::MissingRequiredData | ContactServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid contact payload")
        }
        ContactServiceError::Sql(source) => {
            error!("contact storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}
