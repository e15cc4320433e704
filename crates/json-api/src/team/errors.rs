//! Errors

use darkroom_app::domain::team::TeamServiceError;
use salvo::http::StatusError;
use tracing::error;

pub(crate) fn into_status_error(error: TeamServiceError) -> StatusError {
    match error {
        TeamServiceError::NotFound => StatusError::not_found().brief("Team member not found"),
        TeamServiceError::Sql(source) => {
            error!("team storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}
