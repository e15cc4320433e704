//! Errors

use darkroom_app::domain::catalog::CatalogServiceError;
use salvo::http::StatusError;
use tracing::error;

pub(crate) fn into_status_error(error: CatalogServiceError) -> StatusError {
    match error {
        CatalogServiceError::NotFound => StatusError::not_found().brief("Service not found"),
        CatalogServiceError::AlreadyExists => {
            StatusError::conflict().brief("Service already exists")
        }
        CatalogServiceError::InvalidReference
        | CatalogServiceError::MissingRequiredData
        | CatalogServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid service payload")
        }
        CatalogServiceError::Sql(source) => {
            error!("catalog storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}
