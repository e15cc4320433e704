//! Errors

use darkroom_app::domain::bookings::BookingsServiceError;
use salvo::http::StatusError;
use tracing::error;

pub(crate) fn into_status_error(error: BookingsServiceError) -> StatusError {
    match error {
        BookingsServiceError::NotFound => StatusError::not_found().brief("Booking not found"),
        BookingsServiceError::Conflict => {
            StatusError::conflict().brief("Service already booked for this slot")
        }
        BookingsServiceError::InvalidState => {
            StatusError::bad_request().brief("Only pending or cancelled bookings can be changed")
        }
        BookingsServiceError::Forbidden => {
            StatusError::forbidden().brief("Not allowed to act on this booking")
        }
        BookingsServiceError::InvalidReference => {
            StatusError::not_found().brief("Service not found")
        }
        BookingsServiceError::MissingRequiredData | BookingsServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid booking payload")
        }
        BookingsServiceError::Sql(source) => {
            error!("booking storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}
