//! Delete Booking Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{bookings::errors::into_status_error, extensions::*, state::State};

/// Delete Booking Handler
///
/// Removes a booking permanently. Owners may delete their own pending
/// bookings; staff may delete any booking regardless of status.
#[endpoint(
    tags("bookings"),
    summary = "Delete Booking",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Booking deleted"),
        (status_code = StatusCode::FORBIDDEN, description = "Not owner or not deletable"),
        (status_code = StatusCode::NOT_FOUND, description = "Booking not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    booking: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let identity = depot.identity_or_401()?;

    state
        .app
        .bookings
        .delete_booking(identity, booking.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(StatusCode::NO_CONTENT)
}
