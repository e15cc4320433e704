//! Reinstate Booking Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    bookings::{errors::into_status_error, get::BookingResponse},
    extensions::*,
    state::State,
};

/// Reinstate Booking Handler
///
/// Moves a cancelled booking back to pending, provided its slot is still
/// free.
#[endpoint(
    tags("bookings"),
    summary = "Reinstate Booking",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Booking reinstated"),
        (status_code = StatusCode::CONFLICT, description = "Slot was taken in the meantime"),
        (status_code = StatusCode::NOT_FOUND, description = "Booking not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Booking is not cancelled"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    booking: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<BookingResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let identity = depot.identity_or_401()?;

    let reinstated = state
        .app
        .bookings
        .reinstate_booking(identity.user, booking.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(reinstated.into()))
}
