//! Update Booking Handler

use std::sync::Arc;

use jiff::civil::{Date, Time};
use salvo::{
    oapi::{ToSchema, extract::{JsonBody, PathParam}},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use darkroom_app::domain::bookings::models::BookingUpdate;

use crate::{
    bookings::{errors::into_status_error, get::BookingResponse},
    extensions::*,
    state::State,
};

/// Update Booking Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateBookingRequest {
    /// The catalog service to book
    pub service: Uuid,

    /// Event date (ISO 8601, e.g. "2025-06-01")
    pub event_date: String,

    /// Event time (ISO 8601, e.g. "14:00")
    pub event_time: String,

    pub event_location: String,
}

impl UpdateBookingRequest {
    fn into_update(self) -> Result<BookingUpdate, StatusError> {
        let event_date: Date = self
            .event_date
            .parse()
            .or_400("could not parse \"event_date\"")?;

        let event_time: Time = self
            .event_time
            .parse()
            .or_400("could not parse \"event_time\"")?;

        Ok(BookingUpdate {
            service_uuid: self.service.into(),
            event_date,
            event_time,
            event_location: self.event_location,
        })
    }
}

/// Update Booking Handler
///
/// Overwrites a booking's event details. Status is left unchanged;
/// completed bookings cannot be edited.
#[endpoint(
    tags("bookings"),
    summary = "Update Booking",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Booking updated"),
        (status_code = StatusCode::CONFLICT, description = "Slot already booked"),
        (status_code = StatusCode::NOT_FOUND, description = "Booking not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    booking: PathParam<Uuid>,
    json: JsonBody<UpdateBookingRequest>,
    depot: &mut Depot,
) -> Result<Json<BookingResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let identity = depot.identity_or_401()?;

    let update = json.into_inner().into_update()?;

    let updated = state
        .app
        .bookings
        .update_booking(identity.user, booking.into_inner().into(), update)
        .await
        .map_err(into_status_error)?;

    Ok(Json(updated.into()))
}
