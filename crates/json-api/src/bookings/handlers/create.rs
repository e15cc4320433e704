//! Create Booking Handler

use std::sync::Arc;

use jiff::civil::{Date, Time};
use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use darkroom_app::domain::bookings::models::NewBooking;

use crate::{
    bookings::{errors::into_status_error, get::BookingResponse},
    extensions::*,
    state::State,
};

/// Create Booking Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateBookingRequest {
    /// The catalog service to book
    pub service: Uuid,

    /// Event date (ISO 8601, e.g. "2025-06-01")
    pub event_date: String,

    /// Event time (ISO 8601, e.g. "14:00")
    pub event_time: String,

    pub event_location: String,
}

impl CreateBookingRequest {
    fn into_new_booking(self) -> Result<NewBooking, StatusError> {
        let event_date: Date = self
            .event_date
            .parse()
            .or_400("could not parse \"event_date\"")?;

        let event_time: Time = self
            .event_time
            .parse()
            .or_400("could not parse \"event_time\"")?;

        Ok(NewBooking {
            service_uuid: self.service.into(),
            event_date,
            event_time,
            event_location: self.event_location,
        })
    }
}

/// Create Booking Handler
///
/// Books a slot directly, without going through the cart.
#[endpoint(
    tags("bookings"),
    summary = "Create Booking",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Booking created"),
        (status_code = StatusCode::CONFLICT, description = "Slot already booked"),
        (status_code = StatusCode::NOT_FOUND, description = "Service not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateBookingRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<BookingResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let identity = depot.identity_or_401()?;

    let booking = json.into_inner().into_new_booking()?;

    let created = state
        .app
        .bookings
        .create_booking(identity.user, booking)
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/bookings/{}", created.uuid), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(created.into()))
}
