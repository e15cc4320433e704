//! Get Booking Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use darkroom_app::domain::bookings::models::Booking;

use crate::{bookings::errors::into_status_error, extensions::*, state::State};

/// A booking as returned by the API.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct BookingResponse {
    /// The unique identifier of the booking
    pub uuid: Uuid,

    /// The booked catalog service
    pub service: Uuid,

    pub service_name: String,

    /// Event date (ISO 8601)
    pub event_date: String,

    /// Event time (ISO 8601)
    pub event_time: String,

    pub event_location: String,

    /// Lifecycle status: pending, completed, or cancelled
    pub status: String,

    pub booked_at: String,

    pub updated_at: String,
}

impl From<Booking> for BookingResponse {
    fn from(booking: Booking) -> Self {
        BookingResponse {
            uuid: booking.uuid.into(),
            service: booking.service_uuid.into(),
            service_name: booking.service_name,
            event_date: booking.event_date.to_string(),
            event_time: booking.event_time.to_string(),
            event_location: booking.event_location,
            status: booking.status.to_string(),
            booked_at: booking.booked_at.to_string(),
            updated_at: booking.updated_at.to_string(),
        }
    }
}

/// Get Booking Handler
///
/// Returns one of the authenticated user's bookings.
#[endpoint(tags("bookings"), summary = "Get Booking", security(("bearer_auth" = [])))]
pub(crate) async fn handler(
    booking: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<BookingResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let identity = depot.identity_or_401()?;

    let booking = state
        .app
        .bookings
        .get_booking(identity.user, booking.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(booking.into()))
}
