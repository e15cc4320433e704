//! Booking Index Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::QueryParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use darkroom_app::domain::bookings::models::BookingStatus;

use crate::{
    bookings::{errors::into_status_error, get::BookingResponse},
    extensions::*,
    state::State,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct BookingsResponse {
    /// The user's bookings, by event date descending
    pub bookings: Vec<BookingResponse>,
}

/// Booking Index Handler
///
/// Returns the authenticated user's bookings, optionally filtered by
/// status.
#[endpoint(tags("bookings"), summary = "List Bookings", security(("bearer_auth" = [])))]
pub(crate) async fn handler(
    status: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<BookingsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let identity = depot.identity_or_401()?;

    let status: Option<BookingStatus> = status
        .into_inner()
        .map(|value| value.parse())
        .transpose()
        .or_400("could not parse \"status\" query parameter")?;

    let bookings = state
        .app
        .bookings
        .list_bookings(identity.user, status)
        .await
        .map_err(into_status_error)?;

    Ok(Json(BookingsResponse {
        bookings: bookings.into_iter().map(Into::into).collect(),
    }))
}
