//! Promote Cart Entry Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    bookings::{errors::into_status_error, get::BookingResponse},
    extensions::*,
    state::State,
};

/// Promote Cart Entry Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct PromoteCartEntryRequest {
    /// The cart entry to convert into a booking
    pub cart_entry: Uuid,
}

/// Promote Cart Entry Handler
///
/// Converts one of the user's cart entries into a pending booking,
/// removing the entry in the same transaction.
#[endpoint(
    tags("bookings"),
    summary = "Book From Cart",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Booking created, cart entry removed"),
        (status_code = StatusCode::CONFLICT, description = "Slot already booked"),
        (status_code = StatusCode::NOT_FOUND, description = "Cart entry not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<PromoteCartEntryRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<BookingResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let identity = depot.identity_or_401()?;

    let created = state
        .app
        .bookings
        .promote_cart_entry(identity.user, json.into_inner().cart_entry.into())
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/bookings/{}", created.uuid), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(created.into()))
}
