//! Cart Index Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use darkroom_app::domain::carts::models::CartEntry;

use crate::{cart::errors::into_status_error, extensions::*, state::State};

/// A cart entry enriched with the referenced service's display fields.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartEntryResponse {
    /// The unique identifier of the cart entry
    pub uuid: Uuid,

    /// The referenced catalog service
    pub service: Uuid,

    pub service_name: String,

    /// Service price in minor units (cents/pence)
    pub service_price: u64,

    /// Opaque image store reference
    pub service_image: Option<String>,

    /// Event date (ISO 8601)
    pub event_date: String,

    /// Event time (ISO 8601)
    pub event_time: String,

    pub event_location: String,

    /// When the entry was added to the cart
    pub added_at: String,
}

impl From<CartEntry> for CartEntryResponse {
    fn from(entry: CartEntry) -> Self {
        CartEntryResponse {
            uuid: entry.uuid.into(),
            service: entry.service_uuid.into(),
            service_name: entry.service_name,
            service_price: entry.service_price,
            service_image: entry.service_image,
            event_date: entry.event_date.to_string(),
            event_time: entry.event_time.to_string(),
            event_location: entry.event_location,
            added_at: entry.added_at.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartResponse {
    /// The user's cart entries, newest first
    pub cart: Vec<CartEntryResponse>,
}

/// Cart Index Handler
///
/// Returns the authenticated user's cart.
#[endpoint(tags("cart"), summary = "List Cart", security(("bearer_auth" = [])))]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let identity = depot.identity_or_401()?;

    let entries = state
        .app
        .carts
        .list_cart(identity.user)
        .await
        .map_err(into_status_error)?;

    Ok(Json(CartResponse {
        cart: entries.into_iter().map(Into::into).collect(),
    }))
}
