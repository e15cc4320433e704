//! Cart Models

use jiff::{
    Timestamp,
    civil::{Date, Time},
};

use crate::{
    domain::{catalog::models::ServiceUuid, users::models::UserUuid},
    uuids::TypedUuid,
};

/// Cart Entry UUID
pub type CartEntryUuid = TypedUuid<CartEntry>;

/// A saved intent to book a service, not yet a commitment.
///
/// Read projections are enriched with the referenced service's display
/// fields so listings render without a second lookup.
#[derive(Debug, Clone)]
pub struct CartEntry {
    pub uuid: CartEntryUuid,
    pub user_uuid: UserUuid,
    pub service_uuid: ServiceUuid,
    pub service_name: String,
    pub service_price: u64,
    pub service_image: Option<String>,
    pub event_date: Date,
    pub event_time: Time,
    pub event_location: String,
    pub added_at: Timestamp,
}

/// New Cart Entry Model
#[derive(Debug, Clone, PartialEq)]
pub struct NewCartEntry {
    pub service_uuid: ServiceUuid,
    pub event_date: Date,
    pub event_time: Time,
    pub event_location: String,
}
