//! Booking Models

use std::{fmt, str::FromStr};

use jiff::{
    Timestamp,
    civil::{Date, Time},
};
use thiserror::Error;

use crate::{
    domain::{catalog::models::ServiceUuid, users::models::UserUuid},
    uuids::TypedUuid,
};

/// Booking UUID
pub type BookingUuid = TypedUuid<Booking>;

/// A committed reservation of a service for an event slot.
#[derive(Debug, Clone)]
pub struct Booking {
    pub uuid: BookingUuid,
    pub user_uuid: UserUuid,
    pub service_uuid: ServiceUuid,
    pub service_name: String,
    pub event_date: Date,
    pub event_time: Time,
    pub event_location: String,
    pub status: BookingStatus,
    pub booked_at: Timestamp,
    pub updated_at: Timestamp,
}

/// New Booking Model
#[derive(Debug, Clone, PartialEq)]
pub struct NewBooking {
    pub service_uuid: ServiceUuid,
    pub event_date: Date,
    pub event_time: Time,
    pub event_location: String,
}

/// Full overwrite of a booking's event details.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingUpdate {
    pub service_uuid: ServiceUuid,
    pub event_date: Date,
    pub event_time: Time,
    pub event_location: String,
}

/// Booking lifecycle status.
///
/// Stored and serialized as lower-case strings; `completed` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingStatus {
    Pending,
    Completed,
    Cancelled,
}

impl BookingStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown booking status")]
pub struct UnknownStatus;

impl FromStr for BookingStatus {
    type Err = UnknownStatus;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "pending" => Ok(Self::Pending),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(UnknownStatus),
        }
    }
}
