//! Service Catalog Models

use std::{fmt, str::FromStr};

use jiff::Timestamp;
use thiserror::Error;

use crate::uuids::TypedUuid;

/// Service UUID
pub type ServiceUuid = TypedUuid<Service>;

/// A bookable catalog service offered by the studio.
#[derive(Debug, Clone)]
pub struct Service {
    pub uuid: ServiceUuid,
    pub name: String,
    pub category: ServiceCategory,
    pub description: String,
    /// Price in minor units (cents/pence).
    pub price: u64,
    /// Opaque image store reference.
    pub image: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// New Service Model
#[derive(Debug, Clone, PartialEq)]
pub struct NewService {
    pub uuid: ServiceUuid,
    pub name: String,
    pub category: ServiceCategory,
    pub description: String,
    pub price: u64,
    pub image: Option<String>,
}

/// Production category of a catalog service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceCategory {
    Video,
    Audio,
    Photo,
}

impl ServiceCategory {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Video => "video",
            Self::Audio => "audio",
            Self::Photo => "photo",
        }
    }
}

impl fmt::Display for ServiceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown service category")]
pub struct UnknownCategory;

impl FromStr for ServiceCategory {
    type Err = UnknownCategory;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "video" => Ok(Self::Video),
            "audio" => Ok(Self::Audio),
            "photo" => Ok(Self::Photo),
            _ => Err(UnknownCategory),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_round_trips_through_str() {
        for category in [
            ServiceCategory::Video,
            ServiceCategory::Audio,
            ServiceCategory::Photo,
        ] {
            let parsed: ServiceCategory = category.as_str().parse().expect("should parse");

            assert_eq!(parsed, category);
        }
    }

    #[test]
    fn unknown_category_is_rejected() {
        assert!("film".parse::<ServiceCategory>().is_err());
    }
}
