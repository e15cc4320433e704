//! Team Models

use std::{fmt, str::FromStr};

use thiserror::Error;

use crate::uuids::TypedUuid;

/// Team Member UUID
pub type TeamMemberUuid = TypedUuid<TeamMember>;

/// A studio team member shown on the public team page.
#[derive(Debug, Clone)]
pub struct TeamMember {
    pub uuid: TeamMemberUuid,
    pub name: String,
    pub role: TeamRole,
    pub profile_image: Option<String>,
    pub bio: String,
}

/// New Team Member Model
#[derive(Debug, Clone, PartialEq)]
pub struct NewTeamMember {
    pub uuid: TeamMemberUuid,
    pub name: String,
    pub role: TeamRole,
    pub profile_image: Option<String>,
    pub bio: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeamRole {
    Ceo,
    Producer,
    Director,
    Editor,
    Photographer,
    Videographer,
}

impl TeamRole {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ceo => "ceo",
            Self::Producer => "producer",
            Self::Director => "director",
            Self::Editor => "editor",
            Self::Photographer => "photographer",
            Self::Videographer => "videographer",
        }
    }
}

impl fmt::Display for TeamRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown team role")]
pub struct UnknownRole;

impl FromStr for TeamRole {
    type Err = UnknownRole;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "ceo" => Ok(Self::Ceo),
            "producer" => Ok(Self::Producer),
            "director" => Ok(Self::Director),
            "editor" => Ok(Self::Editor),
            "photographer" => Ok(Self::Photographer),
            "videographer" => Ok(Self::Videographer),
            _ => Err(UnknownRole),
        }
    }
}
