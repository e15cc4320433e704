//! Team Index Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use darkroom_app::domain::team::models::TeamMember;

use crate::{extensions::*, state::State, team::errors::into_status_error};

/// A team member as shown on the public team page.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct TeamMemberResponse {
    /// The unique identifier of the team member
    pub uuid: Uuid,

    pub name: String,

    /// Studio role, e.g. director or photographer
    pub role: String,

    /// Opaque image store reference
    pub profile_image: Option<String>,

    pub bio: String,
}

impl From<TeamMember> for TeamMemberResponse {
    fn from(member: TeamMember) -> Self {
        TeamMemberResponse {
            uuid: member.uuid.into(),
            name: member.name,
            role: member.role.to_string(),
            profile_image: member.profile_image,
            bio: member.bio,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct TeamResponse {
    /// The studio team, ordered by name
    pub team: Vec<TeamMemberResponse>,
}

/// Team Index Handler
///
/// Returns the public team listing.
#[endpoint(tags("team"), summary = "List Team")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<TeamResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let members = state
        .app
        .team
        .list_team()
        .await
        .map_err(into_status_error)?;

    Ok(Json(TeamResponse {
        team: members.into_iter().map(Into::into).collect(),
    }))
}
