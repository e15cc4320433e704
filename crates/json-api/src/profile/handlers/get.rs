//! Get Profile Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use darkroom_app::domain::users::models::User;

use crate::{extensions::*, profile::errors::into_status_error, state::State};

/// A user profile as returned by the API.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProfileResponse {
    /// The unique identifier of the user
    pub uuid: Uuid,

    pub username: String,

    pub email: String,

    pub first_name: String,

    pub last_name: String,

    pub phone: Option<String>,

    pub address: String,

    /// Opaque image store reference
    pub profile_image: Option<String>,

    /// Whether the user holds the staff override role
    pub staff: bool,
}

impl From<User> for ProfileResponse {
    fn from(user: User) -> Self {
        ProfileResponse {
            uuid: user.uuid.into(),
            username: user.username,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            phone: user.phone,
            address: user.address,
            profile_image: user.profile_image,
            staff: user.staff,
        }
    }
}

/// Get Profile Handler
///
/// Returns the authenticated user's profile.
#[endpoint(tags("profile"), summary = "Get Profile", security(("bearer_auth" = [])))]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<ProfileResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let identity = depot.identity_or_401()?;

    let profile = state
        .app
        .users
        .get_profile(identity.user)
        .await
        .map_err(into_status_error)?;

    Ok(Json(profile.into()))
}
