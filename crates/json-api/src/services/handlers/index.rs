//! Service Index Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{
    extensions::*, services::errors::into_status_error, services::get::ServiceResponse,
    state::State,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ServicesResponse {
    /// The list of catalog services
    pub services: Vec<ServiceResponse>,
}

/// Service Index Handler
///
/// Returns the full catalog.
#[endpoint(tags("services"), summary = "List Services")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<ServicesResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let services = state
        .app
        .catalog
        .list_services()
        .await
        .map_err(into_status_error)?;

    Ok(Json(ServicesResponse {
        services: services.into_iter().map(Into::into).collect(),
    }))
}
