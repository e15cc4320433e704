//! Remove Dashboard Cart Item Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    cart::index::CartResponse, dashboard::errors::into_status_error, extensions::*, state::State,
};

/// Remove Dashboard Cart Item Handler
///
/// Removes a cart entry and returns the refreshed cart listing.
#[endpoint(
    tags("dashboard"),
    summary = "Remove Cart Item",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Entry removed, refreshed cart returned"),
        (status_code = StatusCode::NOT_FOUND, description = "Entry not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    entry: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let identity = depot.identity_or_401()?;

    let cart = state
        .app
        .dashboard
        .remove_cart_item(identity.user, entry.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(CartResponse {
        cart: cart.into_iter().map(Into::into).collect(),
    }))
}
