//! Depot helper extensions.

use std::any::Any;

use darkroom_app::auth::Identity;
use salvo::prelude::{Depot, StatusError};

const IDENTITY_KEY: &str = "darkroom.identity";

/// Helpers for mapping depot extraction failures to HTTP errors.
pub(crate) trait DepotExt {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError>;
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError> {
        self.obtain::<T>()
            .map_err(|_ignored| StatusError::internal_server_error())
    }
}

/// Access to the request identity resolved by the auth middleware.
pub(crate) trait IdentityExt {
    fn insert_identity(&mut self, identity: Identity);
    fn identity_or_401(&self) -> Result<Identity, StatusError>;
}

impl IdentityExt for Depot {
    fn insert_identity(&mut self, identity: Identity) {
        self.insert(IDENTITY_KEY, identity);
    }

    fn identity_or_401(&self) -> Result<Identity, StatusError> {
        self.get::<Identity>(IDENTITY_KEY)
            .copied()
            .map_err(|_ignored| StatusError::unauthorized().brief("Not authenticated"))
    }
}
