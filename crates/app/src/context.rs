//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    auth::{AuthService, PgAuthService},
    database::{self, Db},
    domain::{
        bookings::{BookingsService, PgBookingsService},
        carts::{CartsService, PgCartsService},
        catalog::{CatalogService, PgCatalogService},
        contact::{ContactService, PgContactService},
        dashboard::{ComposedDashboardService, DashboardService},
        reviews::{PgReviewsService, ReviewsService},
        team::{PgTeamService, TeamService},
        users::{PgUsersService, UsersService},
    },
    notify::Notifier,
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),
}

#[derive(Clone)]
pub struct AppContext {
    pub auth: Arc<dyn AuthService>,
    pub bookings: Arc<dyn BookingsService>,
    pub carts: Arc<dyn CartsService>,
    pub catalog: Arc<dyn CatalogService>,
    pub contact: Arc<dyn ContactService>,
    pub dashboard: Arc<dyn DashboardService>,
    pub reviews: Arc<dyn ReviewsService>,
    pub team: Arc<dyn TeamService>,
    pub users: Arc<dyn UsersService>,
}

impl AppContext {
    /// Build application context from a database URL.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection fails.
    pub async fn from_database_url(
        url: &str,
        notifier: Arc<dyn Notifier>,
    ) -> Result<Self, AppInitError> {
        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        let db = Db::new(pool.clone());

        let users: Arc<dyn UsersService> = Arc::new(PgUsersService::new(db.clone()));
        let bookings: Arc<dyn BookingsService> = Arc::new(PgBookingsService::new(db.clone()));
        let carts: Arc<dyn CartsService> = Arc::new(PgCartsService::new(db.clone()));

        Ok(Self {
            auth: Arc::new(PgAuthService::new(pool)),
            catalog: Arc::new(PgCatalogService::new(db.clone())),
            contact: Arc::new(PgContactService::new(db.clone(), notifier)),
            dashboard: Arc::new(ComposedDashboardService::new(
                Arc::clone(&users),
                Arc::clone(&bookings),
                Arc::clone(&carts),
            )),
            reviews: Arc::new(PgReviewsService::new(db.clone())),
            team: Arc::new(PgTeamService::new(db)),
            bookings,
            carts,
            users,
        })
    }
}
