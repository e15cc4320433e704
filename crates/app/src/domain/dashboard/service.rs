//! Dashboard service.
//!
//! Pure composition over the users, bookings, and carts services; no
//! storage access of its own and no caching.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;

use crate::domain::{
    bookings::{BookingsService, models::BookingStatus},
    carts::{CartsService, models::{CartEntry, CartEntryUuid}},
    dashboard::{
        errors::DashboardServiceError,
        models::{BookingsByStatus, Dashboard},
    },
    users::{UsersService, models::UserUuid},
};

#[derive(Clone)]
pub struct ComposedDashboardService {
    users: Arc<dyn UsersService>,
    bookings: Arc<dyn BookingsService>,
    carts: Arc<dyn CartsService>,
}

impl ComposedDashboardService {
    #[must_use]
    pub fn new(
        users: Arc<dyn UsersService>,
        bookings: Arc<dyn BookingsService>,
        carts: Arc<dyn CartsService>,
    ) -> Self {
        Self {
            users,
            bookings,
            carts,
        }
    }
}

#[async_trait]
impl DashboardService for ComposedDashboardService {
    async fn get_dashboard(&self, user: UserUuid) -> Result<Dashboard, DashboardServiceError> {
        let profile = self.users.get_profile(user).await?;
        let all_bookings = self.bookings.list_bookings(user, None).await?;
        let cart = self.carts.list_cart(user).await?;

        let mut bookings = BookingsByStatus::default();

        for booking in all_bookings {
            match booking.status {
                BookingStatus::Pending => bookings.pending.push(booking),
                BookingStatus::Completed => bookings.completed.push(booking),
                BookingStatus::Cancelled => bookings.cancelled.push(booking),
            }
        }

        Ok(Dashboard {
            profile,
            bookings,
            cart,
        })
    }

    async fn remove_cart_item(
        &self,
        user: UserUuid,
        entry: CartEntryUuid,
    ) -> Result<Vec<CartEntry>, DashboardServiceError> {
        self.carts.remove_from_cart(user, entry).await?;

        Ok(self.carts.list_cart(user).await?)
    }
}

#[automock]
#[async_trait]
pub trait DashboardService: Send + Sync {
    /// Compose the user's profile, categorized bookings, and cart into one
    /// read view. Recomputed per call.
    async fn get_dashboard(&self, user: UserUuid) -> Result<Dashboard, DashboardServiceError>;

    /// Remove a cart entry and return the refreshed cart listing.
    async fn remove_cart_item(
        &self,
        user: UserUuid,
        entry: CartEntryUuid,
    ) -> Result<Vec<CartEntry>, DashboardServiceError>;
}
