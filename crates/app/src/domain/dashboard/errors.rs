//! Dashboard service errors.

use thiserror::Error;

use crate::domain::{
    bookings::errors::BookingsServiceError, carts::errors::CartsServiceError,
    users::errors::UsersServiceError,
};

#[derive(Debug, Error)]
pub enum DashboardServiceError {
    #[error("failed to load profile")]
    Profile(#[from] UsersServiceError),

    #[error("failed to load bookings")]
    Bookings(#[from] BookingsServiceError),

    #[error("failed to load cart")]
    Cart(#[from] CartsServiceError),
}
