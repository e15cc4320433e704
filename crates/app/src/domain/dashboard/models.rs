//! Dashboard Models

use crate::domain::{bookings::models::Booking, carts::models::CartEntry, users::models::User};

/// One-call read view of a user's profile, bookings, and cart.
#[derive(Debug, Clone)]
pub struct Dashboard {
    pub profile: User,
    pub bookings: BookingsByStatus,
    pub cart: Vec<CartEntry>,
}

/// Bookings grouped by lifecycle status.
#[derive(Debug, Clone, Default)]
pub struct BookingsByStatus {
    pub pending: Vec<Booking>,
    pub completed: Vec<Booking>,
    pub cancelled: Vec<Booking>,
}
