//! Errors

use darkroom_app::domain::dashboard::DashboardServiceError;
use salvo::http::StatusError;

use crate::{bookings, cart, profile};

pub(crate) fn into_status_error(error: DashboardServiceError) -> StatusError {
    match error {
        DashboardServiceError::Profile(inner) => profile::errors::into_status_error(inner),
        DashboardServiceError::Bookings(inner) => bookings::errors::into_status_error(inner),
        DashboardServiceError::Cart(inner) => cart::errors::into_status_error(inner),
    }
}
