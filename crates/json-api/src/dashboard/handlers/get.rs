//! Get Dashboard Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use darkroom_app::domain::dashboard::models::Dashboard;

use crate::{
    bookings::get::BookingResponse,
    cart::index::CartEntryResponse,
    dashboard::errors::into_status_error,
    extensions::*,
    profile::get::ProfileResponse,
    state::State,
};

/// Bookings grouped by lifecycle status.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct DashboardBookingsResponse {
    pub pending: Vec<BookingResponse>,
    pub completed: Vec<BookingResponse>,
    pub cancelled: Vec<BookingResponse>,
}

/// Dashboard Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct DashboardResponse {
    /// The user's profile
    pub user: ProfileResponse,

    /// The user's bookings, grouped by status
    pub bookings: DashboardBookingsResponse,

    /// The user's cart entries
    pub cart: Vec<CartEntryResponse>,
}

impl From<Dashboard> for DashboardResponse {
    fn from(dashboard: Dashboard) -> Self {
        DashboardResponse {
            user: dashboard.profile.into(),
            bookings: DashboardBookingsResponse {
                pending: dashboard.bookings.pending.into_iter().map(Into::into).collect(),
                completed: dashboard
                    .bookings
                    .completed
                    .into_iter()
                    .map(Into::into)
                    .collect(),
                cancelled: dashboard
                    .bookings
                    .cancelled
                    .into_iter()
                    .map(Into::into)
                    .collect(),
            },
            cart: dashboard.cart.into_iter().map(Into::into).collect(),
        }
    }
}

/// Get Dashboard Handler
///
/// Composes the user's profile, categorized bookings, and cart into one
/// read view.
#[endpoint(tags("dashboard"), summary = "Get Dashboard", security(("bearer_auth" = [])))]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<DashboardResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let identity = depot.identity_or_401()?;

    let dashboard = state
        .app
        .dashboard
        .get_dashboard(identity.user)
        .await
        .map_err(into_status_error)?;

    Ok(Json(dashboard.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use darkroom_app::domain::{
        bookings::models::{BookingStatus, BookingUuid},
        carts::models::CartEntryUuid,
        dashboard::{MockDashboardService, models::BookingsByStatus},
    };

    use crate::test_helpers::{
        TEST_USER_UUID, authed_service, make_booking, make_cart_entry, make_user,
        state_with_dashboard,
    };

    use super::*;

    #[tokio::test]
    async fn test_dashboard_groups_sections() -> TestResult {
        let mut cancelled = make_booking(BookingUuid::new());
        cancelled.status = BookingStatus::Cancelled;

        let dashboard = Dashboard {
            profile: make_user(TEST_USER_UUID),
            bookings: BookingsByStatus {
                pending: vec![make_booking(BookingUuid::new())],
                completed: vec![],
                cancelled: vec![cancelled],
            },
            cart: vec![make_cart_entry(CartEntryUuid::new())],
        };

        let mut mock = MockDashboardService::new();

        mock.expect_get_dashboard()
            .once()
            .withf(|user| *user == TEST_USER_UUID)
            .return_once(move |_| Ok(dashboard));

        let service = authed_service(
            state_with_dashboard(mock),
            Router::with_path("dashboard").get(handler),
        );

        let mut res = TestClient::get("http://example.com/dashboard")
            .send(&service)
            .await;

        let body: DashboardResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.user.username, "maya");
        assert_eq!(body.bookings.pending.len(), 1);
        assert_eq!(body.bookings.completed.len(), 0);
        assert_eq!(body.bookings.cancelled.len(), 1);
        assert_eq!(body.cart.len(), 1);

        Ok(())
    }
}
