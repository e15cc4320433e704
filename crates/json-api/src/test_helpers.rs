//! Test helpers.

use std::sync::Arc;

use jiff::{Timestamp, civil};
use salvo::{affix_state::inject, prelude::*};
use uuid::Uuid;

use darkroom_app::{
    auth::{Identity, MockAuthService},
    context::AppContext,
    domain::{
        bookings::{
            MockBookingsService,
            models::{Booking, BookingStatus, BookingUuid},
        },
        carts::{
            MockCartsService,
            models::{CartEntry, CartEntryUuid},
        },
        catalog::{
            MockCatalogService,
            models::{Service as CatalogService, ServiceCategory, ServiceUuid},
        },
        contact::MockContactService,
        dashboard::MockDashboardService,
        reviews::{
            MockReviewsService,
            models::{Review, ReviewUuid},
        },
        team::{
            MockTeamService,
            models::{TeamMember, TeamMemberUuid, TeamRole},
        },
        users::{
            MockUsersService,
            models::{User, UserUuid},
        },
    },
};

use crate::{extensions::*, state::State};

pub(crate) const TEST_USER_UUID: UserUuid = UserUuid::from_uuid(Uuid::nil());

pub(crate) const TEST_IDENTITY: Identity = Identity {
    user: TEST_USER_UUID,
    staff: false,
};

pub(crate) const TEST_STAFF_IDENTITY: Identity = Identity {
    user: TEST_USER_UUID,
    staff: true,
};

#[salvo::handler]
pub(crate) async fn inject_identity(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    depot.insert_identity(TEST_IDENTITY);
    ctrl.call_next(req, depot, res).await;
}

#[salvo::handler]
pub(crate) async fn inject_staff_identity(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    depot.insert_identity(TEST_STAFF_IDENTITY);
    ctrl.call_next(req, depot, res).await;
}

/// An `AppContext` where every service is an expectation-less mock; tests
/// swap in the one service they exercise, so any other call panics.
fn base_app_context() -> AppContext {
    AppContext {
        auth: Arc::new(MockAuthService::new()),
        bookings: Arc::new(MockBookingsService::new()),
        carts: Arc::new(MockCartsService::new()),
        catalog: Arc::new(MockCatalogService::new()),
        contact: Arc::new(MockContactService::new()),
        dashboard: Arc::new(MockDashboardService::new()),
        reviews: Arc::new(MockReviewsService::new()),
        team: Arc::new(MockTeamService::new()),
        users: Arc::new(MockUsersService::new()),
    }
}

pub(crate) fn state_with_auth(auth: MockAuthService) -> Arc<State> {
    let mut app = base_app_context();
    app.auth = Arc::new(auth);

    Arc::new(State::new(app))
}

pub(crate) fn state_with_bookings(bookings: MockBookingsService) -> Arc<State> {
    let mut app = base_app_context();
    app.bookings = Arc::new(bookings);

    Arc::new(State::new(app))
}

pub(crate) fn state_with_carts(carts: MockCartsService) -> Arc<State> {
    let mut app = base_app_context();
    app.carts = Arc::new(carts);

    Arc::new(State::new(app))
}

pub(crate) fn state_with_catalog(catalog: MockCatalogService) -> Arc<State> {
    let mut app = base_app_context();
    app.catalog = Arc::new(catalog);

    Arc::new(State::new(app))
}

pub(crate) fn state_with_contact(contact: MockContactService) -> Arc<State> {
    let mut app = base_app_context();
    app.contact = Arc::new(contact);

    Arc::new(State::new(app))
}

pub(crate) fn state_with_dashboard(dashboard: MockDashboardService) -> Arc<State> {
    let mut app = base_app_context();
    app.dashboard = Arc::new(dashboard);

    Arc::new(State::new(app))
}

pub(crate) fn state_with_reviews(reviews: MockReviewsService) -> Arc<State> {
    let mut app = base_app_context();
    app.reviews = Arc::new(reviews);

    Arc::new(State::new(app))
}

pub(crate) fn state_with_team(team: MockTeamService) -> Arc<State> {
    let mut app = base_app_context();
    app.team = Arc::new(team);

    Arc::new(State::new(app))
}

pub(crate) fn state_with_users(users: MockUsersService) -> Arc<State> {
    let mut app = base_app_context();
    app.users = Arc::new(users);

    Arc::new(State::new(app))
}

/// Wire a route behind the test identity, as the auth middleware would.
pub(crate) fn authed_service(state: Arc<State>, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state))
            .hoop(inject_identity)
            .push(route),
    )
}

/// Same as [`authed_service`] but with the staff identity.
pub(crate) fn staff_service(state: Arc<State>, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state))
            .hoop(inject_staff_identity)
            .push(route),
    )
}

/// Wire a route with no identity at all, as public routes are served.
pub(crate) fn public_service(state: Arc<State>, route: Router) -> Service {
    Service::new(Router::new().hoop(inject(state)).push(route))
}

pub(crate) fn make_booking(uuid: BookingUuid) -> Booking {
    Booking {
        uuid,
        user_uuid: TEST_USER_UUID,
        service_uuid: ServiceUuid::from_uuid(Uuid::nil()),
        service_name: "Wedding Video".to_string(),
        event_date: civil::date(2025, 6, 1),
        event_time: civil::time(14, 0, 0, 0),
        event_location: "Pier Approach".to_string(),
        status: BookingStatus::Pending,
        booked_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_cart_entry(uuid: CartEntryUuid) -> CartEntry {
    CartEntry {
        uuid,
        user_uuid: TEST_USER_UUID,
        service_uuid: ServiceUuid::from_uuid(Uuid::nil()),
        service_name: "Wedding Video".to_string(),
        service_price: 1_200_00,
        service_image: None,
        event_date: civil::date(2025, 6, 1),
        event_time: civil::time(14, 0, 0, 0),
        event_location: "Pier Approach".to_string(),
        added_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_catalog_service(uuid: ServiceUuid) -> CatalogService {
    CatalogService {
        uuid,
        name: "Wedding Video".to_string(),
        category: ServiceCategory::Video,
        description: "Full-day wedding shoot".to_string(),
        price: 1_200_00,
        image: None,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_user(uuid: UserUuid) -> User {
    User {
        uuid,
        username: "maya".to_string(),
        email: "maya@example.com".to_string(),
        first_name: "Maya".to_string(),
        last_name: "Chen".to_string(),
        phone: None,
        address: "12 Harbour Lane".to_string(),
        profile_image: None,
        staff: false,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_review(uuid: ReviewUuid) -> Review {
    Review {
        uuid,
        user_uuid: TEST_USER_UUID,
        username: "maya".to_string(),
        service_uuid: ServiceUuid::from_uuid(Uuid::nil()),
        rating: 5,
        comment: "Lovely photos, quick turnaround.".to_string(),
        created_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_team_member(uuid: TeamMemberUuid) -> TeamMember {
    TeamMember {
        uuid,
        name: "Noor Haddad".to_string(),
        role: TeamRole::Director,
        profile_image: None,
        bio: "Directs most of our film work.".to_string(),
    }
}
