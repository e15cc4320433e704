//! App Router

use salvo::Router;

use crate::{
    auth, bookings, cart, contact, dashboard, healthcheck, profile, reviews, services, team,
};

pub(crate) fn app_router() -> Router {
    Router::new()
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(
            Router::with_path("services")
                .get(services::index::handler)
                .push(Router::with_path("{service}").get(services::get::handler)),
        )
        .push(Router::with_path("team").get(team::index::handler))
        .push(Router::with_path("reviews").get(reviews::index::handler))
        .push(
            Router::new()
                .hoop(auth::middleware::handler)
                .push(Router::with_path("reviews").post(reviews::create::handler))
                .push(
                    Router::with_path("profile")
                        .get(profile::get::handler)
                        .put(profile::update::handler),
                )
                .push(
                    Router::with_path("cart")
                        .get(cart::index::handler)
                        .post(cart::create::handler)
                        .push(Router::with_path("{entry}").delete(cart::delete::handler)),
                )
                .push(
                    Router::with_path("bookings")
                        .get(bookings::index::handler)
                        .post(bookings::create::handler)
                        .push(Router::with_path("from-cart").post(bookings::promote::handler))
                        .push(
                            Router::with_path("{booking}")
                                .get(bookings::get::handler)
                                .put(bookings::update::handler)
                                .delete(bookings::delete::handler)
                                .push(
                                    Router::with_path("cancel").post(bookings::cancel::handler),
                                )
                                .push(
                                    Router::with_path("reinstate")
                                        .post(bookings::reinstate::handler),
                                ),
                        ),
                )
                .push(
                    Router::with_path("dashboard")
                        .get(dashboard::get::handler)
                        .push(
                            Router::with_path("cart/{entry}")
                                .delete(dashboard::remove_cart_item::handler),
                        ),
                )
                .push(Router::with_path("contact").post(contact::create::handler)),
        )
}
