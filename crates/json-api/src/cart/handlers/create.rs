//! Add To Cart Handler

use std::sync::Arc;

use jiff::civil::{Date, Time};
use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use darkroom_app::domain::carts::models::NewCartEntry;

use crate::{
    cart::{errors::into_status_error, index::CartEntryResponse},
    extensions::*,
    state::State,
};

/// Add To Cart Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct AddToCartRequest {
    /// The catalog service to book
    pub service: Uuid,

    /// Event date (ISO 8601, e.g. "2025-06-01")
    pub event_date: String,

    /// Event time (ISO 8601, e.g. "14:00")
    pub event_time: String,

    pub event_location: String,
}

impl AddToCartRequest {
    fn into_new_entry(self) -> Result<NewCartEntry, StatusError> {
        let event_date: Date = self
            .event_date
            .parse()
            .or_400("could not parse \"event_date\"")?;

        let event_time: Time = self
            .event_time
            .parse()
            .or_400("could not parse \"event_time\"")?;

        Ok(NewCartEntry {
            service_uuid: self.service.into(),
            event_date,
            event_time,
            event_location: self.event_location,
        })
    }
}

/// Add To Cart Handler
#[endpoint(
    tags("cart"),
    summary = "Add To Cart",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Entry added to cart"),
        (status_code = StatusCode::NOT_FOUND, description = "Service not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<AddToCartRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<CartEntryResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let identity = depot.identity_or_401()?;

    let entry = json.into_inner().into_new_entry()?;

    let created = state
        .app
        .carts
        .add_to_cart(identity.user, entry)
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/cart/{}", created.uuid), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(created.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use darkroom_app::domain::carts::{
        CartsServiceError, MockCartsService, models::CartEntryUuid,
    };

    use crate::test_helpers::{TEST_USER_UUID, authed_service, make_cart_entry, state_with_carts};

    use super::*;

    fn make_service(carts: MockCartsService) -> Service {
        authed_service(
            state_with_carts(carts),
            Router::with_path("cart").post(handler),
        )
    }

    #[tokio::test]
    async fn test_add_to_cart_success() -> TestResult {
        let service_uuid = Uuid::now_v7();
        let entry = make_cart_entry(CartEntryUuid::new());
        let entry_uuid = entry.uuid;

        let mut carts = MockCartsService::new();

        carts
            .expect_add_to_cart()
            .once()
            .withf(move |user, new| {
                *user == TEST_USER_UUID
                    && new.service_uuid == service_uuid.into()
                    && new.event_location == "Pier Approach"
            })
            .return_once(move |_, _| Ok(entry));

        let mut res = TestClient::post("http://example.com/cart")
            .json(&json!({
                "service": service_uuid,
                "event_date": "2025-06-01",
                "event_time": "14:00",
                "event_location": "Pier Approach",
            }))
            .send(&make_service(carts))
            .await;

        let body: CartEntryResponse = res.take_json().await?;
        let location = res.headers().get("location").and_then(|v| v.to_str().ok());

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(location, Some(format!("/cart/{entry_uuid}").as_str()));
        assert_eq!(body.uuid, Uuid::from(entry_uuid));

        Ok(())
    }

    #[tokio::test]
    async fn test_unparsable_date_returns_400_without_service_call() -> TestResult {
        let mut carts = MockCartsService::new();

        carts.expect_add_to_cart().never();

        let res = TestClient::post("http://example.com/cart")
            .json(&json!({
                "service": Uuid::now_v7(),
                "event_date": "01/06/2025",
                "event_time": "14:00",
                "event_location": "Pier Approach",
            }))
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_unknown_service_returns_404() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_add_to_cart()
            .once()
            .return_once(|_, _| Err(CartsServiceError::NotFound));

        let res = TestClient::post("http://example.com/cart")
            .json(&json!({
                "service": Uuid::now_v7(),
                "event_date": "2025-06-01",
                "event_time": "14:00",
                "event_location": "Pier Approach",
            }))
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
