//! Create Review Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use darkroom_app::domain::reviews::models::NewReview;

use crate::{
    extensions::*,
    reviews::{errors::into_status_error, index::ReviewResponse},
    state::State,
};

/// Create Review Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateReviewRequest {
    /// The catalog service being reviewed
    pub service: Uuid,

    /// Rating between 1 and 5
    pub rating: i16,

    pub comment: String,
}

impl From<CreateReviewRequest> for NewReview {
    fn from(request: CreateReviewRequest) -> Self {
        NewReview {
            service_uuid: request.service.into(),
            rating: request.rating,
            comment: request.comment,
        }
    }
}

/// Create Review Handler
#[endpoint(
    tags("reviews"),
    summary = "Create Review",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Review created"),
        (status_code = StatusCode::NOT_FOUND, description = "Service not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateReviewRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ReviewResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let identity = depot.identity_or_401()?;

    let created = state
        .app
        .reviews
        .create_review(identity.user, json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    res.status_code(StatusCode::CREATED);

    Ok(Json(created.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use darkroom_app::domain::reviews::{
        MockReviewsService, ReviewsServiceError, models::ReviewUuid,
    };

    use crate::test_helpers::{TEST_USER_UUID, authed_service, make_review, state_with_reviews};

    use super::*;

    fn make_service(reviews: MockReviewsService) -> Service {
        authed_service(
            state_with_reviews(reviews),
            Router::with_path("reviews").post(handler),
        )
    }

    #[tokio::test]
    async fn test_create_review_success() -> TestResult {
        let service_uuid = Uuid::now_v7();

        let mut reviews = MockReviewsService::new();

        reviews
            .expect_create_review()
            .once()
            .withf(move |user, new| {
                *user == TEST_USER_UUID && new.service_uuid == service_uuid.into() && new.rating == 5
            })
            .return_once(|_, _| Ok(make_review(ReviewUuid::new())));

        let mut res = TestClient::post("http://example.com/reviews")
            .json(&json!({
                "service": service_uuid,
                "rating": 5,
                "comment": "Lovely photos, quick turnaround.",
            }))
            .send(&make_service(reviews))
            .await;

        let body: ReviewResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(body.rating, 5);

        Ok(())
    }

    #[tokio::test]
    async fn test_out_of_range_rating_returns_400() -> TestResult {
        let mut reviews = MockReviewsService::new();

        reviews
            .expect_create_review()
            .once()
            .return_once(|_, _| Err(ReviewsServiceError::InvalidData));

        let res = TestClient::post("http://example.com/reviews")
            .json(&json!({
                "service": Uuid::now_v7(),
                "rating": 9,
                "comment": "n/a",
            }))
            .send(&make_service(reviews))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
