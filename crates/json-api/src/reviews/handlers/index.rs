//! Review Index Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use darkroom_app::domain::reviews::models::Review;

use crate::{extensions::*, reviews::errors::into_status_error, state::State};

/// A review as returned by the API.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ReviewResponse {
    /// The unique identifier of the review
    pub uuid: Uuid,

    /// The reviewer's username
    pub user: String,

    /// The reviewed catalog service
    pub service: Uuid,

    /// Rating between 1 and 5
    pub rating: i16,

    pub comment: String,

    pub created_at: String,
}

impl From<Review> for ReviewResponse {
    fn from(review: Review) -> Self {
        ReviewResponse {
            uuid: review.uuid.into(),
            user: review.username,
            service: review.service_uuid.into(),
            rating: review.rating,
            comment: review.comment,
            created_at: review.created_at.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ReviewsResponse {
    /// All reviews, newest first
    pub reviews: Vec<ReviewResponse>,
}

/// Review Index Handler
///
/// Returns all reviews across the catalog.
#[endpoint(tags("reviews"), summary = "List Reviews")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<ReviewsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let reviews = state
        .app
        .reviews
        .list_reviews()
        .await
        .map_err(into_status_error)?;

    Ok(Json(ReviewsResponse {
        reviews: reviews.into_iter().map(Into::into).collect(),
    }))
}
