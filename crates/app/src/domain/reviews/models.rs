//! Review Models

use jiff::Timestamp;

use crate::{
    domain::{catalog::models::ServiceUuid, users::models::UserUuid},
    uuids::TypedUuid,
};

/// Review UUID
pub type ReviewUuid = TypedUuid<Review>;

/// A customer rating of a catalog service. Append-only.
#[derive(Debug, Clone)]
pub struct Review {
    pub uuid: ReviewUuid,
    pub user_uuid: UserUuid,
    /// Reviewer's username, joined in for display.
    pub username: String,
    pub service_uuid: ServiceUuid,
    pub rating: i16,
    pub comment: String,
    pub created_at: Timestamp,
}

/// New Review Model
#[derive(Debug, Clone, PartialEq)]
pub struct NewReview {
    pub service_uuid: ServiceUuid,
    pub rating: i16,
    pub comment: String,
}
