//! Reviews service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::{
        reviews::{
            errors::ReviewsServiceError,
            models::{NewReview, Review, ReviewUuid},
            repository::PgReviewsRepository,
        },
        users::models::UserUuid,
    },
};

#[derive(Debug, Clone)]
pub struct PgReviewsService {
    db: Db,
    repository: PgReviewsRepository,
}

impl PgReviewsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgReviewsRepository::new(),
        }
    }
}

#[async_trait]
impl ReviewsService for PgReviewsService {
    async fn list_reviews(&self) -> Result<Vec<Review>, ReviewsServiceError> {
        let mut tx = self.db.begin().await?;

        let reviews = self.repository.list_reviews(&mut tx).await?;

        tx.commit().await?;

        Ok(reviews)
    }

    async fn create_review(
        &self,
        user: UserUuid,
        review: NewReview,
    ) -> Result<Review, ReviewsServiceError> {
        if review.comment.trim().is_empty() {
            return Err(ReviewsServiceError::MissingRequiredData);
        }

        if !(1..=5).contains(&review.rating) {
            return Err(ReviewsServiceError::InvalidData);
        }

        let mut tx = self.db.begin().await?;

        let created = self
            .repository
            .create_review(&mut tx, ReviewUuid::new(), user, &review)
            .await?;

        tx.commit().await?;

        Ok(created)
    }
}

#[automock]
#[async_trait]
pub trait ReviewsService: Send + Sync {
    /// All reviews across the catalog, newest first.
    async fn list_reviews(&self) -> Result<Vec<Review>, ReviewsServiceError>;

    /// Append a review of a service.
    async fn create_review(
        &self,
        user: UserUuid,
        review: NewReview,
    ) -> Result<Review, ReviewsServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{
        domain::catalog::models::{ServiceCategory, ServiceUuid},
        test::TestContext,
    };

    use super::*;

    #[tokio::test]
    async fn create_review_carries_reviewer_username() -> TestResult {
        let ctx = TestContext::new().await;
        let user = ctx.create_user("maya", false).await;
        let service = ctx
            .create_service("Portrait Shoot", ServiceCategory::Photo, 90_00)
            .await;

        let review = ctx
            .reviews
            .create_review(
                user,
                NewReview {
                    service_uuid: service.uuid,
                    rating: 5,
                    comment: "Lovely photos, quick turnaround.".to_string(),
                },
            )
            .await?;

        assert_eq!(review.username, "maya");
        assert_eq!(review.rating, 5);

        Ok(())
    }

    #[tokio::test]
    async fn out_of_range_rating_is_rejected() {
        let ctx = TestContext::new().await;
        let user = ctx.create_user("maya", false).await;

        for rating in [0, 6, -1] {
            let result = ctx
                .reviews
                .create_review(
                    user,
                    NewReview {
                        service_uuid: ServiceUuid::new(),
                        rating,
                        comment: "n/a".to_string(),
                    },
                )
                .await;

            assert!(
                matches!(result, Err(ReviewsServiceError::InvalidData)),
                "expected InvalidData for rating {rating}, got {result:?}"
            );
        }
    }

    #[tokio::test]
    async fn review_of_unknown_service_is_rejected() {
        let ctx = TestContext::new().await;
        let user = ctx.create_user("maya", false).await;

        let result = ctx
            .reviews
            .create_review(
                user,
                NewReview {
                    service_uuid: ServiceUuid::new(),
                    rating: 4,
                    comment: "Great".to_string(),
                },
            )
            .await;

        assert!(
            matches!(result, Err(ReviewsServiceError::InvalidReference)),
            "expected InvalidReference, got {result:?}"
        );
    }

    #[tokio::test]
    async fn list_reviews_is_newest_first() -> TestResult {
        let ctx = TestContext::new().await;
        let user = ctx.create_user("maya", false).await;
        let service = ctx
            .create_service("Portrait Shoot", ServiceCategory::Photo, 90_00)
            .await;

        for comment in ["first", "second"] {
            ctx.reviews
                .create_review(
                    user,
                    NewReview {
                        service_uuid: service.uuid,
                        rating: 4,
                        comment: comment.to_string(),
                    },
                )
                .await?;
        }

        let reviews = ctx.reviews.list_reviews().await?;

        assert_eq!(reviews.len(), 2);
        assert_eq!(reviews[0].comment, "second");

        Ok(())
    }
}
