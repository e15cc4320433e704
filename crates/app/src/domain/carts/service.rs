//! Carts service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::{
        carts::{
            errors::CartsServiceError,
            models::{CartEntry, CartEntryUuid, NewCartEntry},
            repository::PgCartEntriesRepository,
        },
        catalog::PgCatalogRepository,
        users::models::UserUuid,
    },
};

#[derive(Debug, Clone)]
pub struct PgCartsService {
    db: Db,
    entries_repository: PgCartEntriesRepository,
    catalog_repository: PgCatalogRepository,
}

impl PgCartsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            entries_repository: PgCartEntriesRepository::new(),
            catalog_repository: PgCatalogRepository::new(),
        }
    }
}

#[async_trait]
impl CartsService for PgCartsService {
    async fn add_to_cart(
        &self,
        user: UserUuid,
        entry: NewCartEntry,
    ) -> Result<CartEntry, CartsServiceError> {
        if entry.event_location.trim().is_empty() {
            return Err(CartsServiceError::MissingRequiredData);
        }

        let mut tx = self.db.begin().await?;

        // Resolve the service up front so the caller gets NotFound for a
        // bad reference and the entry can be returned enriched.
        let service = self
            .catalog_repository
            .get_service(&mut tx, entry.service_uuid)
            .await?;

        let entry_uuid = CartEntryUuid::new();

        let added_at = self
            .entries_repository
            .create_cart_entry(&mut tx, user, entry_uuid, &entry)
            .await?;

        tx.commit().await?;

        Ok(CartEntry {
            uuid: entry_uuid,
            user_uuid: user,
            service_uuid: service.uuid,
            service_name: service.name,
            service_price: service.price,
            service_image: service.image,
            event_date: entry.event_date,
            event_time: entry.event_time,
            event_location: entry.event_location,
            added_at,
        })
    }

    async fn list_cart(&self, user: UserUuid) -> Result<Vec<CartEntry>, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let entries = self
            .entries_repository
            .list_cart_entries(&mut tx, user)
            .await?;

        tx.commit().await?;

        Ok(entries)
    }

    async fn remove_from_cart(
        &self,
        user: UserUuid,
        entry: CartEntryUuid,
    ) -> Result<(), CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self
            .entries_repository
            .delete_cart_entry(&mut tx, user, entry)
            .await?;

        if rows_affected == 0 {
            return Err(CartsServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait CartsService: Send + Sync {
    /// Save a booking intent to the user's cart.
    ///
    /// Availability is deliberately not consulted here; several users may
    /// cart the same slot and the conflict resolves at booking time.
    async fn add_to_cart(
        &self,
        user: UserUuid,
        entry: NewCartEntry,
    ) -> Result<CartEntry, CartsServiceError>;

    /// All of the user's cart entries, newest first, enriched with the
    /// referenced service's display fields.
    async fn list_cart(&self, user: UserUuid) -> Result<Vec<CartEntry>, CartsServiceError>;

    /// Remove a cart entry owned by the user.
    async fn remove_from_cart(
        &self,
        user: UserUuid,
        entry: CartEntryUuid,
    ) -> Result<(), CartsServiceError>;
}

#[cfg(test)]
mod tests {
    use jiff::civil;
    use testresult::TestResult;

    use crate::{domain::catalog::models::ServiceCategory, test::TestContext};

    use super::*;

    #[tokio::test]
    async fn add_to_cart_returns_enriched_entry() -> TestResult {
        let ctx = TestContext::new().await;
        let user = ctx.create_user("maya", false).await;
        let service = ctx
            .create_service("Wedding Video", ServiceCategory::Video, 1_200_00)
            .await;

        let entry = ctx
            .carts
            .add_to_cart(
                user,
                NewCartEntry {
                    service_uuid: service.uuid,
                    event_date: civil::date(2025, 6, 1),
                    event_time: civil::time(14, 0, 0, 0),
                    event_location: "Pier Approach".to_string(),
                },
            )
            .await?;

        assert_eq!(entry.user_uuid, user);
        assert_eq!(entry.service_name, "Wedding Video");
        assert_eq!(entry.service_price, 1_200_00);
        assert_eq!(entry.event_date, civil::date(2025, 6, 1));

        Ok(())
    }

    #[tokio::test]
    async fn add_to_cart_unknown_service_returns_not_found() {
        let ctx = TestContext::new().await;
        let user = ctx.create_user("maya", false).await;

        let result = ctx
            .carts
            .add_to_cart(
                user,
                NewCartEntry {
                    service_uuid: crate::domain::catalog::models::ServiceUuid::new(),
                    event_date: civil::date(2025, 6, 1),
                    event_time: civil::time(14, 0, 0, 0),
                    event_location: "Pier Approach".to_string(),
                },
            )
            .await;

        assert!(
            matches!(result, Err(CartsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn add_to_cart_blank_location_is_rejected() {
        let ctx = TestContext::new().await;
        let user = ctx.create_user("maya", false).await;

        let result = ctx
            .carts
            .add_to_cart(
                user,
                NewCartEntry {
                    service_uuid: crate::domain::catalog::models::ServiceUuid::new(),
                    event_date: civil::date(2025, 6, 1),
                    event_time: civil::time(14, 0, 0, 0),
                    event_location: "  ".to_string(),
                },
            )
            .await;

        assert!(
            matches!(result, Err(CartsServiceError::MissingRequiredData)),
            "expected MissingRequiredData, got {result:?}"
        );
    }

    #[tokio::test]
    async fn identical_entries_are_not_deduplicated() -> TestResult {
        let ctx = TestContext::new().await;
        let user = ctx.create_user("maya", false).await;
        let service = ctx
            .create_service("Portrait Shoot", ServiceCategory::Photo, 90_00)
            .await;

        let entry = NewCartEntry {
            service_uuid: service.uuid,
            event_date: civil::date(2025, 7, 12),
            event_time: civil::time(10, 30, 0, 0),
            event_location: "Studio B".to_string(),
        };

        ctx.carts.add_to_cart(user, entry.clone()).await?;
        ctx.carts.add_to_cart(user, entry).await?;

        let cart = ctx.carts.list_cart(user).await?;

        assert_eq!(cart.len(), 2);

        Ok(())
    }

    #[tokio::test]
    async fn list_cart_only_returns_own_entries() -> TestResult {
        let ctx = TestContext::new().await;
        let user_a = ctx.create_user("ana", false).await;
        let user_b = ctx.create_user("ben", false).await;
        let service = ctx
            .create_service("Voiceover Session", ServiceCategory::Audio, 150_00)
            .await;

        ctx.carts
            .add_to_cart(
                user_a,
                NewCartEntry {
                    service_uuid: service.uuid,
                    event_date: civil::date(2025, 8, 2),
                    event_time: civil::time(9, 0, 0, 0),
                    event_location: "Booth 1".to_string(),
                },
            )
            .await?;

        let cart_b = ctx.carts.list_cart(user_b).await?;

        assert!(cart_b.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn remove_from_cart_twice_reports_not_found() -> TestResult {
        let ctx = TestContext::new().await;
        let user = ctx.create_user("maya", false).await;
        let service = ctx
            .create_service("Portrait Shoot", ServiceCategory::Photo, 90_00)
            .await;

        let entry = ctx
            .carts
            .add_to_cart(
                user,
                NewCartEntry {
                    service_uuid: service.uuid,
                    event_date: civil::date(2025, 7, 12),
                    event_time: civil::time(10, 30, 0, 0),
                    event_location: "Studio B".to_string(),
                },
            )
            .await?;

        ctx.carts.remove_from_cart(user, entry.uuid).await?;

        let result = ctx.carts.remove_from_cart(user, entry.uuid).await;

        assert!(
            matches!(result, Err(CartsServiceError::NotFound)),
            "expected NotFound on repeated delete, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn remove_from_cart_cannot_touch_other_users_entry() -> TestResult {
        let ctx = TestContext::new().await;
        let user_a = ctx.create_user("ana", false).await;
        let user_b = ctx.create_user("ben", false).await;
        let service = ctx
            .create_service("Portrait Shoot", ServiceCategory::Photo, 90_00)
            .await;

        let entry = ctx
            .carts
            .add_to_cart(
                user_a,
                NewCartEntry {
                    service_uuid: service.uuid,
                    event_date: civil::date(2025, 7, 12),
                    event_time: civil::time(10, 30, 0, 0),
                    event_location: "Studio B".to_string(),
                },
            )
            .await?;

        let result = ctx.carts.remove_from_cart(user_b, entry.uuid).await;

        assert!(
            matches!(result, Err(CartsServiceError::NotFound)),
            "expected NotFound for foreign entry, got {result:?}"
        );

        assert_eq!(ctx.carts.list_cart(user_a).await?.len(), 1);

        Ok(())
    }
}
