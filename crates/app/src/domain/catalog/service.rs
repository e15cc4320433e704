//! Service Catalog service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::catalog::{
        errors::CatalogServiceError,
        models::{NewService, Service, ServiceUuid},
        repository::PgCatalogRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgCatalogService {
    db: Db,
    repository: PgCatalogRepository,
}

impl PgCatalogService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgCatalogRepository::new(),
        }
    }
}

#[async_trait]
impl CatalogService for PgCatalogService {
    async fn list_services(&self) -> Result<Vec<Service>, CatalogServiceError> {
        let mut tx = self.db.begin().await?;

        let services = self.repository.list_services(&mut tx).await?;

        tx.commit().await?;

        Ok(services)
    }

    async fn get_service(&self, service: ServiceUuid) -> Result<Service, CatalogServiceError> {
        let mut tx = self.db.begin().await?;

        let service = self.repository.get_service(&mut tx, service).await?;

        tx.commit().await?;

        Ok(service)
    }

    async fn create_service(&self, service: NewService) -> Result<Service, CatalogServiceError> {
        if service.name.trim().is_empty() {
            return Err(CatalogServiceError::MissingRequiredData);
        }

        let mut tx = self.db.begin().await?;

        let created = self.repository.create_service(&mut tx, &service).await?;

        tx.commit().await?;

        Ok(created)
    }
}

#[automock]
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// Retrieves the full catalog, ordered by name.
    async fn list_services(&self) -> Result<Vec<Service>, CatalogServiceError>;

    /// Retrieve a single catalog service.
    async fn get_service(&self, service: ServiceUuid) -> Result<Service, CatalogServiceError>;

    /// Creates a new catalog service (admin tooling).
    async fn create_service(&self, service: NewService) -> Result<Service, CatalogServiceError>;
}
