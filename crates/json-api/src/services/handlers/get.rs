//! Get Service Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use darkroom_app::domain::catalog::models::Service as CatalogEntry;

use crate::{extensions::*, services::errors::into_status_error, state::State};

/// A catalog service as returned by the API.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ServiceResponse {
    /// The unique identifier of the service
    pub uuid: Uuid,

    /// Display name
    pub name: String,

    /// Production category: video, audio, or photo
    pub category: String,

    pub description: String,

    /// Price in minor units (cents/pence)
    pub price: u64,

    /// Opaque image store reference
    pub image: Option<String>,
}

impl From<CatalogEntry> for ServiceResponse {
    fn from(service: CatalogEntry) -> Self {
        ServiceResponse {
            uuid: service.uuid.into(),
            name: service.name,
            category: service.category.to_string(),
            description: service.description,
            price: service.price,
            image: service.image,
        }
    }
}

/// Get Service Handler
///
/// Returns a single catalog service.
#[endpoint(tags("services"), summary = "Get Service")]
pub(crate) async fn handler(
    service: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<ServiceResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let service = state
        .app
        .catalog
        .get_service(service.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(service.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use darkroom_app::domain::catalog::{
        CatalogServiceError, MockCatalogService, models::ServiceUuid,
    };

    use crate::test_helpers::{make_catalog_service, public_service, state_with_catalog};

    use super::*;

    fn make_service(catalog: MockCatalogService) -> Service {
        public_service(
            state_with_catalog(catalog),
            Router::with_path("services/{service}").get(handler),
        )
    }

    #[tokio::test]
    async fn test_get_returns_200_without_auth() -> TestResult {
        let mut catalog = MockCatalogService::new();
        let uuid = ServiceUuid::new();

        let entry = make_catalog_service(uuid);

        catalog
            .expect_get_service()
            .once()
            .withf(move |u| *u == uuid)
            .return_once(move |_| Ok(entry));

        let mut res = TestClient::get(format!("http://example.com/services/{uuid}"))
            .send(&make_service(catalog))
            .await;

        let body: ServiceResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.category, "video");

        Ok(())
    }

    #[tokio::test]
    async fn test_get_missing_service_returns_404() -> TestResult {
        let mut catalog = MockCatalogService::new();
        let uuid = ServiceUuid::new();

        catalog
            .expect_get_service()
            .once()
            .return_once(|_| Err(CatalogServiceError::NotFound));

        let res = TestClient::get(format!("http://example.com/services/{uuid}"))
            .send(&make_service(catalog))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
