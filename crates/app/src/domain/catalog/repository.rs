//! Service Catalog Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};

use crate::domain::catalog::models::{NewService, Service, ServiceCategory, ServiceUuid};

const LIST_SERVICES_SQL: &str = include_str!("sql/list_services.sql");
const GET_SERVICE_SQL: &str = include_str!("sql/get_service.sql");
const CREATE_SERVICE_SQL: &str = include_str!("sql/create_service.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgCatalogRepository;

impl PgCatalogRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_services(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<Service>, sqlx::Error> {
        query_as::<Postgres, Service>(LIST_SERVICES_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn get_service(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        service: ServiceUuid,
    ) -> Result<Service, sqlx::Error> {
        query_as::<Postgres, Service>(GET_SERVICE_SQL)
            .bind(service.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn create_service(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        service: &NewService,
    ) -> Result<Service, sqlx::Error> {
        query_as::<Postgres, Service>(CREATE_SERVICE_SQL)
            .bind(service.uuid.into_uuid())
            .bind(&service.name)
            .bind(service.category.as_str())
            .bind(&service.description)
            .bind(try_into_price(service.price)?)
            .bind(&service.image)
            .fetch_one(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for Service {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let category: ServiceCategory =
            row.try_get::<String, _>("category")?
                .parse()
                .map_err(|e| sqlx::Error::ColumnDecode {
                    index: "category".to_string(),
                    source: Box::new(e),
                })?;

        Ok(Self {
            uuid: ServiceUuid::from_uuid(row.try_get("uuid")?),
            name: row.try_get("name")?,
            category,
            description: row.try_get("description")?,
            price: try_get_price(row, "price")?,
            image: row.try_get("image")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}

pub(crate) fn try_get_price(row: &PgRow, col: &str) -> Result<u64, sqlx::Error> {
    let price_i64: i64 = row.try_get(col)?;

    u64::try_from(price_i64).map_err(|e| sqlx::Error::ColumnDecode {
        index: col.to_string(),
        source: Box::new(e),
    })
}

pub(crate) fn try_into_price(price: u64) -> Result<i64, sqlx::Error> {
    i64::try_from(price).map_err(|e| sqlx::Error::ColumnDecode {
        index: "price".to_string(),
        source: Box::new(e),
    })
}
