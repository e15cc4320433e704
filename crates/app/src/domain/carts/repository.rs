//! Cart Entries Repository

use jiff_sqlx::{Date as SqlxDate, Time as SqlxTime, Timestamp as SqlxTimestamp};
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};

use crate::domain::{
    carts::models::{CartEntry, CartEntryUuid, NewCartEntry},
    catalog::try_get_price,
    users::models::UserUuid,
};

const LIST_CART_ENTRIES_SQL: &str = include_str!("sql/list_cart_entries.sql");
const GET_CART_ENTRY_SQL: &str = include_str!("sql/get_cart_entry.sql");
const CREATE_CART_ENTRY_SQL: &str = include_str!("sql/create_cart_entry.sql");
const DELETE_CART_ENTRY_SQL: &str = include_str!("sql/delete_cart_entry.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgCartEntriesRepository;

impl PgCartEntriesRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_cart_entries(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserUuid,
    ) -> Result<Vec<CartEntry>, sqlx::Error> {
        query_as::<Postgres, CartEntry>(LIST_CART_ENTRIES_SQL)
            .bind(user.into_uuid())
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn get_cart_entry(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserUuid,
        entry: CartEntryUuid,
    ) -> Result<CartEntry, sqlx::Error> {
        query_as::<Postgres, CartEntry>(GET_CART_ENTRY_SQL)
            .bind(user.into_uuid())
            .bind(entry.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    /// Inserts a cart entry and returns its `added_at` timestamp.
    pub(crate) async fn create_cart_entry(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserUuid,
        entry_uuid: CartEntryUuid,
        entry: &NewCartEntry,
    ) -> Result<jiff::Timestamp, sqlx::Error> {
        let (added_at,): (SqlxTimestamp,) = query_as(CREATE_CART_ENTRY_SQL)
            .bind(entry_uuid.into_uuid())
            .bind(user.into_uuid())
            .bind(entry.service_uuid.into_uuid())
            .bind(SqlxDate::from(entry.event_date))
            .bind(SqlxTime::from(entry.event_time))
            .bind(&entry.event_location)
            .fetch_one(&mut **tx)
            .await?;

        Ok(added_at.to_jiff())
    }

    pub(crate) async fn delete_cart_entry(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserUuid,
        entry: CartEntryUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_CART_ENTRY_SQL)
            .bind(entry.into_uuid())
            .bind(user.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for CartEntry {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: CartEntryUuid::from_uuid(row.try_get("uuid")?),
            user_uuid: UserUuid::from_uuid(row.try_get("user_uuid")?),
            service_uuid: row.try_get::<uuid::Uuid, _>("service_uuid")?.into(),
            service_name: row.try_get("service_name")?,
            service_price: try_get_price(row, "service_price")?,
            service_image: row.try_get("service_image")?,
            event_date: row.try_get::<SqlxDate, _>("event_date")?.to_jiff(),
            event_time: row.try_get::<SqlxTime, _>("event_time")?.to_jiff(),
            event_location: row.try_get("event_location")?,
            added_at: row.try_get::<SqlxTimestamp, _>("added_at")?.to_jiff(),
        })
    }
}
