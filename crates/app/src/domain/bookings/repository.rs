//! Bookings Repository

use jiff::{
    Timestamp,
    civil::{Date, Time},
};
use jiff_sqlx::{Date as SqlxDate, Time as SqlxTime, Timestamp as SqlxTimestamp};
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as, query_scalar};
use uuid::Uuid;

use crate::domain::{
    bookings::models::{Booking, BookingStatus, BookingUpdate, BookingUuid, NewBooking},
    catalog::models::ServiceUuid,
    users::models::UserUuid,
};

const COUNT_CONFLICTING_SQL: &str = include_str!("sql/count_conflicting.sql");
const CREATE_BOOKING_SQL: &str = include_str!("sql/create_booking.sql");
const LIST_BOOKINGS_SQL: &str = include_str!("sql/list_bookings.sql");
const GET_BOOKING_FOR_USER_SQL: &str = include_str!("sql/get_booking_for_user.sql");
const GET_BOOKING_SQL: &str = include_str!("sql/get_booking.sql");
const UPDATE_BOOKING_SQL: &str = include_str!("sql/update_booking.sql");
const SET_BOOKING_STATUS_SQL: &str = include_str!("sql/set_booking_status.sql");
const DELETE_BOOKING_SQL: &str = include_str!("sql/delete_booking.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgBookingsRepository;

impl PgBookingsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// Number of non-cancelled bookings holding the given slot, optionally
    /// ignoring one booking (used while editing so a booking keeps its own
    /// slot).
    pub(crate) async fn count_conflicting(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        service: ServiceUuid,
        event_date: Date,
        event_time: Time,
        exclude: Option<BookingUuid>,
    ) -> Result<i64, sqlx::Error> {
        query_scalar(COUNT_CONFLICTING_SQL)
            .bind(service.into_uuid())
            .bind(SqlxDate::from(event_date))
            .bind(SqlxTime::from(event_time))
            .bind(exclude.map(BookingUuid::into_uuid))
            .fetch_one(&mut **tx)
            .await
    }

    /// Inserts a pending booking and returns its timestamps.
    pub(crate) async fn create_booking(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        booking_uuid: BookingUuid,
        user: UserUuid,
        booking: &NewBooking,
    ) -> Result<(Timestamp, Timestamp), sqlx::Error> {
        let (booked_at, updated_at): (SqlxTimestamp, SqlxTimestamp) =
            query_as(CREATE_BOOKING_SQL)
                .bind(booking_uuid.into_uuid())
                .bind(user.into_uuid())
                .bind(booking.service_uuid.into_uuid())
                .bind(SqlxDate::from(booking.event_date))
                .bind(SqlxTime::from(booking.event_time))
                .bind(&booking.event_location)
                .fetch_one(&mut **tx)
                .await?;

        Ok((booked_at.to_jiff(), updated_at.to_jiff()))
    }

    pub(crate) async fn list_bookings(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserUuid,
        status: Option<BookingStatus>,
    ) -> Result<Vec<Booking>, sqlx::Error> {
        query_as::<Postgres, Booking>(LIST_BOOKINGS_SQL)
            .bind(user.into_uuid())
            .bind(status.map(BookingStatus::as_str))
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn get_booking_for_user(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserUuid,
        booking: BookingUuid,
    ) -> Result<Booking, sqlx::Error> {
        query_as::<Postgres, Booking>(GET_BOOKING_FOR_USER_SQL)
            .bind(user.into_uuid())
            .bind(booking.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    /// Owner-agnostic lookup, used by the staff deletion path.
    pub(crate) async fn get_booking(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        booking: BookingUuid,
    ) -> Result<Booking, sqlx::Error> {
        query_as::<Postgres, Booking>(GET_BOOKING_SQL)
            .bind(booking.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    /// Overwrites a booking's event fields and returns the new `updated_at`.
    pub(crate) async fn update_booking(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        booking: BookingUuid,
        update: &BookingUpdate,
    ) -> Result<Timestamp, sqlx::Error> {
        let (updated_at,): (SqlxTimestamp,) = query_as(UPDATE_BOOKING_SQL)
            .bind(booking.into_uuid())
            .bind(update.service_uuid.into_uuid())
            .bind(SqlxDate::from(update.event_date))
            .bind(SqlxTime::from(update.event_time))
            .bind(&update.event_location)
            .fetch_one(&mut **tx)
            .await?;

        Ok(updated_at.to_jiff())
    }

    pub(crate) async fn set_booking_status(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        booking: BookingUuid,
        status: BookingStatus,
    ) -> Result<Timestamp, sqlx::Error> {
        let (updated_at,): (SqlxTimestamp,) = query_as(SET_BOOKING_STATUS_SQL)
            .bind(booking.into_uuid())
            .bind(status.as_str())
            .fetch_one(&mut **tx)
            .await?;

        Ok(updated_at.to_jiff())
    }

    pub(crate) async fn delete_booking(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        booking: BookingUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_BOOKING_SQL)
            .bind(booking.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for Booking {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let status: BookingStatus =
            row.try_get::<String, _>("status")?
                .parse()
                .map_err(|e| sqlx::Error::ColumnDecode {
                    index: "status".to_string(),
                    source: Box::new(e),
                })?;

        Ok(Self {
            uuid: BookingUuid::from_uuid(row.try_get("uuid")?),
            user_uuid: UserUuid::from_uuid(row.try_get("user_uuid")?),
            service_uuid: row.try_get::<Uuid, _>("service_uuid")?.into(),
            service_name: row.try_get("service_name")?,
            event_date: row.try_get::<SqlxDate, _>("event_date")?.to_jiff(),
            event_time: row.try_get::<SqlxTime, _>("event_time")?.to_jiff(),
            event_location: row.try_get("event_location")?,
            status,
            booked_at: row.try_get::<SqlxTimestamp, _>("booked_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
