//! Bookings service.
//!
//! Owns the availability rule and the cart-to-booking promotion protocol.
//! Every create/update path re-checks the slot inside its own transaction;
//! the partial unique index on non-cancelled bookings closes the remaining
//! check-then-act window, surfacing the loser of a race as `Conflict`.

use async_trait::async_trait;
use jiff::civil::{Date, Time};
use mockall::automock;

use crate::{
    auth::Identity,
    database::Db,
    domain::{
        bookings::{
            errors::BookingsServiceError,
            models::{Booking, BookingStatus, BookingUpdate, BookingUuid, NewBooking},
            repository::PgBookingsRepository,
        },
        carts::{PgCartEntriesRepository, models::CartEntryUuid},
        catalog::{PgCatalogRepository, models::ServiceUuid},
        users::models::UserUuid,
    },
};

#[derive(Debug, Clone)]
pub struct PgBookingsService {
    db: Db,
    repository: PgBookingsRepository,
    cart_repository: PgCartEntriesRepository,
    catalog_repository: PgCatalogRepository,
}

impl PgBookingsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgBookingsRepository::new(),
            cart_repository: PgCartEntriesRepository::new(),
            catalog_repository: PgCatalogRepository::new(),
        }
    }
}

#[async_trait]
impl BookingsService for PgBookingsService {
    async fn is_available(
        &self,
        service: ServiceUuid,
        event_date: Date,
        event_time: Time,
        exclude: Option<BookingUuid>,
    ) -> Result<bool, BookingsServiceError> {
        let mut tx = self.db.begin().await?;

        let conflicts = self
            .repository
            .count_conflicting(&mut tx, service, event_date, event_time, exclude)
            .await?;

        tx.commit().await?;

        Ok(conflicts == 0)
    }

    async fn create_booking(
        &self,
        user: UserUuid,
        booking: NewBooking,
    ) -> Result<Booking, BookingsServiceError> {
        if booking.event_location.trim().is_empty() {
            return Err(BookingsServiceError::MissingRequiredData);
        }

        let mut tx = self.db.begin().await?;

        let service = self
            .catalog_repository
            .get_service(&mut tx, booking.service_uuid)
            .await
            .map_err(reference_error)?;

        let conflicts = self
            .repository
            .count_conflicting(
                &mut tx,
                booking.service_uuid,
                booking.event_date,
                booking.event_time,
                None,
            )
            .await?;

        if conflicts > 0 {
            return Err(BookingsServiceError::Conflict);
        }

        let booking_uuid = BookingUuid::new();

        let (booked_at, updated_at) = self
            .repository
            .create_booking(&mut tx, booking_uuid, user, &booking)
            .await?;

        tx.commit().await?;

        Ok(Booking {
            uuid: booking_uuid,
            user_uuid: user,
            service_uuid: service.uuid,
            service_name: service.name,
            event_date: booking.event_date,
            event_time: booking.event_time,
            event_location: booking.event_location,
            status: BookingStatus::Pending,
            booked_at,
            updated_at,
        })
    }

    async fn promote_cart_entry(
        &self,
        user: UserUuid,
        entry: CartEntryUuid,
    ) -> Result<Booking, BookingsServiceError> {
        let mut tx = self.db.begin().await?;

        let entry = self
            .cart_repository
            .get_cart_entry(&mut tx, user, entry)
            .await?;

        if entry.event_location.trim().is_empty() {
            return Err(BookingsServiceError::MissingRequiredData);
        }

        let conflicts = self
            .repository
            .count_conflicting(
                &mut tx,
                entry.service_uuid,
                entry.event_date,
                entry.event_time,
                None,
            )
            .await?;

        if conflicts > 0 {
            return Err(BookingsServiceError::Conflict);
        }

        let booking_uuid = BookingUuid::new();

        let (booked_at, updated_at) = self
            .repository
            .create_booking(
                &mut tx,
                booking_uuid,
                user,
                &NewBooking {
                    service_uuid: entry.service_uuid,
                    event_date: entry.event_date,
                    event_time: entry.event_time,
                    event_location: entry.event_location.clone(),
                },
            )
            .await?;

        let removed = self
            .cart_repository
            .delete_cart_entry(&mut tx, user, entry.uuid)
            .await?;

        if removed == 0 {
            // The entry vanished under us; dropping the transaction also
            // unwinds the booking insert.
            return Err(BookingsServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(Booking {
            uuid: booking_uuid,
            user_uuid: user,
            service_uuid: entry.service_uuid,
            service_name: entry.service_name,
            event_date: entry.event_date,
            event_time: entry.event_time,
            event_location: entry.event_location,
            status: BookingStatus::Pending,
            booked_at,
            updated_at,
        })
    }

    async fn list_bookings(
        &self,
        user: UserUuid,
        status: Option<BookingStatus>,
    ) -> Result<Vec<Booking>, BookingsServiceError> {
        let mut tx = self.db.begin().await?;

        let bookings = self.repository.list_bookings(&mut tx, user, status).await?;

        tx.commit().await?;

        Ok(bookings)
    }

    async fn get_booking(
        &self,
        user: UserUuid,
        booking: BookingUuid,
    ) -> Result<Booking, BookingsServiceError> {
        let mut tx = self.db.begin().await?;

        let booking = self
            .repository
            .get_booking_for_user(&mut tx, user, booking)
            .await?;

        tx.commit().await?;

        Ok(booking)
    }

    async fn update_booking(
        &self,
        user: UserUuid,
        booking: BookingUuid,
        update: BookingUpdate,
    ) -> Result<Booking, BookingsServiceError> {
        if update.event_location.trim().is_empty() {
            return Err(BookingsServiceError::MissingRequiredData);
        }

        let mut tx = self.db.begin().await?;

        let current = self
            .repository
            .get_booking_for_user(&mut tx, user, booking)
            .await?;

        if current.status == BookingStatus::Completed {
            return Err(BookingsServiceError::InvalidState);
        }

        let service = self
            .catalog_repository
            .get_service(&mut tx, update.service_uuid)
            .await
            .map_err(reference_error)?;

        let conflicts = self
            .repository
            .count_conflicting(
                &mut tx,
                update.service_uuid,
                update.event_date,
                update.event_time,
                Some(current.uuid),
            )
            .await?;

        if conflicts > 0 {
            return Err(BookingsServiceError::Conflict);
        }

        let updated_at = self
            .repository
            .update_booking(&mut tx, current.uuid, &update)
            .await?;

        tx.commit().await?;

        Ok(Booking {
            uuid: current.uuid,
            user_uuid: user,
            service_uuid: service.uuid,
            service_name: service.name,
            event_date: update.event_date,
            event_time: update.event_time,
            event_location: update.event_location,
            status: current.status,
            booked_at: current.booked_at,
            updated_at,
        })
    }

    async fn cancel_booking(
        &self,
        user: UserUuid,
        booking: BookingUuid,
    ) -> Result<Booking, BookingsServiceError> {
        let mut tx = self.db.begin().await?;

        let mut current = self
            .repository
            .get_booking_for_user(&mut tx, user, booking)
            .await?;

        if current.status != BookingStatus::Pending {
            return Err(BookingsServiceError::InvalidState);
        }

        let updated_at = self
            .repository
            .set_booking_status(&mut tx, current.uuid, BookingStatus::Cancelled)
            .await?;

        tx.commit().await?;

        current.status = BookingStatus::Cancelled;
        current.updated_at = updated_at;

        Ok(current)
    }

    async fn reinstate_booking(
        &self,
        user: UserUuid,
        booking: BookingUuid,
    ) -> Result<Booking, BookingsServiceError> {
        let mut tx = self.db.begin().await?;

        let mut current = self
            .repository
            .get_booking_for_user(&mut tx, user, booking)
            .await?;

        if current.status != BookingStatus::Cancelled {
            return Err(BookingsServiceError::InvalidState);
        }

        // The slot was released on cancellation; someone may hold it now.
        let conflicts = self
            .repository
            .count_conflicting(
                &mut tx,
                current.service_uuid,
                current.event_date,
                current.event_time,
                Some(current.uuid),
            )
            .await?;

        if conflicts > 0 {
            return Err(BookingsServiceError::Conflict);
        }

        let updated_at = self
            .repository
            .set_booking_status(&mut tx, current.uuid, BookingStatus::Pending)
            .await?;

        tx.commit().await?;

        current.status = BookingStatus::Pending;
        current.updated_at = updated_at;

        Ok(current)
    }

    async fn delete_booking(
        &self,
        identity: Identity,
        booking: BookingUuid,
    ) -> Result<(), BookingsServiceError> {
        let mut tx = self.db.begin().await?;

        let current = self.repository.get_booking(&mut tx, booking).await?;

        if !identity.staff {
            if current.user_uuid != identity.user {
                return Err(BookingsServiceError::Forbidden);
            }

            if current.status != BookingStatus::Pending {
                return Err(BookingsServiceError::Forbidden);
            }
        }

        let removed = self.repository.delete_booking(&mut tx, current.uuid).await?;

        if removed == 0 {
            return Err(BookingsServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }
}

fn reference_error(error: sqlx::Error) -> BookingsServiceError {
    if matches!(error, sqlx::Error::RowNotFound) {
        return BookingsServiceError::InvalidReference;
    }

    error.into()
}

#[automock]
#[async_trait]
pub trait BookingsService: Send + Sync {
    /// Whether a (service, date, time) slot is free of a conflicting,
    /// non-cancelled booking. `exclude` lets an edited booking keep its own
    /// slot.
    async fn is_available(
        &self,
        service: ServiceUuid,
        event_date: Date,
        event_time: Time,
        exclude: Option<BookingUuid>,
    ) -> Result<bool, BookingsServiceError>;

    /// Create a pending booking directly.
    async fn create_booking(
        &self,
        user: UserUuid,
        booking: NewBooking,
    ) -> Result<Booking, BookingsServiceError>;

    /// Promote a cart entry into a pending booking, removing the entry in
    /// the same transaction.
    async fn promote_cart_entry(
        &self,
        user: UserUuid,
        entry: CartEntryUuid,
    ) -> Result<Booking, BookingsServiceError>;

    /// The user's bookings, optionally filtered to one status, by event
    /// date descending.
    async fn list_bookings(
        &self,
        user: UserUuid,
        status: Option<BookingStatus>,
    ) -> Result<Vec<Booking>, BookingsServiceError>;

    /// Retrieve a single booking owned by the user.
    async fn get_booking(
        &self,
        user: UserUuid,
        booking: BookingUuid,
    ) -> Result<Booking, BookingsServiceError>;

    /// Overwrite a booking's event details; status is left unchanged and
    /// `completed` bookings are never editable.
    async fn update_booking(
        &self,
        user: UserUuid,
        booking: BookingUuid,
        update: BookingUpdate,
    ) -> Result<Booking, BookingsServiceError>;

    /// pending → cancelled.
    async fn cancel_booking(
        &self,
        user: UserUuid,
        booking: BookingUuid,
    ) -> Result<Booking, BookingsServiceError>;

    /// cancelled → pending, re-checking availability for the slot.
    async fn reinstate_booking(
        &self,
        user: UserUuid,
        booking: BookingUuid,
    ) -> Result<Booking, BookingsServiceError>;

    /// Remove a booking. Owners may remove their own pending bookings;
    /// staff may remove any booking regardless of status.
    async fn delete_booking(
        &self,
        identity: Identity,
        booking: BookingUuid,
    ) -> Result<(), BookingsServiceError>;
}
