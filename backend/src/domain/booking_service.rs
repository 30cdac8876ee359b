//! Booking lifecycle domain service.
//!
//! Implements the [`BookingCommand`] driving port: creation with the full
//! validation rule set, owner-gated approval with optimistic concurrency, and
//! authorised single-booking reads.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::info;

use crate::domain::booking_validation::validate_new_booking;
use crate::domain::ports::{
    ApproveBookingRequest, BookingCommand, BookingPayload, BookingStore, BookingStoreError,
    GetBookingRequest, ItemStore, ItemStoreError, NewBooking, NewBookingRequest, UserStore,
    UserStoreError,
};
use crate::domain::{Booking, BookingId, BookingStatus, Error, Item};

pub(crate) fn map_booking_store_error(error: BookingStoreError) -> Error {
    match error {
        BookingStoreError::Connection { message } => {
            Error::service_unavailable(format!("booking store unavailable: {message}"))
        }
        BookingStoreError::Query { message } => {
            Error::internal(format!("booking store error: {message}"))
        }
        BookingStoreError::Missing { booking_id } => {
            Error::not_found(format!("booking {booking_id} not found"))
        }
        BookingStoreError::StaleVersion { booking_id, .. } => Error::conflict(format!(
            "booking {booking_id} was decided concurrently; reload and retry"
        )),
    }
}

pub(crate) fn map_item_store_error(error: ItemStoreError) -> Error {
    match error {
        ItemStoreError::Connection { message } => {
            Error::service_unavailable(format!("item store unavailable: {message}"))
        }
        ItemStoreError::Query { message } => Error::internal(format!("item store error: {message}")),
        ItemStoreError::Missing { id } => Error::not_found(format!("item {id} not found")),
    }
}

pub(crate) fn map_user_store_error(error: UserStoreError) -> Error {
    match error {
        UserStoreError::Connection { message } => {
            Error::service_unavailable(format!("user store unavailable: {message}"))
        }
        UserStoreError::Query { message } => Error::internal(format!("user store error: {message}")),
        UserStoreError::DuplicateEmail { email } => {
            Error::conflict(format!("email is already registered: {email}"))
        }
    }
}

/// Booking lifecycle service implementing the command driving port.
#[derive(Clone)]
pub struct BookingCommandService<B, I, U> {
    booking_store: Arc<B>,
    item_store: Arc<I>,
    user_store: Arc<U>,
    clock: Arc<dyn Clock>,
}

impl<B, I, U> BookingCommandService<B, I, U> {
    /// Create a new service over the given stores and clock.
    pub fn new(
        booking_store: Arc<B>,
        item_store: Arc<I>,
        user_store: Arc<U>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            booking_store,
            item_store,
            user_store,
            clock,
        }
    }
}

impl<B, I, U> BookingCommandService<B, I, U>
where
    B: BookingStore,
    I: ItemStore,
    U: UserStore,
{
    async fn load_booking(&self, id: BookingId) -> Result<Booking, Error> {
        self.booking_store
            .find_by_id(id)
            .await
            .map_err(map_booking_store_error)?
            .ok_or_else(|| Error::not_found(format!("booking {id} not found")))
    }

    async fn load_item_for(&self, booking: &Booking) -> Result<Item, Error> {
        self.item_store
            .find_by_id(booking.item_id)
            .await
            .map_err(map_item_store_error)?
            .ok_or_else(|| {
                Error::internal(format!(
                    "booking {} references missing item {}",
                    booking.id, booking.item_id
                ))
            })
    }
}

#[async_trait]
impl<B, I, U> BookingCommand for BookingCommandService<B, I, U>
where
    B: BookingStore,
    I: ItemStore,
    U: UserStore,
{
    async fn create(&self, request: NewBookingRequest) -> Result<BookingPayload, Error> {
        let item = self
            .item_store
            .find_by_id(request.item_id)
            .await
            .map_err(map_item_store_error)?
            .ok_or_else(|| Error::not_found(format!("item {} not found", request.item_id)))?;

        let now = self.clock.utc();
        validate_new_booking(&request, &item, now)?;

        self.user_store
            .find_by_id(request.booker_id)
            .await
            .map_err(map_user_store_error)?
            .ok_or_else(|| Error::not_found(format!("user {} not found", request.booker_id)))?;

        // The validator has proven both dates present.
        let (Some(start), Some(end)) = (request.start, request.end) else {
            return Err(Error::internal("validated booking range is missing dates"));
        };

        let booking = self
            .booking_store
            .create(NewBooking {
                item_id: item.id,
                booker_id: request.booker_id,
                start,
                end,
            })
            .await
            .map_err(map_booking_store_error)?;

        info!(booking_id = %booking.id, item_id = %item.id, booker_id = %booking.booker_id,
            "booking created");
        Ok(booking.into())
    }

    async fn approve(&self, request: ApproveBookingRequest) -> Result<BookingPayload, Error> {
        let booking = self.load_booking(request.booking_id).await?;
        let item = self.load_item_for(&booking).await?;

        if !item.is_owned_by(request.actor_id) {
            return Err(Error::forbidden(
                "only the item owner may approve or reject a booking",
            ));
        }

        let target = if request.approved {
            BookingStatus::Approved
        } else {
            BookingStatus::Rejected
        };
        if booking.status == target {
            let message = match target {
                BookingStatus::Approved => "the booking is already approved",
                _ => "the booking is already rejected",
            };
            return Err(Error::already_done(message));
        }

        let updated = self
            .booking_store
            .update_status(booking.id, booking.version, target)
            .await
            .map_err(map_booking_store_error)?;

        info!(booking_id = %updated.id, status = %updated.status, "booking decided");
        Ok(updated.into())
    }

    async fn get_by_id(&self, request: GetBookingRequest) -> Result<BookingPayload, Error> {
        let booking = self.load_booking(request.booking_id).await?;

        if booking.booker_id != request.actor_id {
            let item = self.load_item_for(&booking).await?;
            if !item.is_owned_by(request.actor_id) {
                return Err(Error::forbidden(
                    "only the booker or the item owner may view a booking",
                ));
            }
        }

        Ok(booking.into())
    }
}

#[cfg(test)]
#[path = "booking_service_tests.rs"]
mod tests;
