//! Categorised booking retrieval.
//!
//! Implements the [`BookingQuery`] driving port: the abstract
//! [`BookingState`](crate::domain::BookingState) filter plus a perspective
//! (as booker, or as owner of items) becomes a concrete, ordered, paginated
//! store query. "Now" is captured exactly once per call so every predicate in
//! a listing agrees on the current instant.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;

use crate::domain::booking_service::{
    map_booking_store_error, map_item_store_error, map_user_store_error,
};
use crate::domain::ports::{
    BookingPayload, BookingQuery, BookingStore, ItemStore, ListBookingsRequest, UserStore,
};
use crate::domain::{Error, ItemId, UserId};

/// Booking query service implementing the query driving port.
#[derive(Clone)]
pub struct BookingQueryService<B, I, U> {
    booking_store: Arc<B>,
    item_store: Arc<I>,
    user_store: Arc<U>,
    clock: Arc<dyn Clock>,
}

impl<B, I, U> BookingQueryService<B, I, U> {
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

impl<B, I, U> BookingQueryService<B, I, U>
where
    B: BookingStore,
    I: ItemStore,
    U: UserStore,
{
    async fn ensure_user_exists(&self, user_id: UserId) -> Result<(), Error> {
        self.user_store
            .find_by_id(user_id)
            .await
            .map_err(map_user_store_error)?
            .ok_or_else(|| Error::not_found(format!("user {user_id} not found")))?;
        Ok(())
    }
}

#[async_trait]
impl<B, I, U> BookingQuery for BookingQueryService<B, I, U>
where
    B: BookingStore,
    I: ItemStore,
    U: UserStore,
{
    async fn list_for_booker(
        &self,
        request: ListBookingsRequest,
    ) -> Result<Vec<BookingPayload>, Error> {
        self.ensure_user_exists(request.user_id).await?;

        let selection = request.state.selection(self.clock.utc());
        let bookings = self
            .booking_store
            .list_for_booker(request.user_id, selection, request.page)
            .await
            .map_err(map_booking_store_error)?;

        Ok(bookings.into_iter().map(BookingPayload::from).collect())
    }

    async fn list_for_owner(
        &self,
        request: ListBookingsRequest,
    ) -> Result<Vec<BookingPayload>, Error> {
        self.ensure_user_exists(request.user_id).await?;

        let items: Vec<ItemId> = self
            .item_store
            .find_owned_by(request.user_id)
            .await
            .map_err(map_item_store_error)?
            .into_iter()
            .map(|item| item.id)
            .collect();

        let selection = request.state.selection(self.clock.utc());
        let bookings = self
            .booking_store
            .list_for_items(&items, selection, request.page)
            .await
            .map_err(map_booking_store_error)?;

        Ok(bookings.into_iter().map(BookingPayload::from).collect())
    }
}

#[cfg(test)]
#[path = "booking_queries_tests.rs"]
mod tests;
