//! Port for booking persistence and temporal queries.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use pagination::PageRequest;
use thiserror::Error;

use crate::domain::{Booking, BookingId, BookingSelection, BookingStatus, ItemId, UserId};

/// Errors raised by booking store adapters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingStoreError {
    /// Store connection could not be established.
    #[error("booking store connection failed: {message}")]
    Connection { message: String },
    /// Query or mutation failed during execution.
    #[error("booking store query failed: {message}")]
    Query { message: String },
    /// The booking targeted by a status write does not exist.
    #[error("booking {booking_id} not found")]
    Missing { booking_id: BookingId },
    /// The compare-and-swap status write lost against a concurrent writer.
    #[error("booking {booking_id} version {expected} is stale")]
    StaleVersion {
        booking_id: BookingId,
        expected: u64,
    },
}

impl BookingStoreError {
    /// Helper for connection oriented failures.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Helper for query failures.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Fields for a booking the store has not assigned an id to yet.
///
/// The range is validated before this type is constructed; stores persist it
/// as-is with status [`BookingStatus::Waiting`] and version 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBooking {
    pub item_id: ItemId,
    pub booker_id: UserId,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// Port for writing bookings and serving the temporal query forms.
///
/// List results are always ordered by `start` descending; the page window is
/// applied after ordering.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookingStore: Send + Sync {
    /// Persist a new booking in `Waiting` status and return it with its id.
    async fn create(&self, booking: NewBooking) -> Result<Booking, BookingStoreError>;

    /// Fetch a booking by identifier.
    async fn find_by_id(&self, id: BookingId) -> Result<Option<Booking>, BookingStoreError>;

    /// Compare-and-swap status write.
    ///
    /// Succeeds only when the stored version equals `expected_version`; the
    /// returned booking carries the new status and the incremented version.
    /// A lost race fails with [`BookingStoreError::StaleVersion`] and writes
    /// nothing.
    async fn update_status(
        &self,
        id: BookingId,
        expected_version: u64,
        status: BookingStatus,
    ) -> Result<Booking, BookingStoreError>;

    /// Bookings requested by `booker` matching `selection`.
    async fn list_for_booker(
        &self,
        booker: UserId,
        selection: BookingSelection,
        page: PageRequest,
    ) -> Result<Vec<Booking>, BookingStoreError>;

    /// Bookings placed on any of `items` matching `selection`.
    async fn list_for_items(
        &self,
        items: &[ItemId],
        selection: BookingSelection,
        page: PageRequest,
    ) -> Result<Vec<Booking>, BookingStoreError>;

    /// The approved booking on `item` with the greatest `start < now`.
    async fn last_for_item(
        &self,
        item: ItemId,
        now: DateTime<Utc>,
    ) -> Result<Option<Booking>, BookingStoreError>;

    /// The approved booking on `item` with the smallest `start > now`.
    async fn next_for_item(
        &self,
        item: ItemId,
        now: DateTime<Utc>,
    ) -> Result<Option<Booking>, BookingStoreError>;
}
