//! Driving port for the booking lifecycle.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::{Booking, BookingId, BookingStatus, Error, ItemId, UserId};

/// Request payload for creating a booking.
///
/// `start`/`end` are optional here because absent timestamps are a domain
/// validation failure, not a deserialisation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBookingRequest {
    pub booker_id: UserId,
    pub item_id: ItemId,
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
}

/// Request payload for deciding a waiting booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApproveBookingRequest {
    pub actor_id: UserId,
    pub booking_id: BookingId,
    pub approved: bool,
}

/// Request payload for reading a single booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetBookingRequest {
    pub actor_id: UserId,
    pub booking_id: BookingId,
}

/// Booking view returned by the lifecycle and query ports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingPayload {
    pub id: BookingId,
    pub item_id: ItemId,
    pub booker_id: UserId,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub status: BookingStatus,
}

impl From<Booking> for BookingPayload {
    fn from(booking: Booking) -> Self {
        Self {
            id: booking.id,
            item_id: booking.item_id,
            booker_id: booking.booker_id,
            start: booking.start,
            end: booking.end,
            status: booking.status,
        }
    }
}

/// Use-cases that mutate or read individual bookings.
#[async_trait]
pub trait BookingCommand: Send + Sync {
    /// Validate and persist a new booking in `Waiting` status.
    async fn create(&self, request: NewBookingRequest) -> Result<BookingPayload, Error>;

    /// Approve or reject a waiting booking; owner only, applied exactly once.
    async fn approve(&self, request: ApproveBookingRequest) -> Result<BookingPayload, Error>;

    /// Read one booking; booker and item owner only.
    async fn get_by_id(&self, request: GetBookingRequest) -> Result<BookingPayload, Error>;
}
