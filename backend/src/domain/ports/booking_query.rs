//! Driving port for categorised booking retrieval.

use async_trait::async_trait;
use pagination::PageRequest;

use crate::domain::{BookingState, Error, UserId};

use super::BookingPayload;

/// Request payload for a categorised booking listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListBookingsRequest {
    /// The caller whose perspective the listing takes.
    pub user_id: UserId,
    /// Temporal/status filter, already parsed from the wire literal.
    pub state: BookingState,
    /// Validated page window.
    pub page: PageRequest,
}

/// Use-cases serving ordered, paginated booking listings.
///
/// Both listings order by `start` descending and evaluate the state filter
/// against a single "now" captured per call.
#[async_trait]
pub trait BookingQuery: Send + Sync {
    /// Bookings the user requested themselves.
    async fn list_for_booker(
        &self,
        request: ListBookingsRequest,
    ) -> Result<Vec<BookingPayload>, Error>;

    /// Bookings placed on items the user owns.
    async fn list_for_owner(
        &self,
        request: ListBookingsRequest,
    ) -> Result<Vec<BookingPayload>, Error>;
}
