//! Booking data model and temporal query filters.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{Error, ItemId, UserId};

/// Stable numeric booking identifier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema,
)]
#[serde(transparent)]
pub struct BookingId(pub i64);

impl fmt::Display for BookingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Persisted booking status.
///
/// A booking is created `Waiting` and moves to `Approved` or `Rejected`
/// through the approve operation. A decided booking never returns to
/// `Waiting`; repeating the decision already in place is an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    Waiting,
    Approved,
    Rejected,
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Waiting => "WAITING",
            Self::Approved => "APPROVED",
            Self::Rejected => "REJECTED",
        };
        f.write_str(label)
    }
}

/// A time-bounded reservation of one item by one user.
///
/// ## Invariants
/// - `start < end` strictly (enforced at creation, never mutated).
/// - `item_id` and `booker_id` are immutable after creation.
/// - `version` increases by one with every status write; status writes are
///   compare-and-swap on `(id, version)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    /// Stable identifier assigned by the store.
    pub id: BookingId,
    /// The reserved item.
    pub item_id: ItemId,
    /// The requesting user.
    pub booker_id: UserId,
    /// Start of the reservation window.
    pub start: DateTime<Utc>,
    /// End of the reservation window.
    pub end: DateTime<Utc>,
    /// Current lifecycle status.
    pub status: BookingStatus,
    /// Optimistic concurrency column.
    pub version: u64,
}

/// Temporal/status query filter over bookings.
///
/// Derived at query time from `start`, `end` and `status` relative to a
/// captured "now"; never stored on the entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingState {
    All,
    Current,
    Past,
    Future,
    Waiting,
    Rejected,
}

impl BookingState {
    /// Resolve the filter into a concrete predicate for a fixed `now`.
    ///
    /// The exhaustive match guarantees every state maps to a selection; new
    /// states cannot be silently unhandled.
    pub fn selection(self, now: DateTime<Utc>) -> BookingSelection {
        match self {
            Self::All => BookingSelection::All,
            Self::Current => BookingSelection::Current { now },
            Self::Past => BookingSelection::EndedBefore { now },
            Self::Future => BookingSelection::StartsAfter { now },
            Self::Waiting => BookingSelection::WithStatus(BookingStatus::Waiting),
            Self::Rejected => BookingSelection::WithStatus(BookingStatus::Rejected),
        }
    }
}

impl fmt::Display for BookingState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::All => "ALL",
            Self::Current => "CURRENT",
            Self::Past => "PAST",
            Self::Future => "FUTURE",
            Self::Waiting => "WAITING",
            Self::Rejected => "REJECTED",
        };
        f.write_str(label)
    }
}

impl FromStr for BookingState {
    type Err = Error;

    /// Total, case-sensitive parse accepting the exact enum names.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "ALL" => Ok(Self::All),
            "CURRENT" => Ok(Self::Current),
            "PAST" => Ok(Self::Past),
            "FUTURE" => Ok(Self::Future),
            "WAITING" => Ok(Self::Waiting),
            "REJECTED" => Ok(Self::Rejected),
            other => Err(Error::invalid_request(format!(
                "unknown booking state: {other}"
            ))),
        }
    }
}

/// Concrete booking predicate with "now" already captured.
///
/// Stores evaluate this without consulting a clock, so one `now` applies to
/// the whole query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingSelection {
    /// No filter.
    All,
    /// `start < now && end > now`.
    Current { now: DateTime<Utc> },
    /// `end < now`.
    EndedBefore { now: DateTime<Utc> },
    /// `start > now`.
    StartsAfter { now: DateTime<Utc> },
    /// `status == _0`.
    WithStatus(BookingStatus),
}

impl BookingSelection {
    /// Whether `booking` belongs to this selection.
    pub fn matches(&self, booking: &Booking) -> bool {
        match self {
            Self::All => true,
            Self::Current { now } => booking.start < *now && booking.end > *now,
            Self::EndedBefore { now } => booking.end < *now,
            Self::StartsAfter { now } => booking.start > *now,
            Self::WithStatus(status) => booking.status == *status,
        }
    }
}
