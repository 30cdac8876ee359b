//! Pre-creation legality checks for booking requests.
//!
//! One canonical rule set, applied in a fixed order; the first violated rule
//! wins and nothing is persisted. Historical revisions of the original
//! service disagreed on the exact rules, so the full set is enforced here:
//! item available, both dates present, `start < end` strictly, `start` not in
//! the past, booker is not the owner.

use chrono::{DateTime, Utc};
use serde_json::json;

use super::ports::NewBookingRequest;
use super::{Error, Item};

/// Validate a booking request against `item` for a fixed `now`.
///
/// # Errors
/// Returns an [`Error`] with code `InvalidRequest` describing the first
/// violated rule.
pub fn validate_new_booking(
    request: &NewBookingRequest,
    item: &Item,
    now: DateTime<Utc>,
) -> Result<(), Error> {
    if !item.available {
        return Err(Error::invalid_request(format!(
            "item {} is not available for booking",
            item.id
        ))
        .with_details(json!({ "code": "item_unavailable" })));
    }

    let (start, end) = match (request.start, request.end) {
        (Some(start), Some(end)) => (start, end),
        _ => {
            return Err(
                Error::invalid_request("start and end dates must both be present")
                    .with_details(json!({ "code": "missing_dates" })),
            );
        }
    };
    if start >= end {
        return Err(
            Error::invalid_request("the booking start date must be before the end date")
                .with_details(json!({ "code": "inverted_range" })),
        );
    }
    if start < now {
        return Err(
            Error::invalid_request("the booking start date must not be in the past")
                .with_details(json!({ "code": "start_in_past" })),
        );
    }

    if item.is_owned_by(request.booker_id) {
        return Err(
            Error::invalid_request("the owner cannot book their own item")
                .with_details(json!({ "code": "self_booking" })),
        );
    }

    Ok(())
}
