//! Booking HTTP handlers.
//!
//! ```text
//! POST  /bookings                      Place a booking request
//! PATCH /bookings/{id}?approved=bool   Owner decision on a booking
//! GET   /bookings/{id}                 Fetch one booking
//! GET   /bookings?state=&from=&size=   Caller's bookings as booker
//! GET   /bookings/owner?state=&from=&size=  Bookings on the caller's items
//! ```
//!
//! All routes require the `X-Sharer-User-Id` header. Authorisation failures
//! on booking reads and decisions surface as not-found so a caller cannot
//! probe for the existence of other users' bookings.

use actix_web::{get, patch, post, web};
use chrono::{DateTime, Utc};
use pagination::{DEFAULT_FROM, DEFAULT_SIZE, PageRequest};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::ports::{
    ApproveBookingRequest, BookingPayload, GetBookingRequest, ListBookingsRequest,
    NewBookingRequest,
};
use crate::domain::{BookingId, BookingState, BookingStatus, Error, ErrorCode, ItemId, UserId};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::{ApiResult, SharerId};

/// Request payload for placing a booking.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingBody {
    pub item_id: i64,
    /// RFC 3339 timestamp; absence is reported after item availability.
    #[schema(format = "date-time")]
    pub start: Option<String>,
    #[schema(format = "date-time")]
    pub end: Option<String>,
}

/// Booking representation returned by every booking endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingBody {
    pub id: i64,
    pub item_id: i64,
    pub booker_id: i64,
    #[schema(format = "date-time")]
    pub start: String,
    #[schema(format = "date-time")]
    pub end: String,
    pub status: BookingStatus,
}

impl From<BookingPayload> for BookingBody {
    fn from(payload: BookingPayload) -> Self {
        Self {
            id: payload.id.0,
            item_id: payload.item_id.0,
            booker_id: payload.booker_id.0,
            start: payload.start.to_rfc3339(),
            end: payload.end.to_rfc3339(),
            status: payload.status,
        }
    }
}

/// Decision flag for the approval endpoint.
#[derive(Debug, Clone, Copy, Deserialize, IntoParams)]
pub struct ApprovalQuery {
    pub approved: bool,
}

/// Listing parameters shared by the booker and owner views.
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct ListBookingsQuery {
    /// Booking state filter; defaults to `ALL`.
    pub state: Option<String>,
    /// Element offset; defaults to 0.
    pub from: Option<i64>,
    /// Page length; defaults to 10.
    pub size: Option<i64>,
}

fn parse_timestamp(value: Option<&str>, field: &str) -> Result<Option<DateTime<Utc>>, Error> {
    let Some(raw) = value else {
        return Ok(None);
    };
    DateTime::parse_from_rfc3339(raw)
        .map(|parsed| Some(parsed.with_timezone(&Utc)))
        .map_err(|_| Error::invalid_request(format!("{field} must be an RFC 3339 timestamp")))
}

fn parse_listing(user_id: UserId, query: &ListBookingsQuery) -> Result<ListBookingsRequest, Error> {
    let state: BookingState = query.state.as_deref().unwrap_or("ALL").parse()?;
    let page = PageRequest::new(
        query.from.unwrap_or(DEFAULT_FROM),
        query.size.unwrap_or(DEFAULT_SIZE),
    )
    .map_err(|err| Error::invalid_request(err.to_string()))?;
    Ok(ListBookingsRequest {
        user_id,
        state,
        page,
    })
}

/// Replace authorisation failures with not-found.
fn mask_forbidden(error: Error) -> Error {
    match error.code() {
        ErrorCode::Forbidden => error.with_code(ErrorCode::NotFound),
        _ => error,
    }
}

/// Place a booking request on an item.
#[utoipa::path(
    post,
    path = "/bookings",
    request_body = CreateBookingBody,
    params(("X-Sharer-User-Id" = i64, Header, description = "Caller identity")),
    responses(
        (status = 200, description = "Booking placed", body = BookingBody),
        (status = 400, description = "Invalid booking request", body = Error),
        (status = 404, description = "Item or booker not found", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["bookings"],
    operation_id = "createBooking"
)]
#[post("/bookings")]
pub async fn create_booking(
    state: web::Data<HttpState>,
    sharer: SharerId,
    payload: web::Json<CreateBookingBody>,
) -> ApiResult<web::Json<BookingBody>> {
    let body = payload.into_inner();
    let request = NewBookingRequest {
        booker_id: sharer.user_id(),
        item_id: ItemId(body.item_id),
        start: parse_timestamp(body.start.as_deref(), "start")?,
        end: parse_timestamp(body.end.as_deref(), "end")?,
    };
    let booking = state.bookings.create(request).await?;
    Ok(web::Json(booking.into()))
}

/// Approve or reject a waiting booking.
#[utoipa::path(
    patch,
    path = "/bookings/{booking_id}",
    params(
        ("booking_id" = i64, Path, description = "Booking identifier"),
        ApprovalQuery,
        ("X-Sharer-User-Id" = i64, Header, description = "Caller identity")
    ),
    responses(
        (status = 200, description = "Decision recorded", body = BookingBody),
        (status = 400, description = "Booking already decided", body = Error),
        (status = 404, description = "Booking not found or caller is not the owner", body = Error),
        (status = 409, description = "Booking was decided concurrently", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["bookings"],
    operation_id = "approveBooking"
)]
#[patch("/bookings/{booking_id}")]
pub async fn approve_booking(
    state: web::Data<HttpState>,
    sharer: SharerId,
    path: web::Path<i64>,
    query: web::Query<ApprovalQuery>,
) -> ApiResult<web::Json<BookingBody>> {
    let booking = state
        .bookings
        .approve(ApproveBookingRequest {
            actor_id: sharer.user_id(),
            booking_id: BookingId(path.into_inner()),
            approved: query.approved,
        })
        .await
        .map_err(mask_forbidden)?;
    Ok(web::Json(booking.into()))
}

/// Fetch a booking visible to the caller.
#[utoipa::path(
    get,
    path = "/bookings/{booking_id}",
    params(
        ("booking_id" = i64, Path, description = "Booking identifier"),
        ("X-Sharer-User-Id" = i64, Header, description = "Caller identity")
    ),
    responses(
        (status = 200, description = "Booking", body = BookingBody),
        (status = 404, description = "Booking not found or not visible", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["bookings"],
    operation_id = "getBooking"
)]
#[get("/bookings/{booking_id}")]
pub async fn get_booking(
    state: web::Data<HttpState>,
    sharer: SharerId,
    path: web::Path<i64>,
) -> ApiResult<web::Json<BookingBody>> {
    let booking = state
        .bookings
        .get_by_id(GetBookingRequest {
            actor_id: sharer.user_id(),
            booking_id: BookingId(path.into_inner()),
        })
        .await
        .map_err(mask_forbidden)?;
    Ok(web::Json(booking.into()))
}

/// List the caller's bookings as booker, newest start first.
#[utoipa::path(
    get,
    path = "/bookings",
    params(
        ListBookingsQuery,
        ("X-Sharer-User-Id" = i64, Header, description = "Caller identity")
    ),
    responses(
        (status = 200, description = "Bookings", body = [BookingBody]),
        (status = 400, description = "Unknown state or invalid page", body = Error),
        (status = 404, description = "Caller not found", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["bookings"],
    operation_id = "listBookings"
)]
#[get("/bookings")]
pub async fn list_bookings(
    state: web::Data<HttpState>,
    sharer: SharerId,
    query: web::Query<ListBookingsQuery>,
) -> ApiResult<web::Json<Vec<BookingBody>>> {
    let request = parse_listing(sharer.user_id(), &query)?;
    let bookings = state.booking_queries.list_for_booker(request).await?;
    Ok(web::Json(bookings.into_iter().map(Into::into).collect()))
}

/// List bookings placed on the caller's items, newest start first.
#[utoipa::path(
    get,
    path = "/bookings/owner",
    params(
        ListBookingsQuery,
        ("X-Sharer-User-Id" = i64, Header, description = "Caller identity")
    ),
    responses(
        (status = 200, description = "Bookings", body = [BookingBody]),
        (status = 400, description = "Unknown state or invalid page", body = Error),
        (status = 404, description = "Caller not found", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["bookings"],
    operation_id = "listOwnerBookings"
)]
#[get("/bookings/owner")]
pub async fn list_owner_bookings(
    state: web::Data<HttpState>,
    sharer: SharerId,
    query: web::Query<ListBookingsQuery>,
) -> ApiResult<web::Json<Vec<BookingBody>>> {
    let request = parse_listing(sharer.user_id(), &query)?;
    let bookings = state.booking_queries.list_for_owner(request).await?;
    Ok(web::Json(bookings.into_iter().map(Into::into).collect()))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn timestamps_parse_from_rfc3339() {
        let parsed = parse_timestamp(Some("2030-05-01T10:00:00Z"), "start")
            .expect("valid timestamp")
            .expect("present");
        assert_eq!(parsed.to_rfc3339(), "2030-05-01T10:00:00+00:00");
    }

    #[test]
    fn absent_timestamps_stay_absent() {
        let parsed = parse_timestamp(None, "start").expect("absence is not an error");
        assert!(parsed.is_none());
    }

    #[rstest]
    #[case("yesterday")]
    #[case("2030-05-01")]
    #[case("")]
    fn malformed_timestamps_are_rejected(#[case] raw: &str) {
        let error = parse_timestamp(Some(raw), "end").expect_err("malformed timestamp");
        assert_eq!(error.code(), ErrorCode::InvalidRequest);
    }

    #[test]
    fn listing_defaults_to_all_and_the_first_page() {
        let query = ListBookingsQuery {
            state: None,
            from: None,
            size: None,
        };

        let request = parse_listing(UserId(1), &query).expect("defaults apply");

        assert_eq!(request.state, BookingState::All);
        assert_eq!(request.page, PageRequest::first());
    }

    #[rstest]
    #[case(Some(-1), Some(10))]
    #[case(Some(0), Some(0))]
    fn invalid_page_parameters_are_rejected(#[case] from: Option<i64>, #[case] size: Option<i64>) {
        let query = ListBookingsQuery {
            state: None,
            from,
            size,
        };

        let error = parse_listing(UserId(1), &query).expect_err("invalid page");
        assert_eq!(error.code(), ErrorCode::InvalidRequest);
    }

    #[test]
    fn unknown_states_are_rejected() {
        let query = ListBookingsQuery {
            state: Some("SOON".to_owned()),
            from: None,
            size: None,
        };

        let error = parse_listing(UserId(1), &query).expect_err("unknown state");
        assert_eq!(error.code(), ErrorCode::InvalidRequest);
    }

    #[test]
    fn only_forbidden_errors_are_masked() {
        let masked = mask_forbidden(Error::forbidden("not the owner"));
        assert_eq!(masked.code(), ErrorCode::NotFound);

        let untouched = mask_forbidden(Error::conflict("raced"));
        assert_eq!(untouched.code(), ErrorCode::Conflict);
    }
}
