//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] collects every HTTP endpoint and the schemas their bodies
//! reference. The generated document is served by tooling and asserted over
//! in tests so the published contract cannot drift silently.

use utoipa::OpenApi;

use crate::domain::{BookingStatus, Error, ErrorCode};
use crate::inbound::http::bookings::{BookingBody, CreateBookingBody};
use crate::inbound::http::items::{BookingRefBody, CreateItemBody, ItemBody, UpdateItemBody};
use crate::inbound::http::users::{CreateUserBody, UserBody};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Item sharing backend API",
        description = "Item listings, user registration and the booking lifecycle."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::bookings::create_booking,
        crate::inbound::http::bookings::approve_booking,
        crate::inbound::http::bookings::get_booking,
        crate::inbound::http::bookings::list_bookings,
        crate::inbound::http::bookings::list_owner_bookings,
        crate::inbound::http::items::create_item,
        crate::inbound::http::items::update_item,
        crate::inbound::http::items::list_items,
        crate::inbound::http::items::get_item,
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::get_user,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        CreateBookingBody,
        BookingBody,
        CreateItemBody,
        UpdateItemBody,
        ItemBody,
        BookingRefBody,
        CreateUserBody,
        UserBody,
        BookingStatus,
        Error,
        ErrorCode,
    )),
    tags(
        (name = "bookings", description = "Booking lifecycle and queries"),
        (name = "items", description = "Item catalog"),
        (name = "users", description = "User directory"),
        (name = "health", description = "Orchestration probes")
    )
)]
pub struct ApiDoc;
