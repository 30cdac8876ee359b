//! Domain entities, ports, and services for the item-sharing booking core.
//!
//! The domain is transport agnostic: inbound adapters translate its
//! [`Error`] values into HTTP responses, and outbound adapters implement the
//! driven ports in [`ports`].

pub mod booking;
pub mod booking_queries;
pub mod booking_service;
pub mod booking_validation;
pub mod catalog_service;
pub mod error;
pub mod item;
pub mod ports;
pub mod user;

pub use self::booking::{Booking, BookingId, BookingSelection, BookingState, BookingStatus};
pub use self::booking_queries::BookingQueryService;
pub use self::booking_service::BookingCommandService;
pub use self::catalog_service::{ItemCatalogService, UserDirectoryService};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::item::{Item, ItemId, ItemValidationError};
pub use self::user::{User, UserId, UserValidationError};

/// Response header carrying the request correlation identifier.
pub const TRACE_ID_HEADER: &str = "Trace-Id";
