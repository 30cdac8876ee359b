//! Shared HTTP adapter state.
//!
//! Handlers receive this bundle via `actix_web::web::Data` and depend only on
//! the domain driving ports, so they stay testable with mocked services.

use std::sync::Arc;

use crate::domain::ports::{BookingCommand, BookingQuery, ItemCatalog, UserDirectory};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub bookings: Arc<dyn BookingCommand>,
    pub booking_queries: Arc<dyn BookingQuery>,
    pub items: Arc<dyn ItemCatalog>,
    pub users: Arc<dyn UserDirectory>,
}
