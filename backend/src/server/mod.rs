//! Server construction and wiring.
//!
//! Assembles the in-memory stores, the domain services and the HTTP routes
//! into a runnable server. Integration tests reuse [`build_state`] and
//! [`configure`] against `actix_web::test` instead of binding a socket.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_web::{App, HttpServer, web};
use mockable::{Clock, DefaultClock};
use tracing::info;

use crate::domain::{
    BookingCommandService, BookingQueryService, ItemCatalogService, UserDirectoryService,
};
use crate::inbound::http::bookings::{
    approve_booking, create_booking, get_booking, list_bookings, list_owner_bookings,
};
use crate::inbound::http::health::{HealthState, live, ready};
use crate::inbound::http::items::{create_item, get_item, list_items, update_item};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::users::{create_user, get_user};
use crate::middleware::Trace;
use crate::outbound::persistence::{MemoryBookingStore, MemoryItemStore, MemoryUserStore};

/// Wire fresh in-memory stores into the HTTP dependency bundle.
#[must_use]
pub fn build_state() -> HttpState {
    let booking_store = Arc::new(MemoryBookingStore::new());
    let item_store = Arc::new(MemoryItemStore::new());
    let user_store = Arc::new(MemoryUserStore::new());
    let clock: Arc<dyn Clock> = Arc::new(DefaultClock);

    HttpState {
        bookings: Arc::new(BookingCommandService::new(
            Arc::clone(&booking_store),
            Arc::clone(&item_store),
            Arc::clone(&user_store),
            Arc::clone(&clock),
        )),
        booking_queries: Arc::new(BookingQueryService::new(
            Arc::clone(&booking_store),
            Arc::clone(&item_store),
            Arc::clone(&user_store),
            Arc::clone(&clock),
        )),
        items: Arc::new(ItemCatalogService::new(
            booking_store,
            item_store,
            Arc::clone(&user_store),
            clock,
        )),
        users: Arc::new(UserDirectoryService::new(user_store)),
    }
}

/// Register every route and its shared state on an application.
pub fn configure(
    state: HttpState,
    health: web::Data<HealthState>,
) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        cfg.app_data(web::Data::new(state))
            .app_data(health)
            .app_data(web::JsonConfig::default().error_handler(|err, _req| {
                crate::domain::Error::invalid_request(err.to_string()).into()
            }))
            .app_data(web::QueryConfig::default().error_handler(|err, _req| {
                crate::domain::Error::invalid_request(err.to_string()).into()
            }))
            .service(create_booking)
            .service(list_owner_bookings)
            .service(approve_booking)
            .service(get_booking)
            .service(list_bookings)
            .service(create_item)
            .service(update_item)
            .service(list_items)
            .service(get_item)
            .service(create_user)
            .service(get_user)
            .service(ready)
            .service(live);
    }
}

/// Run the HTTP server until shutdown.
///
/// # Errors
/// Returns [`std::io::Error`] when the listen address cannot be bound.
pub async fn run(config: ServerConfig) -> std::io::Result<()> {
    let state = build_state();
    let health = web::Data::new(HealthState::new());
    let factory_health = web::Data::clone(&health);

    let server = HttpServer::new(move || {
        App::new().wrap(Trace).configure(configure(
            state.clone(),
            web::Data::clone(&factory_health),
        ))
    })
    .bind(config.bind_addr())?;

    info!(bind_addr = %config.bind_addr(), "server listening");
    health.mark_ready();
    server.run().await
}
