//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports ([`UserStore`], [`ItemStore`], [`BookingStore`]) describe how
//! the domain reaches persistence adapters; driving ports ([`BookingCommand`],
//! [`BookingQuery`], [`ItemCatalog`], [`UserDirectory`]) are the use-cases the
//! inbound HTTP layer depends on. Each driven port exposes strongly typed
//! errors so adapters map their failures into predictable variants instead of
//! returning `anyhow::Result`.

mod booking_command;
mod booking_query;
mod booking_store;
mod item_catalog;
mod item_store;
mod user_directory;
mod user_store;

pub use booking_command::{
    ApproveBookingRequest, BookingCommand, BookingPayload, GetBookingRequest, NewBookingRequest,
};
pub use booking_query::{BookingQuery, ListBookingsRequest};
#[cfg(test)]
pub use booking_store::MockBookingStore;
pub use booking_store::{BookingStore, BookingStoreError, NewBooking};
pub use item_catalog::{
    BookingRef, CreateItemRequest, GetItemRequest, ItemCatalog, ItemPayload, ListItemsRequest,
    UpdateItemRequest,
};
#[cfg(test)]
pub use item_store::MockItemStore;
pub use item_store::{ItemStore, ItemStoreError, NewItem};
pub use user_directory::{CreateUserRequest, UserDirectory, UserPayload};
#[cfg(test)]
pub use user_store::MockUserStore;
pub use user_store::{NewUser, UserStore, UserStoreError};
