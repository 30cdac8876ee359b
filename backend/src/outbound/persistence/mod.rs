//! Store adapters backing the domain ports.
//!
//! The current adapters keep all records in process memory behind an
//! append-only arena per store. Identifiers are dense positive integers
//! assigned at insertion, so a record's index is recoverable from its id
//! without a secondary lookup table.

mod memory_booking_store;
mod memory_item_store;
mod memory_user_store;

pub use memory_booking_store::MemoryBookingStore;
pub use memory_item_store::MemoryItemStore;
pub use memory_user_store::MemoryUserStore;
