//! HTTP inbound adapter exposing REST endpoints.

pub mod bookings;
pub mod error;
pub mod health;
pub mod items;
pub mod sharer;
pub mod state;
pub mod users;

pub use error::ApiResult;
pub use sharer::SharerId;
