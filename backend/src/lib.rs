//! Item sharing backend.
//!
//! Hexagonal layout: `domain` holds the entities, ports and services,
//! `inbound` the HTTP adapter, `outbound` the store adapters. `server` wires
//! the layers together.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod server;

pub use doc::ApiDoc;
pub use middleware::{Trace, TraceId};
