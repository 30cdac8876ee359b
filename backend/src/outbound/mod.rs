//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! Adapters are thin translators between domain types and the backing
//! collaborator. They contain no business logic; ordering, filtering and
//! concurrency contracts promised by the port traits are honoured here.

pub mod persistence;
