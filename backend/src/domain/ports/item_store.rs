//! Port for item persistence.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{Item, ItemId, UserId};

/// Errors raised by item store adapters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ItemStoreError {
    /// Store connection could not be established.
    #[error("item store connection failed: {message}")]
    Connection { message: String },
    /// Query or mutation failed during execution.
    #[error("item store query failed: {message}")]
    Query { message: String },
    /// The addressed item does not exist.
    #[error("item {id} not found")]
    Missing { id: ItemId },
}

impl ItemStoreError {
    /// Helper for connection oriented failures.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Helper for query failures.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }

    /// Helper for addressing an absent item.
    #[must_use]
    pub const fn missing(id: ItemId) -> Self {
        Self::Missing { id }
    }
}

/// Fields for an item record the store has not assigned an id to yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItem {
    pub name: String,
    pub description: String,
    pub available: bool,
    pub owner_id: UserId,
    pub request_id: Option<i64>,
}

/// Port for storing and retrieving item aggregates.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Persist a new item and return it with its assigned id.
    async fn create(&self, item: NewItem) -> Result<Item, ItemStoreError>;

    /// Replace the stored row matching `item.id`.
    async fn update(&self, item: Item) -> Result<Item, ItemStoreError>;

    /// Fetch an item by identifier.
    async fn find_by_id(&self, id: ItemId) -> Result<Option<Item>, ItemStoreError>;

    /// All items owned by `owner`.
    async fn find_owned_by(&self, owner: UserId) -> Result<Vec<Item>, ItemStoreError>;
}
