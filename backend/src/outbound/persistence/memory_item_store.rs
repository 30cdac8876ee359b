//! In-memory `ItemStore` implementation.

use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::ports::{ItemStore, ItemStoreError, NewItem};
use crate::domain::{Item, ItemId, UserId};

/// Arena-backed item store.
#[derive(Debug, Default)]
pub struct MemoryItemStore {
    items: RwLock<Vec<Item>>,
}

impl MemoryItemStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned(_: impl std::fmt::Debug) -> ItemStoreError {
    ItemStoreError::connection("item store lock poisoned")
}

fn next_id(len: usize) -> Result<i64, ItemStoreError> {
    let len = i64::try_from(len).map_err(|_| ItemStoreError::query("item arena exhausted"))?;
    Ok(len.saturating_add(1))
}

#[async_trait]
impl ItemStore for MemoryItemStore {
    async fn create(&self, item: NewItem) -> Result<Item, ItemStoreError> {
        let mut items = self.items.write().map_err(poisoned)?;
        let id = ItemId(next_id(items.len())?);
        let stored = Item {
            id,
            name: item.name,
            description: item.description,
            available: item.available,
            owner_id: item.owner_id,
            request_id: item.request_id,
        };
        items.push(stored.clone());
        Ok(stored)
    }

    async fn update(&self, item: Item) -> Result<Item, ItemStoreError> {
        let mut items = self.items.write().map_err(poisoned)?;
        let slot = items
            .iter_mut()
            .find(|stored| stored.id == item.id)
            .ok_or(ItemStoreError::missing(item.id))?;
        *slot = item.clone();
        Ok(item)
    }

    async fn find_by_id(&self, id: ItemId) -> Result<Option<Item>, ItemStoreError> {
        let items = self.items.read().map_err(poisoned)?;
        Ok(items.iter().find(|item| item.id == id).cloned())
    }

    async fn find_owned_by(&self, owner: UserId) -> Result<Vec<Item>, ItemStoreError> {
        let items = self.items.read().map_err(poisoned)?;
        Ok(items
            .iter()
            .filter(|item| item.owner_id == owner)
            .cloned()
            .collect())
    }
}
