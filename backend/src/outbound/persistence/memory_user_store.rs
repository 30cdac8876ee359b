//! In-memory `UserStore` implementation.

use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::ports::{NewUser, UserStore, UserStoreError};
use crate::domain::{User, UserId};

/// Arena-backed user store enforcing email uniqueness on insert.
#[derive(Debug, Default)]
pub struct MemoryUserStore {
    users: RwLock<Vec<User>>,
}

impl MemoryUserStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned(_: impl std::fmt::Debug) -> UserStoreError {
    UserStoreError::connection("user store lock poisoned")
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn create(&self, user: NewUser) -> Result<User, UserStoreError> {
        let mut users = self.users.write().map_err(poisoned)?;
        if users.iter().any(|existing| existing.email == user.email) {
            return Err(UserStoreError::duplicate_email(user.email));
        }
        let id = UserId(next_id(users.len())?);
        let stored = User {
            id,
            name: user.name,
            email: user.email,
        };
        users.push(stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserStoreError> {
        let users = self.users.read().map_err(poisoned)?;
        Ok(users.iter().find(|user| user.id == id).cloned())
    }
}

fn next_id(len: usize) -> Result<i64, UserStoreError> {
    let len = i64::try_from(len).map_err(|_| UserStoreError::query("user arena exhausted"))?;
    Ok(len.saturating_add(1))
}
