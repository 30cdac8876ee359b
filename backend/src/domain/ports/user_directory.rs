//! Driving port for user registration and lookup.

use async_trait::async_trait;

use crate::domain::{Error, User, UserId};

/// Request payload for registering a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
}

/// User view returned by the directory port.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserPayload {
    pub id: UserId,
    pub name: String,
    pub email: String,
}

impl From<User> for UserPayload {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}

/// Use-cases for registering and fetching users.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Validate and persist a new user.
    async fn create_user(&self, request: CreateUserRequest) -> Result<UserPayload, Error>;

    /// Fetch a user by identifier.
    async fn get_user(&self, user_id: UserId) -> Result<UserPayload, Error>;
}
