//! User data model.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Validation errors returned by [`User::validate_fields`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    EmptyName,
    InvalidEmail,
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "user name must not be empty"),
            Self::InvalidEmail => write!(f, "email must contain an @ and no whitespace"),
        }
    }
}

impl std::error::Error for UserValidationError {}

/// Stable numeric user identifier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema,
)]
#[serde(transparent)]
pub struct UserId(pub i64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A registered user.
///
/// Immutable from the booking core's perspective; the core only ever fetches
/// users by id through the [`crate::domain::ports::UserStore`] port.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Stable identifier assigned by the store.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Contact email; uniqueness is enforced by the store.
    pub email: String,
}

impl User {
    /// Validate the mutable user fields.
    ///
    /// # Errors
    /// Returns [`UserValidationError`] when the name is blank or the email is
    /// not plausibly an address.
    pub fn validate_fields(name: &str, email: &str) -> Result<(), UserValidationError> {
        if name.trim().is_empty() {
            return Err(UserValidationError::EmptyName);
        }
        if !email.contains('@') || email.chars().any(char::is_whitespace) || email.len() < 3 {
            return Err(UserValidationError::InvalidEmail);
        }
        Ok(())
    }
}
