//! Item data model.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::UserId;

/// Validation errors returned by [`Item::validate_fields`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemValidationError {
    EmptyName,
    EmptyDescription,
}

impl fmt::Display for ItemValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "item name must not be empty"),
            Self::EmptyDescription => write!(f, "item description must not be empty"),
        }
    }
}

impl std::error::Error for ItemValidationError {}

/// Stable numeric item identifier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema,
)]
#[serde(transparent)]
pub struct ItemId(pub i64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A shareable item listed by its owner.
///
/// Ownership never transfers. The `available` flag gates new bookings and is
/// checked once at booking creation, not re-validated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Stable identifier assigned by the store.
    pub id: ItemId,
    /// Short display name.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Whether new bookings are accepted.
    pub available: bool,
    /// The listing user; never changes after creation.
    pub owner_id: UserId,
    /// Originating item request, when the listing answers one.
    pub request_id: Option<i64>,
}

impl Item {
    /// Validate the mutable item fields.
    ///
    /// # Errors
    /// Returns [`ItemValidationError`] when the name or description is blank.
    pub fn validate_fields(name: &str, description: &str) -> Result<(), ItemValidationError> {
        if name.trim().is_empty() {
            return Err(ItemValidationError::EmptyName);
        }
        if description.trim().is_empty() {
            return Err(ItemValidationError::EmptyDescription);
        }
        Ok(())
    }

    /// Whether `user` owns this item.
    pub fn is_owned_by(&self, user: UserId) -> bool {
        self.owner_id == user
    }
}
