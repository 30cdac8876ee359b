//! Driving port for item listing and detail views.

use async_trait::async_trait;
use pagination::PageRequest;

use crate::domain::{BookingId, Error, Item, ItemId, UserId};

/// Request payload for listing a new item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateItemRequest {
    pub owner_id: UserId,
    pub name: String,
    pub description: String,
    pub available: bool,
    pub request_id: Option<i64>,
}

/// Request payload for editing an item.
///
/// Absent fields keep their stored values; only the present ones are
/// replaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateItemRequest {
    pub item_id: ItemId,
    pub caller_id: UserId,
    pub name: Option<String>,
    pub description: Option<String>,
    pub available: Option<bool>,
}

/// Request payload for an owner's item listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListItemsRequest {
    pub owner_id: UserId,
    pub page: PageRequest,
}

/// Request payload for reading an item's details.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetItemRequest {
    pub item_id: ItemId,
    pub viewer_id: UserId,
}

/// Minimal booking projection attached to owner-facing item details.
///
/// Deliberately reduced to two ids; the full booking/item graph is never
/// embedded here so serialisation cannot cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingRef {
    pub id: BookingId,
    pub booker_id: UserId,
}

/// Item view returned by the catalog port.
///
/// `last_booking`/`next_booking` are populated only when the viewer owns the
/// item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemPayload {
    pub id: ItemId,
    pub name: String,
    pub description: String,
    pub available: bool,
    pub owner_id: UserId,
    pub request_id: Option<i64>,
    pub last_booking: Option<BookingRef>,
    pub next_booking: Option<BookingRef>,
}

impl ItemPayload {
    /// Build the viewer-independent part of the payload.
    pub fn from_item(item: Item) -> Self {
        Self {
            id: item.id,
            name: item.name,
            description: item.description,
            available: item.available,
            owner_id: item.owner_id,
            request_id: item.request_id,
            last_booking: None,
            next_booking: None,
        }
    }
}

/// Use-cases for listing items and rendering their details.
#[async_trait]
pub trait ItemCatalog: Send + Sync {
    /// Validate and persist a new item owned by the caller.
    async fn create_item(&self, request: CreateItemRequest) -> Result<ItemPayload, Error>;

    /// Replace the present fields of an item owned by the caller.
    async fn update_item(&self, request: UpdateItemRequest) -> Result<ItemPayload, Error>;

    /// The caller's items with their booking projections, paged by id.
    async fn list_items(&self, request: ListItemsRequest) -> Result<Vec<ItemPayload>, Error>;

    /// Item details, with last/next approved bookings for the owner.
    async fn get_item(&self, request: GetItemRequest) -> Result<ItemPayload, Error>;
}
