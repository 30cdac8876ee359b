//! Item catalog and user directory services.
//!
//! Thin orchestration around the stores: the booking core treats users and
//! items as external collaborators, but the service still needs enough
//! surface to register them, keep listings current and render item details
//! with the owner-only last/next booking projections.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mockable::Clock;
use tracing::info;

use crate::domain::booking_service::{
    map_booking_store_error, map_item_store_error, map_user_store_error,
};
use crate::domain::ports::{
    BookingRef, BookingStore, CreateItemRequest, CreateUserRequest, GetItemRequest, ItemCatalog,
    ItemPayload, ItemStore, ListItemsRequest, NewItem, NewUser, UpdateItemRequest, UserDirectory,
    UserPayload, UserStore,
};
use crate::domain::{Booking, Error, Item, ItemId, User, UserId};

fn booking_ref(booking: Booking) -> BookingRef {
    BookingRef {
        id: booking.id,
        booker_id: booking.booker_id,
    }
}

/// Item catalog service implementing the [`ItemCatalog`] driving port.
#[derive(Clone)]
pub struct ItemCatalogService<B, I, U> {
    booking_store: Arc<B>,
    item_store: Arc<I>,
    user_store: Arc<U>,
    clock: Arc<dyn Clock>,
}

impl<B, I, U> ItemCatalogService<B, I, U> {
    /// Create a new service over the given stores and clock.
    pub fn new(
        booking_store: Arc<B>,
        item_store: Arc<I>,
        user_store: Arc<U>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            booking_store,
            item_store,
            user_store,
            clock,
        }
    }
}

impl<B, I, U> ItemCatalogService<B, I, U>
where
    B: BookingStore,
    I: ItemStore,
    U: UserStore,
{
    async fn load_item(&self, id: ItemId) -> Result<Item, Error> {
        self.item_store
            .find_by_id(id)
            .await
            .map_err(map_item_store_error)?
            .ok_or_else(|| Error::not_found(format!("item {id} not found")))
    }

    /// Fill in the owner-facing last/next projections against one `now`.
    async fn attach_projections(
        &self,
        payload: &mut ItemPayload,
        now: DateTime<Utc>,
    ) -> Result<(), Error> {
        payload.last_booking = self
            .booking_store
            .last_for_item(payload.id, now)
            .await
            .map_err(map_booking_store_error)?
            .map(booking_ref);
        payload.next_booking = self
            .booking_store
            .next_for_item(payload.id, now)
            .await
            .map_err(map_booking_store_error)?
            .map(booking_ref);
        Ok(())
    }
}

#[async_trait]
impl<B, I, U> ItemCatalog for ItemCatalogService<B, I, U>
where
    B: BookingStore,
    I: ItemStore,
    U: UserStore,
{
    async fn create_item(&self, request: CreateItemRequest) -> Result<ItemPayload, Error> {
        Item::validate_fields(&request.name, &request.description)
            .map_err(|err| Error::invalid_request(err.to_string()))?;

        self.user_store
            .find_by_id(request.owner_id)
            .await
            .map_err(map_user_store_error)?
            .ok_or_else(|| Error::not_found(format!("user {} not found", request.owner_id)))?;

        let item = self
            .item_store
            .create(NewItem {
                name: request.name,
                description: request.description,
                available: request.available,
                owner_id: request.owner_id,
                request_id: request.request_id,
            })
            .await
            .map_err(map_item_store_error)?;

        info!(item_id = %item.id, owner_id = %item.owner_id, "item listed");
        Ok(ItemPayload::from_item(item))
    }

    async fn update_item(&self, request: UpdateItemRequest) -> Result<ItemPayload, Error> {
        let stored = self.load_item(request.item_id).await?;
        if !stored.is_owned_by(request.caller_id) {
            return Err(Error::forbidden("only the owner may edit an item"));
        }

        let name = request.name.unwrap_or(stored.name);
        let description = request.description.unwrap_or(stored.description);
        Item::validate_fields(&name, &description)
            .map_err(|err| Error::invalid_request(err.to_string()))?;

        let updated = self
            .item_store
            .update(Item {
                id: stored.id,
                name,
                description,
                available: request.available.unwrap_or(stored.available),
                owner_id: stored.owner_id,
                request_id: stored.request_id,
            })
            .await
            .map_err(map_item_store_error)?;

        info!(item_id = %updated.id, owner_id = %updated.owner_id, "item updated");
        let mut payload = ItemPayload::from_item(updated);
        self.attach_projections(&mut payload, self.clock.utc())
            .await?;
        Ok(payload)
    }

    async fn list_items(&self, request: ListItemsRequest) -> Result<Vec<ItemPayload>, Error> {
        self.user_store
            .find_by_id(request.owner_id)
            .await
            .map_err(map_user_store_error)?
            .ok_or_else(|| Error::not_found(format!("user {} not found", request.owner_id)))?;

        let mut items = self
            .item_store
            .find_owned_by(request.owner_id)
            .await
            .map_err(map_item_store_error)?;
        items.sort_by_key(|item| item.id);

        let offset = usize::try_from(request.page.offset()).unwrap_or_default();
        let limit = usize::try_from(request.page.limit()).unwrap_or_default();
        let now = self.clock.utc();
        let mut payloads = Vec::new();
        for item in items.into_iter().skip(offset).take(limit) {
            let mut payload = ItemPayload::from_item(item);
            self.attach_projections(&mut payload, now).await?;
            payloads.push(payload);
        }
        Ok(payloads)
    }

    async fn get_item(&self, request: GetItemRequest) -> Result<ItemPayload, Error> {
        let item = self.load_item(request.item_id).await?;

        let owner_view = item.is_owned_by(request.viewer_id);
        let mut payload = ItemPayload::from_item(item);
        if owner_view {
            self.attach_projections(&mut payload, self.clock.utc())
                .await?;
        }

        Ok(payload)
    }
}

/// User directory service implementing the [`UserDirectory`] driving port.
#[derive(Clone)]
pub struct UserDirectoryService<U> {
    user_store: Arc<U>,
}

impl<U> UserDirectoryService<U> {
    /// Create a new service over the user store.
    pub fn new(user_store: Arc<U>) -> Self {
        Self { user_store }
    }
}

#[async_trait]
impl<U> UserDirectory for UserDirectoryService<U>
where
    U: UserStore,
{
    async fn create_user(&self, request: CreateUserRequest) -> Result<UserPayload, Error> {
        User::validate_fields(&request.name, &request.email)
            .map_err(|err| Error::invalid_request(err.to_string()))?;

        let user = self
            .user_store
            .create(NewUser {
                name: request.name,
                email: request.email,
            })
            .await
            .map_err(map_user_store_error)?;

        info!(user_id = %user.id, "user registered");
        Ok(user.into())
    }

    async fn get_user(&self, user_id: UserId) -> Result<UserPayload, Error> {
        let user = self
            .user_store
            .find_by_id(user_id)
            .await
            .map_err(map_user_store_error)?
            .ok_or_else(|| Error::not_found(format!("user {user_id} not found")))?;
        Ok(user.into())
    }
}

#[cfg(test)]
#[path = "catalog_service_tests.rs"]
mod tests;
