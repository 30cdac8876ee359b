//! Item HTTP handlers.
//!
//! ```text
//! POST  /items                  List an item for sharing
//! PATCH /items/{id}             Owner edit, including the availability toggle
//! GET   /items?from=&size=      The caller's items with booking projections
//! GET   /items/{id}             Item details, with projections for the owner
//! ```

use actix_web::{get, patch, post, web};
use pagination::{DEFAULT_FROM, DEFAULT_SIZE, PageRequest};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::ports::{
    BookingRef, CreateItemRequest, GetItemRequest, ItemPayload, ListItemsRequest,
    UpdateItemRequest,
};
use crate::domain::{Error, ItemId};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::{ApiResult, SharerId};

/// Request payload for listing an item.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateItemBody {
    pub name: String,
    pub description: String,
    pub available: bool,
    pub request_id: Option<i64>,
}

/// Request payload for editing an item; absent fields keep their values.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateItemBody {
    pub name: Option<String>,
    pub description: Option<String>,
    pub available: Option<bool>,
}

/// Page parameters for the owner's item listing.
#[derive(Debug, Clone, Copy, Deserialize, IntoParams)]
pub struct ListItemsQuery {
    /// Element offset; defaults to 0.
    pub from: Option<i64>,
    /// Page length; defaults to 10.
    pub size: Option<i64>,
}

fn parse_page(query: &ListItemsQuery) -> Result<PageRequest, Error> {
    PageRequest::new(
        query.from.unwrap_or(DEFAULT_FROM),
        query.size.unwrap_or(DEFAULT_SIZE),
    )
    .map_err(|err| Error::invalid_request(err.to_string()))
}

/// Minimal booking projection embedded in owner item views.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingRefBody {
    pub id: i64,
    pub booker_id: i64,
}

impl From<BookingRef> for BookingRefBody {
    fn from(reference: BookingRef) -> Self {
        Self {
            id: reference.id.0,
            booker_id: reference.booker_id.0,
        }
    }
}

/// Item representation returned by the catalog endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ItemBody {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub available: bool,
    pub owner_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<i64>,
    /// Present only when the viewer owns the item.
    pub last_booking: Option<BookingRefBody>,
    pub next_booking: Option<BookingRefBody>,
}

impl From<ItemPayload> for ItemBody {
    fn from(payload: ItemPayload) -> Self {
        Self {
            id: payload.id.0,
            name: payload.name,
            description: payload.description,
            available: payload.available,
            owner_id: payload.owner_id.0,
            request_id: payload.request_id,
            last_booking: payload.last_booking.map(Into::into),
            next_booking: payload.next_booking.map(Into::into),
        }
    }
}

/// List an item owned by the caller.
#[utoipa::path(
    post,
    path = "/items",
    request_body = CreateItemBody,
    params(("X-Sharer-User-Id" = i64, Header, description = "Caller identity")),
    responses(
        (status = 200, description = "Item listed", body = ItemBody),
        (status = 400, description = "Blank name or description", body = Error),
        (status = 404, description = "Owner not found", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["items"],
    operation_id = "createItem"
)]
#[post("/items")]
pub async fn create_item(
    state: web::Data<HttpState>,
    sharer: SharerId,
    payload: web::Json<CreateItemBody>,
) -> ApiResult<web::Json<ItemBody>> {
    let body = payload.into_inner();
    let item = state
        .items
        .create_item(CreateItemRequest {
            name: body.name,
            description: body.description,
            available: body.available,
            owner_id: sharer.user_id(),
            request_id: body.request_id,
        })
        .await?;
    Ok(web::Json(item.into()))
}

/// Edit an item owned by the caller.
#[utoipa::path(
    patch,
    path = "/items/{item_id}",
    request_body = UpdateItemBody,
    params(
        ("item_id" = i64, Path, description = "Item identifier"),
        ("X-Sharer-User-Id" = i64, Header, description = "Caller identity")
    ),
    responses(
        (status = 200, description = "Item updated", body = ItemBody),
        (status = 400, description = "Blank replacement name or description", body = Error),
        (status = 403, description = "Caller does not own the item", body = Error),
        (status = 404, description = "Item not found", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["items"],
    operation_id = "updateItem"
)]
#[patch("/items/{item_id}")]
pub async fn update_item(
    state: web::Data<HttpState>,
    sharer: SharerId,
    path: web::Path<i64>,
    payload: web::Json<UpdateItemBody>,
) -> ApiResult<web::Json<ItemBody>> {
    let body = payload.into_inner();
    let item = state
        .items
        .update_item(UpdateItemRequest {
            item_id: ItemId(path.into_inner()),
            caller_id: sharer.user_id(),
            name: body.name,
            description: body.description,
            available: body.available,
        })
        .await?;
    Ok(web::Json(item.into()))
}

/// List the caller's items, lowest id first.
#[utoipa::path(
    get,
    path = "/items",
    params(
        ListItemsQuery,
        ("X-Sharer-User-Id" = i64, Header, description = "Caller identity")
    ),
    responses(
        (status = 200, description = "Items", body = [ItemBody]),
        (status = 400, description = "Invalid page parameters", body = Error),
        (status = 404, description = "Caller not found", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["items"],
    operation_id = "listItems"
)]
#[get("/items")]
pub async fn list_items(
    state: web::Data<HttpState>,
    sharer: SharerId,
    query: web::Query<ListItemsQuery>,
) -> ApiResult<web::Json<Vec<ItemBody>>> {
    let items = state
        .items
        .list_items(ListItemsRequest {
            owner_id: sharer.user_id(),
            page: parse_page(&query)?,
        })
        .await?;
    Ok(web::Json(items.into_iter().map(Into::into).collect()))
}

/// Fetch item details.
#[utoipa::path(
    get,
    path = "/items/{item_id}",
    params(
        ("item_id" = i64, Path, description = "Item identifier"),
        ("X-Sharer-User-Id" = i64, Header, description = "Caller identity")
    ),
    responses(
        (status = 200, description = "Item", body = ItemBody),
        (status = 404, description = "Item not found", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["items"],
    operation_id = "getItem"
)]
#[get("/items/{item_id}")]
pub async fn get_item(
    state: web::Data<HttpState>,
    sharer: SharerId,
    path: web::Path<i64>,
) -> ApiResult<web::Json<ItemBody>> {
    let item = state
        .items
        .get_item(GetItemRequest {
            item_id: ItemId(path.into_inner()),
            viewer_id: sharer.user_id(),
        })
        .await?;
    Ok(web::Json(item.into()))
}
