use crate::model::comment::CommentResponse;
use chrono::{DateTime, Utc};
use garde::Validate;
use kernel::model::{
    comment::Comment,
    id::{ItemId, RequestId, UserId},
    item::{
        event::{CreateItem, UpdateItem},
        Item,
    },
};
use kernel::service::item::ItemView;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateItemRequest {
    #[garde(length(min = 1))]
    pub item_name: String,
    #[garde(length(min = 1))]
    pub description: String,
    #[garde(skip)]
    pub available: bool,
    #[garde(skip)]
    pub request_id: Option<RequestId>,
}

impl CreateItemRequest {
    pub fn into_event(self, owner_id: UserId) -> CreateItem {
        let CreateItemRequest {
            item_name,
            description,
            available,
            request_id,
        } = self;
        CreateItem {
            owner_id,
            item_name,
            description,
            available,
            request_id,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateItemRequest {
    #[garde(inner(length(min = 1)))]
    pub item_name: Option<String>,
    #[garde(inner(length(min = 1)))]
    pub description: Option<String>,
    #[garde(skip)]
    pub available: Option<bool>,
    #[garde(skip)]
    pub request_id: Option<RequestId>,
}

impl UpdateItemRequest {
    pub fn into_event(self, item_id: ItemId) -> UpdateItem {
        let UpdateItemRequest {
            item_name,
            description,
            available,
            request_id,
        } = self;
        UpdateItem {
            item_id,
            item_name,
            description,
            available,
            request_id,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchItemsQuery {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemsResponse {
    pub items: Vec<ItemResponse>,
}

impl From<Vec<Item>> for ItemsResponse {
    fn from(value: Vec<Item>) -> Self {
        Self {
            items: value.into_iter().map(ItemResponse::from).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemResponse {
    pub item_id: ItemId,
    pub item_name: String,
    pub description: String,
    pub available: bool,
    pub owner_id: UserId,
    pub request_id: Option<RequestId>,
}

impl From<Item> for ItemResponse {
    fn from(value: Item) -> Self {
        let Item {
            item_id,
            item_name,
            description,
            available,
            owner_id,
            request_id,
        } = value;
        Self {
            item_id,
            item_name,
            description,
            available,
            owner_id,
            request_id,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnedItemsResponse {
    pub items: Vec<OwnedItemResponse>,
}

/// An item annotated with its current and upcoming occupancy and its
/// comments, for the owner's listing and the single-item view.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnedItemResponse {
    pub item_id: ItemId,
    pub item_name: String,
    pub description: String,
    pub available: bool,
    pub owner_id: UserId,
    pub request_id: Option<RequestId>,
    pub last_booking: Option<DateTime<Utc>>,
    pub next_booking: Option<DateTime<Utc>>,
    pub comments: Vec<CommentResponse>,
}

impl OwnedItemResponse {
    pub fn compose(
        item: Item,
        last_booking: Option<DateTime<Utc>>,
        next_booking: Option<DateTime<Utc>>,
        comments: Vec<Comment>,
    ) -> Self {
        let Item {
            item_id,
            item_name,
            description,
            available,
            owner_id,
            request_id,
        } = item;
        Self {
            item_id,
            item_name,
            description,
            available,
            owner_id,
            request_id,
            last_booking,
            next_booking,
            comments: comments.into_iter().map(CommentResponse::from).collect(),
        }
    }
}

impl From<ItemView> for OwnedItemResponse {
    fn from(value: ItemView) -> Self {
        let ItemView {
            item,
            last_booking,
            next_booking,
            comments,
        } = value;
        Self::compose(item, last_booking, next_booking, comments)
    }
}
