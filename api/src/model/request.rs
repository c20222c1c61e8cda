use chrono::{DateTime, Utc};
use garde::Validate;
use kernel::model::{
    id::{ItemId, RequestId, UserId},
    request::{event::CreateRequest, ItemRequest, RequestItem, RequestWithItems},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateRequestRequest {
    #[garde(length(min = 1))]
    pub description: String,
}

impl CreateRequestRequest {
    pub fn into_event(self, requestor_id: UserId) -> CreateRequest {
        CreateRequest {
            requestor_id,
            description: self.description,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestsResponse {
    pub items: Vec<RequestResponse>,
}

impl From<Vec<RequestWithItems>> for RequestsResponse {
    fn from(value: Vec<RequestWithItems>) -> Self {
        Self {
            items: value.into_iter().map(RequestResponse::from).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestResponse {
    pub request_id: RequestId,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub items: Vec<RequestItemResponse>,
}

impl From<RequestWithItems> for RequestResponse {
    fn from(value: RequestWithItems) -> Self {
        let RequestWithItems {
            request_id,
            description,
            created_at,
            items,
        } = value;
        Self {
            request_id,
            description,
            created_at,
            items: items.into_iter().map(RequestItemResponse::from).collect(),
        }
    }
}

// A freshly created request has no items yet.
impl From<ItemRequest> for RequestResponse {
    fn from(value: ItemRequest) -> Self {
        let ItemRequest {
            request_id,
            description,
            requestor_id: _,
            created_at,
        } = value;
        Self {
            request_id,
            description,
            created_at,
            items: Vec::new(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestItemResponse {
    pub item_id: ItemId,
    pub item_name: String,
    pub owner_id: UserId,
}

impl From<RequestItem> for RequestItemResponse {
    fn from(value: RequestItem) -> Self {
        let RequestItem {
            item_id,
            item_name,
            owner_id,
        } = value;
        Self {
            item_id,
            item_name,
            owner_id,
        }
    }
}
