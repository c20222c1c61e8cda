use crate::model::id::{ItemId, RequestId, UserId};
use chrono::{DateTime, Utc};

pub mod event;

#[derive(Debug, Clone)]
pub struct ItemRequest {
    pub request_id: RequestId,
    pub description: String,
    pub requestor_id: UserId,
    pub created_at: DateTime<Utc>,
}

/// A request together with the items listed to satisfy it, as produced by
/// the request/item join. A request with no items carries an empty list.
#[derive(Debug, Clone)]
pub struct RequestWithItems {
    pub request_id: RequestId,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub items: Vec<RequestItem>,
}

#[derive(Debug, Clone)]
pub struct RequestItem {
    pub item_id: ItemId,
    pub item_name: String,
    pub owner_id: UserId,
}
