use crate::model::id::{ItemId, RequestId, UserId};

pub mod event;

#[derive(Debug, Clone)]
pub struct Item {
    pub item_id: ItemId,
    pub item_name: String,
    pub description: String,
    pub available: bool,
    pub owner_id: UserId,
    // Set when the item was listed to satisfy an open item request.
    pub request_id: Option<RequestId>,
}
