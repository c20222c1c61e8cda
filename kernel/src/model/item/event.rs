use crate::model::id::{ItemId, RequestId, UserId};
use derive_new::new;

#[derive(new)]
pub struct CreateItem {
    pub owner_id: UserId,
    pub item_name: String,
    pub description: String,
    pub available: bool,
    pub request_id: Option<RequestId>,
}

#[derive(new)]
pub struct UpdateItem {
    pub item_id: ItemId,
    pub item_name: Option<String>,
    pub description: Option<String>,
    pub available: Option<bool>,
    pub request_id: Option<RequestId>,
}
