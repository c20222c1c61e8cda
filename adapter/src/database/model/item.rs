use kernel::model::{
    id::{ItemId, RequestId, UserId},
    item::Item,
};

#[derive(sqlx::FromRow)]
pub struct ItemRow {
    pub item_id: ItemId,
    pub item_name: String,
    pub description: String,
    pub available: bool,
    pub owner_id: UserId,
    pub request_id: Option<RequestId>,
}

impl From<ItemRow> for Item {
    fn from(value: ItemRow) -> Self {
        let ItemRow {
            item_id,
            item_name,
            description,
            available,
            owner_id,
            request_id,
        } = value;
        Item {
            item_id,
            item_name,
            description,
            available,
            owner_id,
            request_id,
        }
    }
}
