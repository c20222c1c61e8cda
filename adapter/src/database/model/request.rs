use chrono::{DateTime, Utc};
use kernel::model::{
    id::{ItemId, RequestId, UserId},
    request::ItemRequest,
};

#[derive(sqlx::FromRow)]
pub struct RequestRow {
    pub request_id: RequestId,
    pub description: String,
    pub requestor_id: UserId,
    pub created_at: DateTime<Utc>,
}

impl From<RequestRow> for ItemRequest {
    fn from(value: RequestRow) -> Self {
        let RequestRow {
            request_id,
            description,
            requestor_id,
            created_at,
        } = value;
        ItemRequest {
            request_id,
            description,
            requestor_id,
            created_at,
        }
    }
}

// One flat row per request x associated item. The item side is entirely
// NULL for a request no item was listed against.
#[derive(Debug, sqlx::FromRow)]
pub struct RequestItemRow {
    pub request_id: RequestId,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub item_id: Option<ItemId>,
    pub item_name: Option<String>,
    pub owner_id: Option<UserId>,
}
