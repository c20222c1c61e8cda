use crate::model::id::{CommentId, ItemId, UserId};
use chrono::{DateTime, Utc};

pub mod event;

#[derive(Debug, Clone)]
pub struct Comment {
    pub comment_id: CommentId,
    pub text: String,
    pub item_id: ItemId,
    pub author_id: UserId,
    pub author_name: String,
    pub created_at: DateTime<Utc>,
}
