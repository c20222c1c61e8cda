use chrono::{DateTime, Utc};
use kernel::model::{
    comment::Comment,
    id::{CommentId, ItemId, UserId},
};

// Joined with users for the author's display name.
#[derive(sqlx::FromRow)]
pub struct CommentRow {
    pub comment_id: CommentId,
    pub comment_text: String,
    pub item_id: ItemId,
    pub author_id: UserId,
    pub author_name: String,
    pub created_at: DateTime<Utc>,
}

impl From<CommentRow> for Comment {
    fn from(value: CommentRow) -> Self {
        let CommentRow {
            comment_id,
            comment_text,
            item_id,
            author_id,
            author_name,
            created_at,
        } = value;
        Comment {
            comment_id,
            text: comment_text,
            item_id,
            author_id,
            author_name,
            created_at,
        }
    }
}
