use chrono::{DateTime, Utc};
use garde::Validate;
use kernel::model::{
    comment::{event::CreateComment, Comment},
    id::{CommentId, ItemId, UserId},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentRequest {
    #[garde(length(min = 1))]
    pub text: String,
}

impl CreateCommentRequest {
    pub fn into_event(self, item_id: ItemId, author_id: UserId) -> CreateComment {
        CreateComment {
            item_id,
            author_id,
            text: self.text,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentResponse {
    pub comment_id: CommentId,
    pub text: String,
    pub author_name: String,
    pub created_at: DateTime<Utc>,
}

impl From<Comment> for CommentResponse {
    fn from(value: Comment) -> Self {
        let Comment {
            comment_id,
            text,
            item_id: _,
            author_id: _,
            author_name,
            created_at,
        } = value;
        Self {
            comment_id,
            text,
            author_name,
            created_at,
        }
    }
}
