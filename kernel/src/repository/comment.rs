use crate::model::{
    comment::{event::CreateComment, Comment},
    id::ItemId,
};
use async_trait::async_trait;
use shared::error::AppResult;
use std::collections::HashMap;

#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn create(&self, event: CreateComment) -> AppResult<Comment>;
    async fn find_by_item_id(&self, item_id: ItemId) -> AppResult<Vec<Comment>>;
    async fn find_by_item_ids(
        &self,
        item_ids: &[ItemId],
    ) -> AppResult<HashMap<ItemId, Vec<Comment>>>;
}
