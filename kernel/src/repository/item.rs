use crate::model::{
    id::{ItemId, UserId},
    item::{
        event::{CreateItem, UpdateItem},
        Item,
    },
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait ItemRepository: Send + Sync {
    async fn create(&self, event: CreateItem) -> AppResult<Item>;
    async fn update(&self, event: UpdateItem) -> AppResult<()>;
    async fn find_by_id(&self, item_id: ItemId) -> AppResult<Option<Item>>;
    // Listing order: oldest item first, matching insertion order.
    async fn find_by_owner_id(&self, owner_id: UserId) -> AppResult<Vec<Item>>;
    async fn exists_by_owner_id(&self, owner_id: UserId) -> AppResult<bool>;
    // Case-insensitive match on name or description, available items only.
    async fn find_by_text(&self, text: &str) -> AppResult<Vec<Item>>;
}
