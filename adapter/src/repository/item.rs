use crate::database::{model::item::ItemRow, ConnectionPool};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    id::{ItemId, UserId},
    item::{
        event::{CreateItem, UpdateItem},
        Item,
    },
};
use kernel::repository::item::ItemRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct ItemRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl ItemRepository for ItemRepositoryImpl {
    async fn create(&self, event: CreateItem) -> AppResult<Item> {
        let item_id = ItemId::new();
        sqlx::query(
            r#"
                INSERT INTO items (item_id, item_name, description, available, owner_id, request_id)
                VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(item_id)
        .bind(&event.item_name)
        .bind(&event.description)
        .bind(event.available)
        .bind(event.owner_id)
        .bind(event.request_id)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(Item {
            item_id,
            item_name: event.item_name,
            description: event.description,
            available: event.available,
            owner_id: event.owner_id,
            request_id: event.request_id,
        })
    }

    async fn update(&self, event: UpdateItem) -> AppResult<()> {
        let res = sqlx::query(
            r#"
                UPDATE items
                SET item_name = COALESCE($2, item_name),
                    description = COALESCE($3, description),
                    available = COALESCE($4, available),
                    request_id = COALESCE($5, request_id)
                WHERE item_id = $1
            "#,
        )
        .bind(event.item_id)
        .bind(event.item_name)
        .bind(event.description)
        .bind(event.available)
        .bind(event.request_id)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound(format!(
                "item {} not found",
                event.item_id
            )));
        }
        Ok(())
    }

    async fn find_by_id(&self, item_id: ItemId) -> AppResult<Option<Item>> {
        let row: Option<ItemRow> = sqlx::query_as(
            r#"
                SELECT item_id, item_name, description, available, owner_id, request_id
                FROM items
                WHERE item_id = $1
            "#,
        )
        .bind(item_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(row.map(Item::from))
    }

    async fn find_by_owner_id(&self, owner_id: UserId) -> AppResult<Vec<Item>> {
        let rows: Vec<ItemRow> = sqlx::query_as(
            r#"
                SELECT item_id, item_name, description, available, owner_id, request_id
                FROM items
                WHERE owner_id = $1
                ORDER BY created_at ASC
            "#,
        )
        .bind(owner_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(Item::from).collect())
    }

    async fn exists_by_owner_id(&self, owner_id: UserId) -> AppResult<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM items WHERE owner_id = $1)")
                .bind(owner_id)
                .fetch_one(self.db.inner_ref())
                .await
                .map_err(AppError::SpecificOperationError)?;

        Ok(exists)
    }

    async fn find_by_text(&self, text: &str) -> AppResult<Vec<Item>> {
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }

        let rows: Vec<ItemRow> = sqlx::query_as(
            r#"
                SELECT item_id, item_name, description, available, owner_id, request_id
                FROM items
                WHERE available
                  AND (item_name ILIKE '%' || $1 || '%'
                       OR description ILIKE '%' || $1 || '%')
                ORDER BY created_at ASC
            "#,
        )
        .bind(text)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(Item::from).collect())
    }
}
