use crate::database::{model::comment::CommentRow, ConnectionPool};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    comment::{event::CreateComment, Comment},
    id::{CommentId, ItemId},
};
use kernel::repository::comment::CommentRepository;
use shared::error::{AppError, AppResult};
use std::collections::HashMap;

const SELECT_COMMENT: &str = r#"
    SELECT
        c.comment_id,
        c.comment_text,
        c.item_id,
        c.author_id,
        u.user_name AS author_name,
        c.created_at
    FROM comments AS c
    INNER JOIN users AS u ON c.author_id = u.user_id
"#;

#[derive(new)]
pub struct CommentRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl CommentRepository for CommentRepositoryImpl {
    async fn create(&self, event: CreateComment) -> AppResult<Comment> {
        let comment_id = CommentId::new();
        sqlx::query(
            r#"
                INSERT INTO comments (comment_id, item_id, author_id, comment_text, created_at)
                VALUES ($1, $2, $3, $4, CURRENT_TIMESTAMP)
            "#,
        )
        .bind(comment_id)
        .bind(event.item_id)
        .bind(event.author_id)
        .bind(&event.text)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        let row: CommentRow =
            sqlx::query_as(&format!("{SELECT_COMMENT} WHERE c.comment_id = $1"))
                .bind(comment_id)
                .fetch_one(self.db.inner_ref())
                .await
                .map_err(AppError::SpecificOperationError)?;

        Ok(row.into())
    }

    async fn find_by_item_id(&self, item_id: ItemId) -> AppResult<Vec<Comment>> {
        let rows: Vec<CommentRow> = sqlx::query_as(&format!(
            "{SELECT_COMMENT} WHERE c.item_id = $1 ORDER BY c.created_at ASC"
        ))
        .bind(item_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(Comment::from).collect())
    }

    async fn find_by_item_ids(
        &self,
        item_ids: &[ItemId],
    ) -> AppResult<HashMap<ItemId, Vec<Comment>>> {
        if item_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows: Vec<CommentRow> = sqlx::query_as(&format!(
            "{SELECT_COMMENT} WHERE c.item_id = ANY($1) ORDER BY c.created_at ASC"
        ))
        .bind(item_ids.to_vec())
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        let mut grouped: HashMap<ItemId, Vec<Comment>> = HashMap::new();
        for row in rows {
            grouped.entry(row.item_id).or_default().push(row.into());
        }
        Ok(grouped)
    }
}
