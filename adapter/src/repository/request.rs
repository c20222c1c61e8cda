use crate::database::{
    model::request::{RequestItemRow, RequestRow},
    ConnectionPool,
};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    id::{RequestId, UserId},
    request::{event::CreateRequest, ItemRequest, RequestItem, RequestWithItems},
};
use kernel::repository::request::ItemRequestRepository;
use shared::error::{AppError, AppResult};
use std::collections::HashMap;

// The flat request x item projection every join variant starts from. The
// ORDER BY drives the grouping order of the fold below, so it is part of
// the API contract: newest request first, request id ascending on ties,
// items ascending within a request.
const SELECT_REQUEST_ITEMS: &str = r#"
    SELECT
        r.request_id,
        r.description,
        r.created_at,
        i.item_id,
        i.item_name,
        i.owner_id
    FROM item_requests AS r
    LEFT JOIN items AS i ON i.request_id = r.request_id
"#;

const ORDER_REQUEST_ITEMS: &str = "ORDER BY r.created_at DESC, r.request_id ASC, i.item_id ASC";

#[derive(new)]
pub struct ItemRequestRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl ItemRequestRepository for ItemRequestRepositoryImpl {
    async fn create(&self, event: CreateRequest) -> AppResult<ItemRequest> {
        let row: RequestRow = sqlx::query_as(
            r#"
                INSERT INTO item_requests (request_id, requestor_id, description, created_at)
                VALUES ($1, $2, $3, CURRENT_TIMESTAMP)
                RETURNING request_id, description, requestor_id, created_at
            "#,
        )
        .bind(RequestId::new())
        .bind(event.requestor_id)
        .bind(&event.description)
        .fetch_one(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(row.into())
    }

    async fn find_by_id(&self, request_id: RequestId) -> AppResult<Option<ItemRequest>> {
        let row: Option<RequestRow> = sqlx::query_as(
            r#"
                SELECT request_id, description, requestor_id, created_at
                FROM item_requests
                WHERE request_id = $1
            "#,
        )
        .bind(request_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(row.map(ItemRequest::from))
    }

    async fn find_with_items_by_requestor_id(
        &self,
        requestor_id: UserId,
    ) -> AppResult<Vec<RequestWithItems>> {
        let rows: Vec<RequestItemRow> = sqlx::query_as(&format!(
            "{SELECT_REQUEST_ITEMS} WHERE r.requestor_id = $1 {ORDER_REQUEST_ITEMS}"
        ))
        .bind(requestor_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(group_rows_by_request(rows))
    }

    async fn find_with_items_by_other_requestors(
        &self,
        requestor_id: UserId,
    ) -> AppResult<Vec<RequestWithItems>> {
        // The caller's own items are excluded from the item side. The filter
        // runs on the joined rows, so a request whose items all belong to
        // the caller loses every row and drops out of the result entirely;
        // only requests that never matched an item keep their NULL row.
        let rows: Vec<RequestItemRow> = sqlx::query_as(&format!(
            r#"{SELECT_REQUEST_ITEMS}
               WHERE r.requestor_id <> $1
                 AND (i.owner_id <> $1 OR i.owner_id IS NULL)
               {ORDER_REQUEST_ITEMS}"#
        ))
        .bind(requestor_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(group_rows_by_request(rows))
    }

    async fn find_with_items_by_id(
        &self,
        request_id: RequestId,
    ) -> AppResult<Option<RequestWithItems>> {
        let rows: Vec<RequestItemRow> = sqlx::query_as(&format!(
            "{SELECT_REQUEST_ITEMS} WHERE r.request_id = $1 ORDER BY i.item_id ASC"
        ))
        .bind(request_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(group_rows_by_request(rows).into_iter().next())
    }
}

/// Folds the flat join rows into one response per request, preserving the
/// first-seen order of requests and each item's appearance order within its
/// group. A request whose item side is entirely NULL still yields a result,
/// with an empty item list.
fn group_rows_by_request(rows: Vec<RequestItemRow>) -> Vec<RequestWithItems> {
    let mut grouped: Vec<RequestWithItems> = Vec::new();
    let mut index_by_id: HashMap<RequestId, usize> = HashMap::new();

    for row in rows {
        let idx = *index_by_id.entry(row.request_id).or_insert_with(|| {
            grouped.push(RequestWithItems {
                request_id: row.request_id,
                description: row.description.clone(),
                created_at: row.created_at,
                items: Vec::new(),
            });
            grouped.len() - 1
        });

        if let (Some(item_id), Some(item_name), Some(owner_id)) =
            (row.item_id, row.item_name, row.owner_id)
        {
            grouped[idx].items.push(RequestItem {
                item_id,
                item_name,
                owner_id,
            });
        }
    }
    grouped
}
