use crate::model::{
    id::{RequestId, UserId},
    request::{event::CreateRequest, ItemRequest, RequestWithItems},
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait ItemRequestRepository: Send + Sync {
    async fn create(&self, event: CreateRequest) -> AppResult<ItemRequest>;
    async fn find_by_id(&self, request_id: RequestId) -> AppResult<Option<ItemRequest>>;

    // The three join variants. All are ordered newest request first, then
    // request id ascending on ties, with each request's items ordered by
    // item id ascending. Requests with no items are still present, with an
    // empty item list.
    async fn find_with_items_by_requestor_id(
        &self,
        requestor_id: UserId,
    ) -> AppResult<Vec<RequestWithItems>>;
    /// Requests made by everyone except `requestor_id`, with the requestor's
    /// own items excluded from the item side. A request answered only by the
    /// requestor's items is omitted altogether.
    async fn find_with_items_by_other_requestors(
        &self,
        requestor_id: UserId,
    ) -> AppResult<Vec<RequestWithItems>>;
    async fn find_with_items_by_id(
        &self,
        request_id: RequestId,
    ) -> AppResult<Option<RequestWithItems>>;
}
