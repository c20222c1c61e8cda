use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use garde::Validate;
use kernel::model::id::ItemId;
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::{
    extractor::ActingUser,
    model::{
        comment::CreateCommentRequest,
        item::{
            CreateItemRequest, ItemResponse, ItemsResponse, OwnedItemResponse,
            OwnedItemsResponse, SearchItemsQuery, UpdateItemRequest,
        },
    },
};

pub async fn register_item(
    user: ActingUser,
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateItemRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate()?;
    registry
        .eligibility_validator()
        .validate_user_exists(user.id())
        .await?;
    if let Some(request_id) = req.request_id {
        registry
            .request_repository()
            .find_by_id(request_id)
            .await?
            .ok_or_else(|| {
                AppError::EntityNotFound(format!("request {request_id} not found"))
            })?;
    }

    let item = registry.item_repository().create(req.into_event(user.id())).await?;
    Ok((StatusCode::CREATED, Json(ItemResponse::from(item))))
}

pub async fn update_item(
    user: ActingUser,
    Path(item_id): Path<ItemId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<UpdateItemRequest>,
) -> AppResult<Json<ItemResponse>> {
    req.validate()?;
    registry
        .eligibility_validator()
        .validate_item_update(user.id(), item_id)
        .await?;

    registry
        .item_repository()
        .update(req.into_event(item_id))
        .await?;
    registry
        .item_repository()
        .find_by_id(item_id)
        .await?
        .ok_or_else(|| AppError::EntityNotFound(format!("item {item_id} not found")))
        .map(ItemResponse::from)
        .map(Json)
}

pub async fn show_item(
    user: ActingUser,
    Path(item_id): Path<ItemId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<OwnedItemResponse>> {
    registry
        .eligibility_validator()
        .validate_user_exists(user.id())
        .await?;

    registry
        .item_service()
        .get_item_view(item_id)
        .await
        .map(OwnedItemResponse::from)
        .map(Json)
}

pub async fn show_owned_items(
    user: ActingUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<OwnedItemsResponse>> {
    registry
        .eligibility_validator()
        .validate_user_exists(user.id())
        .await?;

    let items = registry
        .item_service()
        .get_owned_item_views(user.id())
        .await?
        .into_iter()
        .map(OwnedItemResponse::from)
        .collect();
    Ok(Json(OwnedItemsResponse { items }))
}

pub async fn search_items(
    user: ActingUser,
    Query(query): Query<SearchItemsQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ItemsResponse>> {
    registry
        .eligibility_validator()
        .validate_user_exists(user.id())
        .await?;

    registry
        .item_repository()
        .find_by_text(&query.text)
        .await
        .map(ItemsResponse::from)
        .map(Json)
}

pub async fn register_comment(
    user: ActingUser,
    Path(item_id): Path<ItemId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateCommentRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate()?;
    registry
        .eligibility_validator()
        .validate_comment_eligibility(user.id(), item_id)
        .await?;

    let comment = registry
        .comment_repository()
        .create(req.into_event(item_id, user.id()))
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(crate::model::comment::CommentResponse::from(comment)),
    ))
}
