use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use garde::Validate;
use kernel::model::id::RequestId;
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::{
    extractor::ActingUser,
    model::request::{CreateRequestRequest, RequestResponse, RequestsResponse},
};

pub async fn register_request(
    user: ActingUser,
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateRequestRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate()?;
    registry
        .eligibility_validator()
        .validate_user_exists(user.id())
        .await?;

    let request = registry
        .request_repository()
        .create(req.into_event(user.id()))
        .await?;
    Ok((StatusCode::CREATED, Json(RequestResponse::from(request))))
}

pub async fn show_own_requests(
    user: ActingUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<RequestsResponse>> {
    registry
        .eligibility_validator()
        .validate_user_exists(user.id())
        .await?;

    registry
        .request_repository()
        .find_with_items_by_requestor_id(user.id())
        .await
        .map(RequestsResponse::from)
        .map(Json)
}

pub async fn show_other_requests(
    user: ActingUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<RequestsResponse>> {
    registry
        .eligibility_validator()
        .validate_user_exists(user.id())
        .await?;

    registry
        .request_repository()
        .find_with_items_by_other_requestors(user.id())
        .await
        .map(RequestsResponse::from)
        .map(Json)
}

pub async fn show_request(
    user: ActingUser,
    Path(request_id): Path<RequestId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<RequestResponse>> {
    registry
        .eligibility_validator()
        .validate_user_exists(user.id())
        .await?;

    registry
        .request_repository()
        .find_with_items_by_id(request_id)
        .await?
        .ok_or_else(|| AppError::EntityNotFound(format!("request {request_id} not found")))
        .map(RequestResponse::from)
        .map(Json)
}
