use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use garde::Validate;
use kernel::model::id::BookingId;
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::{
    extractor::ActingUser,
    model::booking::{
        ApproveQuery, BookingListQuery, BookingResponse, BookingsResponse, CreateBookingRequest,
    },
};

pub async fn register_booking(
    user: ActingUser,
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateBookingRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate()?;

    let event = req.into_event(user.id());
    registry
        .eligibility_validator()
        .validate_booking_creation(&event)
        .await?;

    let booking = registry.booking_service().add_booking(event).await?;
    Ok((StatusCode::CREATED, Json(BookingResponse::from(booking))))
}

pub async fn update_booking_status(
    user: ActingUser,
    Path(booking_id): Path<BookingId>,
    Query(query): Query<ApproveQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<BookingResponse>> {
    registry
        .eligibility_validator()
        .validate_status_update(booking_id, user.id())
        .await?;

    registry
        .booking_service()
        .update_booking_status(booking_id, query.approved)
        .await
        .map(BookingResponse::from)
        .map(Json)
}

pub async fn show_booking(
    user: ActingUser,
    Path(booking_id): Path<BookingId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<BookingResponse>> {
    registry
        .eligibility_validator()
        .validate_get_booking_by_id(booking_id, user.id())
        .await?;

    registry
        .booking_service()
        .get_booking_by_id(booking_id)
        .await
        .map(BookingResponse::from)
        .map(Json)
}

pub async fn show_bookings_by_booker(
    user: ActingUser,
    Query(query): Query<BookingListQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<BookingsResponse>> {
    registry
        .eligibility_validator()
        .validate_user_exists(user.id())
        .await?;

    registry
        .booking_service()
        .get_bookings_by_booker_id(user.id(), query.state)
        .await
        .map(BookingsResponse::from)
        .map(Json)
}

pub async fn show_bookings_by_owner(
    user: ActingUser,
    Query(query): Query<BookingListQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<BookingsResponse>> {
    registry
        .eligibility_validator()
        .validate_owner_has_items(user.id())
        .await?;

    registry
        .booking_service()
        .get_bookings_by_owner_items(user.id(), query.state)
        .await
        .map(BookingsResponse::from)
        .map(Json)
}
