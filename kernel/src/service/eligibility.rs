use crate::clock::Clock;
use crate::model::{
    booking::{event::CreateBooking, BookingStatus},
    id::{BookingId, ItemId, UserId},
};
use crate::repository::{booking::BookingRepository, item::ItemRepository, user::UserRepository};
use derive_new::new;
use shared::error::{AppError, AppResult};
use std::sync::Arc;

/// Cross-entity rule engine: each check either passes silently or fails with
/// the specific error kind the caller must surface. Handlers invoke the
/// relevant check before the lifecycle operation it guards.
#[derive(new)]
pub struct EligibilityValidator {
    users: Arc<dyn UserRepository>,
    items: Arc<dyn ItemRepository>,
    bookings: Arc<dyn BookingRepository>,
    clock: Arc<dyn Clock>,
}

impl EligibilityValidator {
    /// Bare acting-user check for endpoints with no further rule: the id
    /// from the header must belong to a known user.
    pub async fn validate_user_exists(&self, user_id: UserId) -> AppResult<()> {
        self.existing_user(user_id).await.map(|_| ())
    }

    /// Booker and item must exist, the interval must be non-empty, the
    /// booker must not own the item, and the item must be flagged available.
    /// Availability is advisory at creation time only; overlapping bookings
    /// are not rejected.
    pub async fn validate_booking_creation(&self, event: &CreateBooking) -> AppResult<()> {
        self.existing_user(event.booker_id).await?;
        let item = self.existing_item(event.item_id).await?;

        if event.end_time <= event.start_time {
            return Err(AppError::UnprocessableEntity(format!(
                "booking end {} must be after start {}",
                event.end_time, event.start_time
            )));
        }
        if event.booker_id == item.owner_id {
            return Err(AppError::UnprocessableEntity(
                "an owner cannot book their own item".into(),
            ));
        }
        if !item.available {
            return Err(AppError::UnprocessableEntity(format!(
                "item {} is not available for booking",
                event.item_id
            )));
        }
        Ok(())
    }

    /// Only the owner of the booked item may decide a booking.
    pub async fn validate_status_update(
        &self,
        booking_id: BookingId,
        owner_id: UserId,
    ) -> AppResult<()> {
        self.existing_user(owner_id).await?;
        let booking = self
            .bookings
            .find_by_id(booking_id)
            .await?
            .ok_or_else(|| AppError::EntityNotFound(format!("booking {booking_id} not found")))?;

        if booking.item.owner_id != owner_id {
            return Err(AppError::UnprocessableEntity(format!(
                "user {owner_id} is not the owner of the booked item"
            )));
        }
        Ok(())
    }

    /// A booking's details are visible to its booker and the item's owner
    /// only.
    pub async fn validate_get_booking_by_id(
        &self,
        booking_id: BookingId,
        user_id: UserId,
    ) -> AppResult<()> {
        self.existing_user(user_id).await?;
        let booking = self
            .bookings
            .find_by_id(booking_id)
            .await?
            .ok_or_else(|| AppError::EntityNotFound(format!("booking {booking_id} not found")))?;

        if booking.booker_id != user_id && booking.item.owner_id != user_id {
            return Err(AppError::UnprocessableEntity(format!(
                "user {user_id} is neither the booker nor the item owner"
            )));
        }
        Ok(())
    }

    /// Distinguishes "owner with no bookings" from "not an owner at all"; the
    /// latter is reported as not found.
    pub async fn validate_owner_has_items(&self, owner_id: UserId) -> AppResult<()> {
        self.existing_user(owner_id).await?;
        if !self.items.exists_by_owner_id(owner_id).await? {
            return Err(AppError::EntityNotFound(format!(
                "user {owner_id} owns no items"
            )));
        }
        Ok(())
    }

    /// Commenting requires an approved booking by the author on the item,
    /// and is blocked only while that booking is strictly in progress.
    /// Bookings not yet started and bookings already finished both pass.
    pub async fn validate_comment_eligibility(
        &self,
        author_id: UserId,
        item_id: ItemId,
    ) -> AppResult<()> {
        self.existing_user(author_id).await?;
        let item = self.existing_item(item_id).await?;

        if author_id == item.owner_id {
            return Err(AppError::UnprocessableEntity(
                "an owner cannot comment on their own item".into(),
            ));
        }

        let booking = self
            .bookings
            .find_by_booker_id_and_item_id(author_id, item_id)
            .await?
            .ok_or_else(|| {
                AppError::UnprocessableEntity(format!(
                    "user {author_id} has never booked item {item_id}"
                ))
            })?;

        if booking.status != BookingStatus::Approved {
            return Err(AppError::UnprocessableEntity(
                "comments are allowed on approved bookings only".into(),
            ));
        }

        let now = self.clock.now();
        if now > booking.start_time && now < booking.end_time {
            return Err(AppError::UnprocessableEntity(
                "comments are not allowed while the booking is in progress".into(),
            ));
        }
        Ok(())
    }

    /// Only the item's owner may patch it.
    pub async fn validate_item_update(&self, user_id: UserId, item_id: ItemId) -> AppResult<()> {
        self.existing_user(user_id).await?;
        let item = self.existing_item(item_id).await?;
        if item.owner_id != user_id {
            return Err(AppError::UnprocessableEntity(format!(
                "user {user_id} is not the owner of item {item_id}"
            )));
        }
        Ok(())
    }

    async fn existing_user(&self, user_id: UserId) -> AppResult<crate::model::user::User> {
        self.users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::EntityNotFound(format!("user {user_id} not found")))
    }

    async fn existing_item(&self, item_id: ItemId) -> AppResult<crate::model::item::Item> {
        self.items
            .find_by_id(item_id)
            .await?
            .ok_or_else(|| AppError::EntityNotFound(format!("item {item_id} not found")))
    }
}
