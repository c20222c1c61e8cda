use crate::model::{
    booking::{event::CreateBooking, Booking, BookingState, BookingStatus},
    id::{BookingId, ItemId, UserId},
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use shared::error::AppResult;
use std::collections::HashMap;

#[async_trait]
pub trait BookingRepository: Send + Sync {
    // Inserts the booking with status WAITING and returns the new id.
    async fn create(&self, event: CreateBooking) -> AppResult<BookingId>;
    async fn find_by_id(&self, booking_id: BookingId) -> AppResult<Option<Booking>>;
    // In-place status mutation. No row is inserted and no terminal-state
    // guard is applied; concurrent updates are last-writer-wins.
    async fn update_status(&self, booking_id: BookingId, status: BookingStatus) -> AppResult<()>;

    /// Bookings placed by `booker_id`, filtered and ordered per
    /// [`BookingState::apply`] against the supplied instant.
    async fn find_by_booker_id(
        &self,
        booker_id: UserId,
        state: BookingState,
        now: DateTime<Utc>,
    ) -> AppResult<Vec<Booking>>;

    /// Bookings on items owned by `owner_id`, same filter/order contract as
    /// the booker axis.
    async fn find_by_owner_id(
        &self,
        owner_id: UserId,
        state: BookingState,
        now: DateTime<Utc>,
    ) -> AppResult<Vec<Booking>>;

    // Used by the comment eligibility check.
    async fn find_by_booker_id_and_item_id(
        &self,
        booker_id: UserId,
        item_id: ItemId,
    ) -> AppResult<Option<Booking>>;

    /// Per item, the start of the booking whose [start, end] interval
    /// contains `now` (currently active occupancy). Items with no such
    /// booking are absent from the map.
    async fn find_last_booking_starts(
        &self,
        item_ids: &[ItemId],
        now: DateTime<Utc>,
    ) -> AppResult<HashMap<ItemId, DateTime<Utc>>>;

    /// Per item, the smallest booking start strictly after `now`. Items with
    /// no upcoming booking are absent from the map.
    async fn find_next_booking_starts(
        &self,
        item_ids: &[ItemId],
        now: DateTime<Utc>,
    ) -> AppResult<HashMap<ItemId, DateTime<Utc>>>;
}
