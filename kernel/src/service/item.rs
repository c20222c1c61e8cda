use crate::clock::Clock;
use crate::model::{
    comment::Comment,
    id::{ItemId, UserId},
    item::Item,
};
use crate::repository::{
    booking::BookingRepository, comment::CommentRepository, item::ItemRepository,
};
use chrono::{DateTime, Utc};
use derive_new::new;
use shared::error::{AppError, AppResult};
use std::sync::Arc;

/// An item joined with its occupancy timestamps and comments. `last_booking`
/// is the start of the booking currently in progress, `next_booking` the
/// start of the nearest upcoming one; both are `None` when no booking
/// qualifies.
#[derive(Debug)]
pub struct ItemView {
    pub item: Item,
    pub last_booking: Option<DateTime<Utc>>,
    pub next_booking: Option<DateTime<Utc>>,
    pub comments: Vec<Comment>,
}

/// Assembles the annotated item views. Occupancy is part of the view for
/// every caller; visibility is not restricted to the item's owner.
#[derive(new)]
pub struct ItemService {
    items: Arc<dyn ItemRepository>,
    bookings: Arc<dyn BookingRepository>,
    comments: Arc<dyn CommentRepository>,
    clock: Arc<dyn Clock>,
}

impl ItemService {
    pub async fn get_item_view(&self, item_id: ItemId) -> AppResult<ItemView> {
        let item = self
            .items
            .find_by_id(item_id)
            .await?
            .ok_or_else(|| AppError::EntityNotFound(format!("item {item_id} not found")))?;
        let comments = self.comments.find_by_item_id(item_id).await?;

        let now = self.clock.now();
        let ids = [item_id];
        let last = self.bookings.find_last_booking_starts(&ids, now).await?;
        let next = self.bookings.find_next_booking_starts(&ids, now).await?;

        Ok(ItemView {
            item,
            last_booking: last.get(&item_id).copied(),
            next_booking: next.get(&item_id).copied(),
            comments,
        })
    }

    /// All of `owner_id`'s items. The occupancy and comment lookups are bulk
    /// queries over the whole id set, not one round trip per item.
    pub async fn get_owned_item_views(&self, owner_id: UserId) -> AppResult<Vec<ItemView>> {
        let items = self.items.find_by_owner_id(owner_id).await?;
        let ids: Vec<ItemId> = items.iter().map(|i| i.item_id).collect();
        let now = self.clock.now();

        let last = self.bookings.find_last_booking_starts(&ids, now).await?;
        let next = self.bookings.find_next_booking_starts(&ids, now).await?;
        let mut comments = self.comments.find_by_item_ids(&ids).await?;

        Ok(items
            .into_iter()
            .map(|item| {
                let item_id = item.item_id;
                ItemView {
                    item,
                    last_booking: last.get(&item_id).copied(),
                    next_booking: next.get(&item_id).copied(),
                    comments: comments.remove(&item_id).unwrap_or_default(),
                }
            })
            .collect())
    }
}
