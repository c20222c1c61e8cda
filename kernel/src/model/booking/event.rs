use crate::model::id::{ItemId, UserId};
use chrono::{DateTime, Utc};
use derive_new::new;

#[derive(Debug, Clone, new)]
pub struct CreateBooking {
    pub item_id: ItemId,
    pub booker_id: UserId,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}
