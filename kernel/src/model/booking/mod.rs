use crate::model::id::{BookingId, ItemId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

pub mod event;

#[derive(Debug, Clone)]
pub struct Booking {
    pub booking_id: BookingId,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub status: BookingStatus,
    pub booker_id: UserId,
    pub item: BookingItem,
}

#[derive(Debug, Clone)]
pub struct BookingItem {
    pub item_id: ItemId,
    pub item_name: String,
    pub owner_id: UserId,
}

/// Persisted lifecycle status. A booking is created as `Waiting` and is
/// decided exactly once by the item's owner. There is deliberately no guard
/// against re-deciding an already decided booking; concurrent decisions are
/// last-writer-wins.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    Waiting,
    Approved,
    Rejected,
}

/// Query-time classification of bookings. Never stored; the temporal
/// variants are evaluated against the clock at call time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingState {
    #[default]
    All,
    Current,
    Past,
    Future,
    Waiting,
    Rejected,
}

impl BookingState {
    /// The single predicate table shared by the booker-axis and the
    /// owner-axis query families.
    pub fn matches(self, booking: &Booking, now: DateTime<Utc>) -> bool {
        match self {
            BookingState::All => true,
            BookingState::Current => booking.start_time <= now && now <= booking.end_time,
            BookingState::Past => booking.end_time < now,
            BookingState::Future => booking.start_time > now,
            BookingState::Waiting => booking.status == BookingStatus::Waiting,
            BookingState::Rejected => booking.status == BookingStatus::Rejected,
        }
    }

    /// Filters and orders one axis' bookings. Results are sorted by start
    /// time descending, except `Future`, which lists the earliest upcoming
    /// booking first. The asymmetry is part of the API contract.
    pub fn apply(self, bookings: Vec<Booking>, now: DateTime<Utc>) -> Vec<Booking> {
        let mut selected: Vec<Booking> = bookings
            .into_iter()
            .filter(|b| self.matches(b, now))
            .collect();
        match self {
            BookingState::Future => selected.sort_by_key(|b| b.start_time),
            _ => selected.sort_by_key(|b| std::cmp::Reverse(b.start_time)),
        }
        selected
    }
}
