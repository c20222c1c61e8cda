use chrono::{DateTime, Utc};
use garde::Validate;
use kernel::model::{
    booking::{event::CreateBooking, Booking, BookingItem, BookingState, BookingStatus},
    id::{BookingId, ItemId, UserId},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    #[garde(skip)]
    pub item_id: ItemId,
    #[garde(skip)]
    pub start: DateTime<Utc>,
    #[garde(skip)]
    pub end: DateTime<Utc>,
}

impl CreateBookingRequest {
    pub fn into_event(self, booker_id: UserId) -> CreateBooking {
        CreateBooking {
            item_id: self.item_id,
            booker_id,
            start_time: self.start,
            end_time: self.end,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct BookingListQuery {
    #[serde(default)]
    pub state: BookingState,
}

#[derive(Debug, Deserialize)]
pub struct ApproveQuery {
    pub approved: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingsResponse {
    pub items: Vec<BookingResponse>,
}

impl From<Vec<Booking>> for BookingsResponse {
    fn from(value: Vec<Booking>) -> Self {
        Self {
            items: value.into_iter().map(BookingResponse::from).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    pub booking_id: BookingId,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub status: BookingStatus,
    pub booker_id: UserId,
    pub item: BookingItemResponse,
}

impl From<Booking> for BookingResponse {
    fn from(value: Booking) -> Self {
        let Booking {
            booking_id,
            start_time,
            end_time,
            status,
            booker_id,
            item,
        } = value;
        Self {
            booking_id,
            start: start_time,
            end: end_time,
            status,
            booker_id,
            item: item.into(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingItemResponse {
    pub item_id: ItemId,
    pub item_name: String,
    pub owner_id: UserId,
}

impl From<BookingItem> for BookingItemResponse {
    fn from(value: BookingItem) -> Self {
        let BookingItem {
            item_id,
            item_name,
            owner_id,
        } = value;
        Self {
            item_id,
            item_name,
            owner_id,
        }
    }
}
