use chrono::{DateTime, Utc};
use kernel::model::{
    booking::{Booking, BookingItem, BookingStatus},
    id::{BookingId, ItemId, UserId},
};
use shared::error::AppError;

// One row per booking, joined with the booked item for ownership data.
#[derive(sqlx::FromRow)]
pub struct BookingRow {
    pub booking_id: BookingId,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub status: String,
    pub booker_id: UserId,
    pub item_id: ItemId,
    pub item_name: String,
    pub owner_id: UserId,
}

impl TryFrom<BookingRow> for Booking {
    type Error = AppError;

    fn try_from(value: BookingRow) -> Result<Self, Self::Error> {
        let BookingRow {
            booking_id,
            start_time,
            end_time,
            status,
            booker_id,
            item_id,
            item_name,
            owner_id,
        } = value;
        let status: BookingStatus = status
            .parse()
            .map_err(|_| AppError::ConversionEntityError(format!("unknown booking status: {status}")))?;
        Ok(Booking {
            booking_id,
            start_time,
            end_time,
            status,
            booker_id,
            item: BookingItem {
                item_id,
                item_name,
                owner_id,
            },
        })
    }
}

// item_id -> occupancy timestamp aggregation rows
#[derive(sqlx::FromRow)]
pub struct OccupancyRow {
    pub item_id: ItemId,
    pub start_time: DateTime<Utc>,
}
