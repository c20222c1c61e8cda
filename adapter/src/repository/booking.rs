use crate::database::{
    model::booking::{BookingRow, OccupancyRow},
    ConnectionPool,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use derive_new::new;
use kernel::model::{
    booking::{event::CreateBooking, Booking, BookingState, BookingStatus},
    id::{BookingId, ItemId, UserId},
};
use kernel::repository::booking::BookingRepository;
use shared::error::{AppError, AppResult};
use std::collections::HashMap;

// Shared projection for all booking reads; both query axes only differ in
// the WHERE clause appended to it.
const SELECT_BOOKING: &str = r#"
    SELECT
        b.booking_id,
        b.start_time,
        b.end_time,
        b.status,
        b.booker_id,
        i.item_id,
        i.item_name,
        i.owner_id
    FROM bookings AS b
    INNER JOIN items AS i ON b.item_id = i.item_id
"#;

#[derive(new)]
pub struct BookingRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl BookingRepository for BookingRepositoryImpl {
    async fn create(&self, event: CreateBooking) -> AppResult<BookingId> {
        let booking_id = BookingId::new();
        let res = sqlx::query(
            r#"
                INSERT INTO bookings (booking_id, item_id, booker_id, start_time, end_time, status)
                VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(booking_id)
        .bind(event.item_id)
        .bind(event.booker_id)
        .bind(event.start_time)
        .bind(event.end_time)
        .bind(BookingStatus::Waiting.as_ref())
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "no booking record has been created".into(),
            ));
        }
        Ok(booking_id)
    }

    async fn find_by_id(&self, booking_id: BookingId) -> AppResult<Option<Booking>> {
        let row: Option<BookingRow> =
            sqlx::query_as(&format!("{SELECT_BOOKING} WHERE b.booking_id = $1"))
                .bind(booking_id)
                .fetch_optional(self.db.inner_ref())
                .await
                .map_err(AppError::SpecificOperationError)?;

        row.map(Booking::try_from).transpose()
    }

    async fn update_status(&self, booking_id: BookingId, status: BookingStatus) -> AppResult<()> {
        // Plain last-writer-wins update; a booking already decided is
        // overwritten without a version check.
        let res = sqlx::query(
            r#"
                UPDATE bookings
                SET status = $2
                WHERE booking_id = $1
            "#,
        )
        .bind(booking_id)
        .bind(status.as_ref())
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound(format!(
                "booking {booking_id} not found"
            )));
        }
        Ok(())
    }

    async fn find_by_booker_id(
        &self,
        booker_id: UserId,
        state: BookingState,
        now: DateTime<Utc>,
    ) -> AppResult<Vec<Booking>> {
        let rows: Vec<BookingRow> =
            sqlx::query_as(&format!("{SELECT_BOOKING} WHERE b.booker_id = $1"))
                .bind(booker_id)
                .fetch_all(self.db.inner_ref())
                .await
                .map_err(AppError::SpecificOperationError)?;

        let bookings = rows
            .into_iter()
            .map(Booking::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(state.apply(bookings, now))
    }

    async fn find_by_owner_id(
        &self,
        owner_id: UserId,
        state: BookingState,
        now: DateTime<Utc>,
    ) -> AppResult<Vec<Booking>> {
        let rows: Vec<BookingRow> =
            sqlx::query_as(&format!("{SELECT_BOOKING} WHERE i.owner_id = $1"))
                .bind(owner_id)
                .fetch_all(self.db.inner_ref())
                .await
                .map_err(AppError::SpecificOperationError)?;

        let bookings = rows
            .into_iter()
            .map(Booking::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(state.apply(bookings, now))
    }

    async fn find_by_booker_id_and_item_id(
        &self,
        booker_id: UserId,
        item_id: ItemId,
    ) -> AppResult<Option<Booking>> {
        let row: Option<BookingRow> = sqlx::query_as(&format!(
            "{SELECT_BOOKING} WHERE b.booker_id = $1 AND b.item_id = $2 LIMIT 1"
        ))
        .bind(booker_id)
        .bind(item_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        row.map(Booking::try_from).transpose()
    }

    async fn find_last_booking_starts(
        &self,
        item_ids: &[ItemId],
        now: DateTime<Utc>,
    ) -> AppResult<HashMap<ItemId, DateTime<Utc>>> {
        if item_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows: Vec<OccupancyRow> = sqlx::query_as(
            r#"
                SELECT b.item_id, MAX(b.start_time) AS start_time
                FROM bookings AS b
                WHERE b.item_id = ANY($1)
                  AND b.start_time <= $2
                  AND $2 <= b.end_time
                GROUP BY b.item_id
            "#,
        )
        .bind(item_ids.to_vec())
        .bind(now)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(|r| (r.item_id, r.start_time)).collect())
    }

    async fn find_next_booking_starts(
        &self,
        item_ids: &[ItemId],
        now: DateTime<Utc>,
    ) -> AppResult<HashMap<ItemId, DateTime<Utc>>> {
        if item_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows: Vec<OccupancyRow> = sqlx::query_as(
            r#"
                SELECT b.item_id, MIN(b.start_time) AS start_time
                FROM bookings AS b
                WHERE b.item_id = ANY($1)
                  AND b.start_time > $2
                GROUP BY b.item_id
            "#,
        )
        .bind(item_ids.to_vec())
        .bind(now)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(|r| (r.item_id, r.start_time)).collect())
    }
}
