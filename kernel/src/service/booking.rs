use crate::clock::Clock;
use crate::model::{
    booking::{event::CreateBooking, Booking, BookingState, BookingStatus},
    id::{BookingId, UserId},
};
use crate::repository::{booking::BookingRepository, item::ItemRepository, user::UserRepository};
use derive_new::new;
use shared::error::{AppError, AppResult};
use std::sync::Arc;

/// Booking lifecycle orchestration: creation, the single owner decision and
/// the state-filtered temporal queries. Policy checks (ownership, item
/// availability, participant access) live in
/// [`EligibilityValidator`](crate::service::eligibility::EligibilityValidator)
/// and are invoked by the caller alongside this service, not inside it, so
/// the lifecycle operations stay reusable for internal flows.
#[derive(new)]
pub struct BookingService {
    bookings: Arc<dyn BookingRepository>,
    users: Arc<dyn UserRepository>,
    items: Arc<dyn ItemRepository>,
    clock: Arc<dyn Clock>,
}

impl BookingService {
    /// Creates a booking in WAITING status, whatever the caller supplied.
    pub async fn add_booking(&self, event: CreateBooking) -> AppResult<Booking> {
        self.users
            .find_by_id(event.booker_id)
            .await?
            .ok_or_else(|| AppError::EntityNotFound(format!("user {} not found", event.booker_id)))?;
        self.items
            .find_by_id(event.item_id)
            .await?
            .ok_or_else(|| AppError::EntityNotFound(format!("item {} not found", event.item_id)))?;

        let booking_id = self.bookings.create(event).await?;
        self.get_booking_by_id(booking_id).await
    }

    /// Applies the owner's decision: approved sets APPROVED, otherwise
    /// REJECTED. The mutation happens in place; a booking already decided is
    /// overwritten without complaint (last writer wins).
    pub async fn update_booking_status(
        &self,
        booking_id: BookingId,
        approved: bool,
    ) -> AppResult<Booking> {
        self.bookings
            .find_by_id(booking_id)
            .await?
            .ok_or_else(|| AppError::EntityNotFound(format!("booking {booking_id} not found")))?;

        let status = if approved {
            BookingStatus::Approved
        } else {
            BookingStatus::Rejected
        };
        self.bookings.update_status(booking_id, status).await?;
        self.get_booking_by_id(booking_id).await
    }

    pub async fn get_booking_by_id(&self, booking_id: BookingId) -> AppResult<Booking> {
        self.bookings
            .find_by_id(booking_id)
            .await?
            .ok_or_else(|| AppError::EntityNotFound(format!("booking {booking_id} not found")))
    }

    pub async fn get_bookings_by_booker_id(
        &self,
        booker_id: UserId,
        state: BookingState,
    ) -> AppResult<Vec<Booking>> {
        self.bookings
            .find_by_booker_id(booker_id, state, self.clock.now())
            .await
    }

    pub async fn get_bookings_by_owner_items(
        &self,
        owner_id: UserId,
        state: BookingState,
    ) -> AppResult<Vec<Booking>> {
        self.bookings
            .find_by_owner_id(owner_id, state, self.clock.now())
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FixedClock, InMemoryBookingRepository, InMemoryItemRepository, InMemoryUserRepository};
    use chrono::{Duration, TimeZone, Utc};

    struct Fixture {
        service: BookingService,
        bookings: Arc<InMemoryBookingRepository>,
        users: Arc<InMemoryUserRepository>,
        items: Arc<InMemoryItemRepository>,
    }

    fn fixture() -> Fixture {
        let now = Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap();
        let users = Arc::new(InMemoryUserRepository::default());
        let items = Arc::new(InMemoryItemRepository::default());
        let bookings = Arc::new(InMemoryBookingRepository::new(items.clone()));
        let service = BookingService::new(
            bookings.clone(),
            users.clone(),
            items.clone(),
            Arc::new(FixedClock::new(now)),
        );
        Fixture {
            service,
            bookings,
            users,
            items,
        }
    }

    fn now() -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap()
    }

    #[tokio::test]
    async fn add_booking_starts_waiting() {
        let f = fixture();
        let owner = f.users.add_user("owner");
        let booker = f.users.add_user("booker");
        let item = f.items.add_item(owner, "drill", true);

        let booking = f
            .service
            .add_booking(CreateBooking::new(
                item,
                booker,
                now() + Duration::days(1),
                now() + Duration::days(2),
            ))
            .await
            .unwrap();

        assert_eq!(booking.status, BookingStatus::Waiting);
        assert_eq!(booking.booker_id, booker);
        assert_eq!(booking.item.item_id, item);
    }

    #[tokio::test]
    async fn add_booking_fails_for_unknown_booker_or_item() {
        let f = fixture();
        let owner = f.users.add_user("owner");
        let item = f.items.add_item(owner, "drill", true);

        let err = f
            .service
            .add_booking(CreateBooking::new(
                item,
                UserId::new(),
                now(),
                now() + Duration::hours(1),
            ))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::EntityNotFound(_)));

        let booker = f.users.add_user("booker");
        let err = f
            .service
            .add_booking(CreateBooking::new(
                crate::model::id::ItemId::new(),
                booker,
                now(),
                now() + Duration::hours(1),
            ))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::EntityNotFound(_)));
    }

    #[tokio::test]
    async fn approval_moves_booking_out_of_waiting_filter() {
        let f = fixture();
        let owner = f.users.add_user("owner");
        let booker = f.users.add_user("booker");
        let item = f.items.add_item(owner, "drill", true);

        let booking = f
            .service
            .add_booking(CreateBooking::new(
                item,
                booker,
                now() + Duration::days(1),
                now() + Duration::days(2),
            ))
            .await
            .unwrap();

        let decided = f
            .service
            .update_booking_status(booking.booking_id, true)
            .await
            .unwrap();
        assert_eq!(decided.status, BookingStatus::Approved);

        let waiting = f
            .service
            .get_bookings_by_booker_id(booker, BookingState::Waiting)
            .await
            .unwrap();
        assert!(waiting.is_empty());

        let all = f
            .service
            .get_bookings_by_booker_id(booker, BookingState::All)
            .await
            .unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].status, BookingStatus::Approved);
    }

    #[tokio::test]
    async fn update_status_on_missing_booking_is_not_found() {
        let f = fixture();
        let err = f
            .service
            .update_booking_status(BookingId::new(), true)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::EntityNotFound(_)));
    }

    #[tokio::test]
    async fn rejection_shows_under_rejected_filter() {
        let f = fixture();
        let owner = f.users.add_user("owner");
        let booker = f.users.add_user("booker");
        let item = f.items.add_item(owner, "drill", true);

        let booking = f
            .service
            .add_booking(CreateBooking::new(
                item,
                booker,
                now() + Duration::days(1),
                now() + Duration::days(2),
            ))
            .await
            .unwrap();
        f.service
            .update_booking_status(booking.booking_id, false)
            .await
            .unwrap();

        let rejected = f
            .service
            .get_bookings_by_owner_items(owner, BookingState::Rejected)
            .await
            .unwrap();
        assert_eq!(rejected.len(), 1);
        assert_eq!(rejected[0].booking_id, booking.booking_id);
    }

    #[tokio::test]
    async fn owner_axis_sees_bookings_across_bookers() {
        let f = fixture();
        let owner = f.users.add_user("owner");
        let booker_a = f.users.add_user("a");
        let booker_b = f.users.add_user("b");
        let item = f.items.add_item(owner, "drill", true);

        f.service
            .add_booking(CreateBooking::new(
                item,
                booker_a,
                now() + Duration::days(1),
                now() + Duration::days(2),
            ))
            .await
            .unwrap();
        f.service
            .add_booking(CreateBooking::new(
                item,
                booker_b,
                now() + Duration::days(3),
                now() + Duration::days(4),
            ))
            .await
            .unwrap();

        let all = f
            .service
            .get_bookings_by_owner_items(owner, BookingState::All)
            .await
            .unwrap();
        assert_eq!(all.len(), 2);
        // start descending for the ALL filter
        assert!(all[0].start_time > all[1].start_time);

        let future = f
            .service
            .get_bookings_by_owner_items(owner, BookingState::Future)
            .await
            .unwrap();
        // earliest upcoming first for the FUTURE filter
        assert!(future[0].start_time < future[1].start_time);
    }

    #[tokio::test]
    async fn bulk_occupancy_maps_skip_items_without_qualifying_bookings() {
        let f = fixture();
        let owner = f.users.add_user("owner");
        let booker = f.users.add_user("booker");
        let active_item = f.items.add_item(owner, "drill", true);
        let future_item = f.items.add_item(owner, "saw", true);

        f.service
            .add_booking(CreateBooking::new(
                active_item,
                booker,
                now() - Duration::hours(1),
                now() + Duration::hours(1),
            ))
            .await
            .unwrap();
        f.service
            .add_booking(CreateBooking::new(
                future_item,
                booker,
                now() + Duration::days(1),
                now() + Duration::days(2),
            ))
            .await
            .unwrap();

        let ids = [active_item, future_item];
        let last = f.bookings.find_last_booking_starts(&ids, now()).await.unwrap();
        let next = f.bookings.find_next_booking_starts(&ids, now()).await.unwrap();

        assert!(last.contains_key(&active_item));
        assert!(!last.contains_key(&future_item));
        assert!(next.contains_key(&future_item));
        assert!(!next.contains_key(&active_item));

        let empty = f.bookings.find_last_booking_starts(&[], now()).await.unwrap();
        assert!(empty.is_empty());
    }
}
