//! In-memory collaborator doubles for service tests. They honor the same
//! contracts as the database-backed implementations, including the shared
//! state filter table, so service behavior can be exercised without a store.

use crate::clock::Clock;
use crate::model::{
    booking::{event::CreateBooking, Booking, BookingItem, BookingState, BookingStatus},
    comment::{event::CreateComment, Comment},
    id::{BookingId, CommentId, ItemId, UserId},
    item::{
        event::{CreateItem, UpdateItem},
        Item,
    },
    user::{
        event::{CreateUser, DeleteUser, UpdateUser},
        User,
    },
};
use crate::repository::{
    booking::BookingRepository, comment::CommentRepository, item::ItemRepository,
    user::UserRepository,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use shared::error::{AppError, AppResult};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

pub struct FixedClock {
    now: DateTime<Utc>,
}

impl FixedClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self { now }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now
    }
}

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<HashMap<UserId, User>>,
}

impl InMemoryUserRepository {
    pub fn add_user(&self, name: &str) -> UserId {
        let user_id = UserId::new();
        self.users.lock().unwrap().insert(
            user_id,
            User {
                user_id,
                user_name: name.into(),
                email: format!("{name}@example.com"),
            },
        );
        user_id
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, event: CreateUser) -> AppResult<User> {
        let mut users = self.users.lock().unwrap();
        if users.values().any(|u| u.email == event.email) {
            return Err(AppError::DuplicateEmail(event.email));
        }
        let user = User {
            user_id: UserId::new(),
            user_name: event.user_name,
            email: event.email,
        };
        users.insert(user.user_id, user.clone());
        Ok(user)
    }

    async fn update(&self, event: UpdateUser) -> AppResult<()> {
        let mut users = self.users.lock().unwrap();
        let user = users
            .get_mut(&event.user_id)
            .ok_or_else(|| AppError::EntityNotFound(format!("user {} not found", event.user_id)))?;
        if let Some(name) = event.user_name {
            user.user_name = name;
        }
        if let Some(email) = event.email {
            user.email = email;
        }
        Ok(())
    }

    async fn delete(&self, event: DeleteUser) -> AppResult<()> {
        self.users.lock().unwrap().remove(&event.user_id);
        Ok(())
    }

    async fn find_by_id(&self, user_id: UserId) -> AppResult<Option<User>> {
        Ok(self.users.lock().unwrap().get(&user_id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .values()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        Ok(self.users.lock().unwrap().values().cloned().collect())
    }
}

#[derive(Default)]
pub struct InMemoryItemRepository {
    items: Mutex<HashMap<ItemId, Item>>,
}

impl InMemoryItemRepository {
    pub fn add_item(&self, owner_id: UserId, name: &str, available: bool) -> ItemId {
        let item_id = ItemId::new();
        self.items.lock().unwrap().insert(
            item_id,
            Item {
                item_id,
                item_name: name.into(),
                description: String::new(),
                available,
                owner_id,
                request_id: None,
            },
        );
        item_id
    }

    fn get(&self, item_id: ItemId) -> Option<Item> {
        self.items.lock().unwrap().get(&item_id).cloned()
    }
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    async fn create(&self, event: CreateItem) -> AppResult<Item> {
        let item = Item {
            item_id: ItemId::new(),
            item_name: event.item_name,
            description: event.description,
            available: event.available,
            owner_id: event.owner_id,
            request_id: event.request_id,
        };
        self.items.lock().unwrap().insert(item.item_id, item.clone());
        Ok(item)
    }

    async fn update(&self, event: UpdateItem) -> AppResult<()> {
        let mut items = self.items.lock().unwrap();
        let item = items
            .get_mut(&event.item_id)
            .ok_or_else(|| AppError::EntityNotFound(format!("item {} not found", event.item_id)))?;
        if let Some(name) = event.item_name {
            item.item_name = name;
        }
        if let Some(description) = event.description {
            item.description = description;
        }
        if let Some(available) = event.available {
            item.available = available;
        }
        if let Some(request_id) = event.request_id {
            item.request_id = Some(request_id);
        }
        Ok(())
    }

    async fn find_by_id(&self, item_id: ItemId) -> AppResult<Option<Item>> {
        Ok(self.get(item_id))
    }

    async fn find_by_owner_id(&self, owner_id: UserId) -> AppResult<Vec<Item>> {
        Ok(self
            .items
            .lock()
            .unwrap()
            .values()
            .filter(|i| i.owner_id == owner_id)
            .cloned()
            .collect())
    }

    async fn exists_by_owner_id(&self, owner_id: UserId) -> AppResult<bool> {
        Ok(self
            .items
            .lock()
            .unwrap()
            .values()
            .any(|i| i.owner_id == owner_id))
    }

    async fn find_by_text(&self, text: &str) -> AppResult<Vec<Item>> {
        let needle = text.to_lowercase();
        Ok(self
            .items
            .lock()
            .unwrap()
            .values()
            .filter(|i| {
                i.available
                    && (i.item_name.to_lowercase().contains(&needle)
                        || i.description.to_lowercase().contains(&needle))
            })
            .cloned()
            .collect())
    }
}

pub struct InMemoryBookingRepository {
    bookings: Mutex<Vec<Booking>>,
    items: Arc<InMemoryItemRepository>,
}

impl InMemoryBookingRepository {
    pub fn new(items: Arc<InMemoryItemRepository>) -> Self {
        Self {
            bookings: Mutex::new(Vec::new()),
            items,
        }
    }

    pub fn add_booking(
        &self,
        item_id: ItemId,
        booker_id: UserId,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
        status: BookingStatus,
    ) -> BookingId {
        let item = self.items.get(item_id).expect("item must be registered first");
        let booking_id = BookingId::new();
        self.bookings.lock().unwrap().push(Booking {
            booking_id,
            start_time,
            end_time,
            status,
            booker_id,
            item: BookingItem {
                item_id: item.item_id,
                item_name: item.item_name,
                owner_id: item.owner_id,
            },
        });
        booking_id
    }
}

pub struct InMemoryCommentRepository {
    comments: Mutex<Vec<Comment>>,
    users: Arc<InMemoryUserRepository>,
}

impl InMemoryCommentRepository {
    pub fn new(users: Arc<InMemoryUserRepository>) -> Self {
        Self {
            comments: Mutex::new(Vec::new()),
            users,
        }
    }
}

#[async_trait]
impl CommentRepository for InMemoryCommentRepository {
    async fn create(&self, event: CreateComment) -> AppResult<Comment> {
        let author = self
            .users
            .find_by_id(event.author_id)
            .await?
            .ok_or_else(|| {
                AppError::EntityNotFound(format!("user {} not found", event.author_id))
            })?;
        let comment = Comment {
            comment_id: CommentId::new(),
            text: event.text,
            item_id: event.item_id,
            author_id: event.author_id,
            author_name: author.user_name,
            created_at: Utc::now(),
        };
        self.comments.lock().unwrap().push(comment.clone());
        Ok(comment)
    }

    async fn find_by_item_id(&self, item_id: ItemId) -> AppResult<Vec<Comment>> {
        Ok(self
            .comments
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.item_id == item_id)
            .cloned()
            .collect())
    }

    async fn find_by_item_ids(
        &self,
        item_ids: &[ItemId],
    ) -> AppResult<HashMap<ItemId, Vec<Comment>>> {
        let comments = self.comments.lock().unwrap();
        let mut grouped: HashMap<ItemId, Vec<Comment>> = HashMap::new();
        for c in comments.iter() {
            if item_ids.contains(&c.item_id) {
                grouped.entry(c.item_id).or_default().push(c.clone());
            }
        }
        Ok(grouped)
    }
}

#[async_trait]
impl BookingRepository for InMemoryBookingRepository {
    async fn create(&self, event: CreateBooking) -> AppResult<BookingId> {
        let item = self
            .items
            .get(event.item_id)
            .ok_or_else(|| AppError::EntityNotFound(format!("item {} not found", event.item_id)))?;
        let booking_id = BookingId::new();
        self.bookings.lock().unwrap().push(Booking {
            booking_id,
            start_time: event.start_time,
            end_time: event.end_time,
            status: BookingStatus::Waiting,
            booker_id: event.booker_id,
            item: BookingItem {
                item_id: item.item_id,
                item_name: item.item_name,
                owner_id: item.owner_id,
            },
        });
        Ok(booking_id)
    }

    async fn find_by_id(&self, booking_id: BookingId) -> AppResult<Option<Booking>> {
        Ok(self
            .bookings
            .lock()
            .unwrap()
            .iter()
            .find(|b| b.booking_id == booking_id)
            .cloned())
    }

    async fn update_status(&self, booking_id: BookingId, status: BookingStatus) -> AppResult<()> {
        let mut bookings = self.bookings.lock().unwrap();
        let booking = bookings
            .iter_mut()
            .find(|b| b.booking_id == booking_id)
            .ok_or_else(|| AppError::EntityNotFound(format!("booking {booking_id} not found")))?;
        booking.status = status;
        Ok(())
    }

    async fn find_by_booker_id(
        &self,
        booker_id: UserId,
        state: BookingState,
        now: DateTime<Utc>,
    ) -> AppResult<Vec<Booking>> {
        let axis: Vec<Booking> = self
            .bookings
            .lock()
            .unwrap()
            .iter()
            .filter(|b| b.booker_id == booker_id)
            .cloned()
            .collect();
        Ok(state.apply(axis, now))
    }

    async fn find_by_owner_id(
        &self,
        owner_id: UserId,
        state: BookingState,
        now: DateTime<Utc>,
    ) -> AppResult<Vec<Booking>> {
        let axis: Vec<Booking> = self
            .bookings
            .lock()
            .unwrap()
            .iter()
            .filter(|b| b.item.owner_id == owner_id)
            .cloned()
            .collect();
        Ok(state.apply(axis, now))
    }

    async fn find_by_booker_id_and_item_id(
        &self,
        booker_id: UserId,
        item_id: ItemId,
    ) -> AppResult<Option<Booking>> {
        Ok(self
            .bookings
            .lock()
            .unwrap()
            .iter()
            .find(|b| b.booker_id == booker_id && b.item.item_id == item_id)
            .cloned())
    }

    async fn find_last_booking_starts(
        &self,
        item_ids: &[ItemId],
        now: DateTime<Utc>,
    ) -> AppResult<HashMap<ItemId, DateTime<Utc>>> {
        let bookings = self.bookings.lock().unwrap();
        let mut map = HashMap::new();
        for b in bookings.iter() {
            if item_ids.contains(&b.item.item_id) && b.start_time <= now && now <= b.end_time {
                let entry = map.entry(b.item.item_id).or_insert(b.start_time);
                if b.start_time > *entry {
                    *entry = b.start_time;
                }
            }
        }
        Ok(map)
    }

    async fn find_next_booking_starts(
        &self,
        item_ids: &[ItemId],
        now: DateTime<Utc>,
    ) -> AppResult<HashMap<ItemId, DateTime<Utc>>> {
        let bookings = self.bookings.lock().unwrap();
        let mut map = HashMap::new();
        for b in bookings.iter() {
            if item_ids.contains(&b.item.item_id) && b.start_time > now {
                let entry = map.entry(b.item.item_id).or_insert(b.start_time);
                if b.start_time < *entry {
                    *entry = b.start_time;
                }
            }
        }
        Ok(map)
    }
}
