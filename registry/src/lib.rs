use std::sync::Arc;

use adapter::database::ConnectionPool;
use adapter::repository::{
    booking::BookingRepositoryImpl, comment::CommentRepositoryImpl,
    health::HealthCheckRepositoryImpl, item::ItemRepositoryImpl,
    request::ItemRequestRepositoryImpl, user::UserRepositoryImpl,
};
use kernel::clock::{Clock, SystemClock};
use kernel::repository::{
    booking::BookingRepository, comment::CommentRepository, health::HealthCheckRepository,
    item::ItemRepository, request::ItemRequestRepository, user::UserRepository,
};
use kernel::service::{
    booking::BookingService, eligibility::EligibilityValidator, item::ItemService,
};

#[derive(Clone)]
pub struct AppRegistry {
    health_check_repository: Arc<dyn HealthCheckRepository>,
    user_repository: Arc<dyn UserRepository>,
    item_repository: Arc<dyn ItemRepository>,
    booking_repository: Arc<dyn BookingRepository>,
    request_repository: Arc<dyn ItemRequestRepository>,
    comment_repository: Arc<dyn CommentRepository>,
    booking_service: Arc<BookingService>,
    item_service: Arc<ItemService>,
    eligibility_validator: Arc<EligibilityValidator>,
}

impl AppRegistry {
    pub fn new(pool: ConnectionPool) -> Self {
        let health_check_repository = Arc::new(HealthCheckRepositoryImpl::new(pool.clone()));
        let user_repository: Arc<dyn UserRepository> =
            Arc::new(UserRepositoryImpl::new(pool.clone()));
        let item_repository: Arc<dyn ItemRepository> =
            Arc::new(ItemRepositoryImpl::new(pool.clone()));
        let booking_repository: Arc<dyn BookingRepository> =
            Arc::new(BookingRepositoryImpl::new(pool.clone()));
        let request_repository: Arc<dyn ItemRequestRepository> =
            Arc::new(ItemRequestRepositoryImpl::new(pool.clone()));
        let comment_repository: Arc<dyn CommentRepository> =
            Arc::new(CommentRepositoryImpl::new(pool.clone()));
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);

        let booking_service = Arc::new(BookingService::new(
            booking_repository.clone(),
            user_repository.clone(),
            item_repository.clone(),
            clock.clone(),
        ));
        let item_service = Arc::new(ItemService::new(
            item_repository.clone(),
            booking_repository.clone(),
            comment_repository.clone(),
            clock.clone(),
        ));
        let eligibility_validator = Arc::new(EligibilityValidator::new(
            user_repository.clone(),
            item_repository.clone(),
            booking_repository.clone(),
            clock.clone(),
        ));

        Self {
            health_check_repository,
            user_repository,
            item_repository,
            booking_repository,
            request_repository,
            comment_repository,
            booking_service,
            item_service,
            eligibility_validator,
        }
    }

    pub fn health_check_repository(&self) -> Arc<dyn HealthCheckRepository> {
        self.health_check_repository.clone()
    }

    pub fn user_repository(&self) -> Arc<dyn UserRepository> {
        self.user_repository.clone()
    }

    pub fn item_repository(&self) -> Arc<dyn ItemRepository> {
        self.item_repository.clone()
    }

    pub fn booking_repository(&self) -> Arc<dyn BookingRepository> {
        self.booking_repository.clone()
    }

    pub fn request_repository(&self) -> Arc<dyn ItemRequestRepository> {
        self.request_repository.clone()
    }

    pub fn comment_repository(&self) -> Arc<dyn CommentRepository> {
        self.comment_repository.clone()
    }

    pub fn booking_service(&self) -> Arc<BookingService> {
        self.booking_service.clone()
    }

    pub fn item_service(&self) -> Arc<ItemService> {
        self.item_service.clone()
    }

    pub fn eligibility_validator(&self) -> Arc<EligibilityValidator> {
        self.eligibility_validator.clone()
    }
}
