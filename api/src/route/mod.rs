mod booking;
mod health;
mod item;
mod request;
mod user;

use axum::Router;
use registry::AppRegistry;

use booking::build_booking_routers;
use health::build_health_check_routers;
use item::build_item_routers;
use request::build_request_routers;
use user::build_user_routers;

pub fn routes() -> Router<AppRegistry> {
    Router::new()
        .merge(build_health_check_routers())
        .merge(build_user_routers())
        .merge(build_item_routers())
        .merge(build_booking_routers())
        .merge(build_request_routers())
}
