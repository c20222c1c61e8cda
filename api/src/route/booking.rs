use axum::{
    routing::{get, patch, post},
    Router,
};
use registry::AppRegistry;

use crate::handler::booking::{
    register_booking, show_booking, show_bookings_by_booker, show_bookings_by_owner,
    update_booking_status,
};

pub fn build_booking_routers() -> Router<AppRegistry> {
    let bookings_routers = Router::new()
        .route("/", post(register_booking))
        .route("/", get(show_bookings_by_booker))
        .route("/owner", get(show_bookings_by_owner))
        .route("/:booking_id", get(show_booking))
        .route("/:booking_id", patch(update_booking_status));

    Router::new().nest("/bookings", bookings_routers)
}
