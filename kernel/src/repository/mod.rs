pub mod booking;
pub mod comment;
pub mod health;
pub mod item;
pub mod request;
pub mod user;
