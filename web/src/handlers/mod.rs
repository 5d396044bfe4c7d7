//! HTTP request handlers.

pub mod health;
pub mod webinars;

pub use health::health_check;
pub use webinars::{ChangeSeatsRequest, ChangeSeatsResponse, SeatsInput, change_seats};
