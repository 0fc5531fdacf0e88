//! HTTP request handlers for API endpoints.

pub mod availability;
pub mod health;
pub mod shows;

pub use availability::availability_handler;
pub use health::health_handler;
pub use shows::{check_show_handler, create_show_handler, show_list_handler};
