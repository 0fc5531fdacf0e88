//! API route configuration.

use crate::api::handlers::{
    availability_handler, check_show_handler, create_show_handler, show_list_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// JSON API routes, nested under `/api`.
///
/// # Endpoints
///
/// - `GET  /shows`                     - List all shows
/// - `POST /shows`                     - Book a show
/// - `POST /shows/check`               - Check whether a show could be booked
/// - `GET  /artists/{id}/availability` - Weekly availability of an artist
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/shows", get(show_list_handler).post(create_show_handler))
        .route("/shows/check", post(check_show_handler))
        .route("/artists/{id}/availability", get(availability_handler))
}
