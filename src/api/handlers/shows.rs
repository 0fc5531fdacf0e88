//! Handlers for show endpoints.

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::show::{
    CheckShowResponse, ShowItem, ShowListItem, ShowListResponse, ShowRequest,
};
use crate::error::AppError;
use crate::state::AppState;

/// Lists every show with artist and venue names.
///
/// # Endpoint
///
/// `GET /api/shows`
pub async fn show_list_handler(
    State(state): State<AppState>,
) -> Result<Json<ShowListResponse>, AppError> {
    let shows = state.booking_service.list_shows().await?;

    Ok(Json(ShowListResponse {
        items: shows.into_iter().map(ShowListItem::from).collect(),
    }))
}

/// Checks whether a show could be booked, without booking it.
///
/// # Endpoint
///
/// `POST /api/shows/check`
///
/// # Request Body
///
/// ```json
/// { "artist_id": 4, "venue_id": 1, "start_time": "2024-06-10T19:00:00" }
/// ```
///
/// # Errors
///
/// Returns 400 if the time is in the past or the artist is unavailable that day.
/// Returns 404 if the artist or venue does not exist.
/// Returns 409 if the artist already has a show that day.
pub async fn check_show_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShowRequest>,
) -> Result<Json<CheckShowResponse>, AppError> {
    payload.validate()?;

    let (artist, venue) = state
        .booking_service
        .check_show(payload.artist_id, payload.venue_id, payload.start_time)
        .await?;

    Ok(Json(CheckShowResponse {
        admissible: true,
        artist_id: artist.id,
        artist_name: artist.name,
        venue_id: venue.id,
        venue_name: venue.name,
        start_time: payload.start_time,
    }))
}

/// Books a show.
///
/// # Endpoint
///
/// `POST /api/shows`
///
/// # Errors
///
/// Same as [`check_show_handler`]; additionally 409 with
/// "please try again" when a concurrent booking wins the same day.
pub async fn create_show_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShowRequest>,
) -> Result<(StatusCode, Json<ShowItem>), AppError> {
    payload.validate()?;

    let show = state
        .booking_service
        .book_show(payload.artist_id, payload.venue_id, payload.start_time)
        .await?;

    Ok((StatusCode::CREATED, Json(ShowItem::from(show))))
}
