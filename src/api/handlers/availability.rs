//! Handler for artist availability endpoint.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::availability::AvailabilityResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns an artist's weekly availability and its summary phrase.
///
/// # Endpoint
///
/// `GET /api/artists/{id}/availability`
///
/// # Errors
///
/// Returns 404 if the artist does not exist.
pub async fn availability_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<AvailabilityResponse>, AppError> {
    let artist = state.booking_service.get_artist(id).await?;

    Ok(Json(AvailabilityResponse {
        artist_id: artist.id,
        summary: artist.availability_summary(),
        days: artist.availability.into(),
        name: artist.name,
    }))
}
