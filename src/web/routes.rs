//! Server-rendered page routes.

use crate::state::AppState;
use crate::web::handlers::{
    artist_handler, artists_handler, create_artist_form_handler, create_artist_handler,
    create_show_form_handler, create_show_handler, create_venue_form_handler,
    create_venue_handler, delete_artist_handler, delete_artist_submit_handler,
    delete_venue_handler, delete_venue_submit_handler, edit_artist_form_handler,
    edit_artist_handler, edit_venue_form_handler, edit_venue_handler, home_handler,
    search_artists_handler, search_venues_handler, shows_handler, venue_handler, venues_handler,
};
use axum::{
    Router,
    routing::{get, post},
};

/// HTML page routes.
///
/// # Endpoints
///
/// - `GET /` - Home page
/// - `/venues`, `/venues/search`, `/venues/create`, `/venues/{id}`,
///   `/venues/{id}/edit`, `/venues/{id}/delete` - Venue pages
/// - the same set under `/artists`
/// - `GET /shows`, `/shows/create` - Show listing and booking
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home_handler))
        .route("/venues", get(venues_handler))
        .route("/venues/search", post(search_venues_handler))
        .route(
            "/venues/create",
            get(create_venue_form_handler).post(create_venue_handler),
        )
        .route(
            "/venues/{id}",
            get(venue_handler).delete(delete_venue_handler),
        )
        .route(
            "/venues/{id}/edit",
            get(edit_venue_form_handler).post(edit_venue_handler),
        )
        .route("/venues/{id}/delete", post(delete_venue_submit_handler))
        .route("/artists", get(artists_handler))
        .route("/artists/search", post(search_artists_handler))
        .route(
            "/artists/create",
            get(create_artist_form_handler).post(create_artist_handler),
        )
        .route(
            "/artists/{id}",
            get(artist_handler).delete(delete_artist_handler),
        )
        .route(
            "/artists/{id}/edit",
            get(edit_artist_form_handler).post(edit_artist_handler),
        )
        .route("/artists/{id}/delete", post(delete_artist_submit_handler))
        .route("/shows", get(shows_handler))
        .route(
            "/shows/create",
            get(create_show_form_handler).post(create_show_handler),
        )
}
