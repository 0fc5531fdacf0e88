//! HTML page handlers.

mod artists;
mod home;
mod shows;
mod venues;

pub use artists::{
    artist_handler, artists_handler, create_artist_form_handler, create_artist_handler,
    delete_artist_handler, delete_artist_submit_handler, edit_artist_form_handler,
    edit_artist_handler, search_artists_handler,
};
pub use home::{HomeTemplate, home_handler};
pub use shows::{create_show_form_handler, create_show_handler, shows_handler};
pub use venues::{
    create_venue_form_handler, create_venue_handler, delete_venue_handler,
    delete_venue_submit_handler, edit_venue_form_handler, edit_venue_handler,
    search_venues_handler, venue_handler, venues_handler,
};

use askama::Template;
use askama_web::WebTemplate;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use crate::web::error::WebError;
use crate::web::views::ProfileView;

/// Body of the search box on the listing pages.
#[derive(Debug, Default, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub search_term: String,
}

/// Search results page shared by venues and artists.
#[derive(Template, WebTemplate)]
#[template(path = "search.html")]
pub struct SearchTemplate {
    /// `"venues"` or `"artists"`, used for headings and links.
    pub section: &'static str,
    pub search_term: String,
    pub count: usize,
    pub results: Vec<ProfileView>,
}

/// Fallback for unknown paths.
pub async fn not_found_handler() -> Response {
    WebError::NotFound.into_response()
}
