//! Home page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::Query, http::StatusCode, response::IntoResponse};

use crate::web::notice::NoticeQuery;

/// Template for the home page.
///
/// Shows an optional success notice and an optional error banner.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub notice: Option<String>,
    pub error: Option<String>,
}

impl HomeTemplate {
    /// Home page reporting a failed write, with a 500 status.
    pub fn failure(message: String) -> impl IntoResponse {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            HomeTemplate {
                notice: None,
                error: Some(message),
            },
        )
    }
}

/// Renders the home page.
///
/// # Endpoint
///
/// `GET /?notice=show_listed|venue_deleted|artist_deleted`
pub async fn home_handler(Query(query): Query<NoticeQuery>) -> impl IntoResponse {
    HomeTemplate {
        notice: query.notice().and_then(|n| n.home_message()),
        error: None,
    }
}
