//! Error pages for HTML routes.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::error::AppError;

#[derive(Template, WebTemplate)]
#[template(path = "errors/404.html")]
pub struct NotFoundTemplate {}

#[derive(Template, WebTemplate)]
#[template(path = "errors/500.html")]
pub struct ServerErrorTemplate {}

/// Failure of an HTML handler.
///
/// `NotFound` renders the 404 page; everything else is logged and renders
/// the 500 page.
#[derive(Debug)]
pub enum WebError {
    NotFound,
    Internal(AppError),
}

impl From<AppError> for WebError {
    fn from(e: AppError) -> Self {
        match e {
            AppError::NotFound { .. } => WebError::NotFound,
            other => WebError::Internal(other),
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        match self {
            WebError::NotFound => (StatusCode::NOT_FOUND, NotFoundTemplate {}).into_response(),
            WebError::Internal(e) => {
                tracing::error!(code = e.code(), "Page failed: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, ServerErrorTemplate {}).into_response()
            }
        }
    }
}
