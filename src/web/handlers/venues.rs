//! Venue page handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use validator::Validate;

use crate::domain::entities::VenueArea;
use crate::state::AppState;
use crate::web::error::WebError;
use crate::web::forms::{FieldError, FormData, VenueForm, field_errors};
use crate::web::handlers::{HomeTemplate, SearchForm, SearchTemplate};
use crate::web::notice::{Notice, NoticeQuery};
use crate::web::views::{ProfileView, ShowView};

/// Venues grouped by city and state.
#[derive(Template, WebTemplate)]
#[template(path = "venues.html")]
pub struct VenuesTemplate {
    pub areas: Vec<VenueArea>,
}

/// Venue detail page.
#[derive(Template, WebTemplate)]
#[template(path = "show_venue.html")]
pub struct VenueTemplate {
    pub venue: ProfileView,
    pub past_shows: Vec<ShowView>,
    pub upcoming_shows: Vec<ShowView>,
    pub notice: Option<String>,
}

/// Create/edit venue form.
#[derive(Template, WebTemplate)]
#[template(path = "forms/venue_form.html")]
pub struct VenueFormTemplate {
    pub heading: String,
    pub action: String,
    pub form: VenueForm,
    pub errors: Vec<FieldError>,
}

impl VenueFormTemplate {
    fn create(form: VenueForm, errors: Vec<FieldError>) -> Self {
        Self {
            heading: "List a new venue".to_string(),
            action: "/venues/create".to_string(),
            form,
            errors,
        }
    }

    fn edit(id: i64, form: VenueForm, errors: Vec<FieldError>) -> Self {
        Self {
            heading: format!("Edit venue {}", form.name),
            action: format!("/venues/{}/edit", id),
            form,
            errors,
        }
    }
}

/// `GET /venues`
pub async fn venues_handler(State(state): State<AppState>) -> Result<VenuesTemplate, WebError> {
    let areas = state.venue_service.list_venue_areas().await?;
    Ok(VenuesTemplate { areas })
}

/// `POST /venues/search`
pub async fn search_venues_handler(
    State(state): State<AppState>,
    Form(search): Form<SearchForm>,
) -> Result<SearchTemplate, WebError> {
    let results = state.venue_service.search_venues(&search.search_term).await?;

    Ok(SearchTemplate {
        section: "venues",
        search_term: search.search_term,
        count: results.count,
        results: results.items.iter().map(ProfileView::from).collect(),
    })
}

/// `GET /venues/{id}`
pub async fn venue_handler(
    Path(id): Path<i64>,
    Query(query): Query<NoticeQuery>,
    State(state): State<AppState>,
) -> Result<VenueTemplate, WebError> {
    let profile = state.venue_service.get_venue_profile(id).await?;

    Ok(VenueTemplate {
        notice: query
            .notice()
            .and_then(|n| n.detail_message("Venue", &profile.venue.name)),
        venue: ProfileView::from(&profile.venue),
        past_shows: profile.shows.past.iter().map(ShowView::full).collect(),
        upcoming_shows: profile.shows.upcoming.iter().map(ShowView::full).collect(),
    })
}

/// `GET /venues/create`
pub async fn create_venue_form_handler() -> VenueFormTemplate {
    VenueFormTemplate::create(VenueForm::default(), Vec::new())
}

/// `POST /venues/create`
///
/// Re-renders the form with 422 on invalid input; redirects to the new
/// venue on success.
pub async fn create_venue_handler(
    State(state): State<AppState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Response {
    let form = VenueForm::from_data(&FormData::new(pairs));

    if let Err(e) = form.validate() {
        let errors = field_errors(&e);
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            VenueFormTemplate::create(form, errors),
        )
            .into_response();
    }

    match state.venue_service.create_venue(form.to_new_venue()).await {
        Ok(venue) => Redirect::to(&format!(
            "/venues/{}?notice={}",
            venue.id,
            Notice::Listed.as_str()
        ))
        .into_response(),
        Err(e) => {
            tracing::error!(venue = %form.name, "Failed to list venue: {}", e);
            HomeTemplate::failure(format!(
                "Oops! Something wrong happened, venue {} could not be listed!",
                form.name
            ))
            .into_response()
        }
    }
}

/// `GET /venues/{id}/edit`
pub async fn edit_venue_form_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<VenueFormTemplate, WebError> {
    let venue = state.venue_service.get_venue(id).await?;
    Ok(VenueFormTemplate::edit(id, VenueForm::from_venue(&venue), Vec::new()))
}

/// `POST /venues/{id}/edit`
pub async fn edit_venue_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<Response, WebError> {
    let form = VenueForm::from_data(&FormData::new(pairs));

    if let Err(e) = form.validate() {
        let errors = field_errors(&e);
        return Ok((
            StatusCode::UNPROCESSABLE_ENTITY,
            VenueFormTemplate::edit(id, form, errors),
        )
            .into_response());
    }

    state
        .venue_service
        .update_venue(id, form.to_new_venue())
        .await?;

    Ok(Redirect::to(&format!("/venues/{}?notice={}", id, Notice::Edited.as_str())).into_response())
}

/// `DELETE /venues/{id}`
///
/// Shows of the venue are removed with it.
pub async fn delete_venue_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, WebError> {
    state.venue_service.delete_venue(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `POST /venues/{id}/delete`
pub async fn delete_venue_submit_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Redirect, WebError> {
    state.venue_service.delete_venue(id).await?;
    Ok(Redirect::to(&format!(
        "/?notice={}",
        Notice::VenueDeleted.as_str()
    )))
}
