//! Artist page handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use validator::Validate;

use crate::state::AppState;
use crate::web::error::WebError;
use crate::web::forms::{ArtistForm, FieldError, FormData, field_errors};
use crate::web::handlers::{HomeTemplate, SearchForm, SearchTemplate};
use crate::web::notice::{Notice, NoticeQuery};
use crate::web::views::{ProfileView, ShowView};

/// Artists ordered by name.
#[derive(Template, WebTemplate)]
#[template(path = "artists.html")]
pub struct ArtistsTemplate {
    pub artists: Vec<ProfileView>,
}

/// Artist detail page.
#[derive(Template, WebTemplate)]
#[template(path = "show_artist.html")]
pub struct ArtistTemplate {
    pub artist: ProfileView,
    pub availability: String,
    pub past_shows: Vec<ShowView>,
    pub upcoming_shows: Vec<ShowView>,
    pub notice: Option<String>,
}

/// Create/edit artist form, availability included.
#[derive(Template, WebTemplate)]
#[template(path = "forms/artist_form.html")]
pub struct ArtistFormTemplate {
    pub heading: String,
    pub action: String,
    pub form: ArtistForm,
    pub errors: Vec<FieldError>,
}

impl ArtistFormTemplate {
    fn create(form: ArtistForm, errors: Vec<FieldError>) -> Self {
        Self {
            heading: "List a new artist".to_string(),
            action: "/artists/create".to_string(),
            form,
            errors,
        }
    }

    fn edit(id: i64, form: ArtistForm, errors: Vec<FieldError>) -> Self {
        Self {
            heading: format!("Edit artist {}", form.name),
            action: format!("/artists/{}/edit", id),
            form,
            errors,
        }
    }
}

/// `GET /artists`
pub async fn artists_handler(State(state): State<AppState>) -> Result<ArtistsTemplate, WebError> {
    let artists = state.artist_service.list_artists().await?;
    Ok(ArtistsTemplate {
        artists: artists.iter().map(ProfileView::from).collect(),
    })
}

/// `POST /artists/search`
pub async fn search_artists_handler(
    State(state): State<AppState>,
    Form(search): Form<SearchForm>,
) -> Result<SearchTemplate, WebError> {
    let results = state
        .artist_service
        .search_artists(&search.search_term)
        .await?;

    Ok(SearchTemplate {
        section: "artists",
        search_term: search.search_term,
        count: results.count,
        results: results.items.iter().map(ProfileView::from).collect(),
    })
}

/// `GET /artists/{id}`
pub async fn artist_handler(
    Path(id): Path<i64>,
    Query(query): Query<NoticeQuery>,
    State(state): State<AppState>,
) -> Result<ArtistTemplate, WebError> {
    let profile = state.artist_service.get_artist_profile(id).await?;

    Ok(ArtistTemplate {
        notice: query
            .notice()
            .and_then(|n| n.detail_message("Artist", &profile.artist.name)),
        artist: ProfileView::from(&profile.artist),
        availability: profile.artist.availability_sentence(),
        past_shows: profile.shows.past.iter().map(ShowView::full).collect(),
        upcoming_shows: profile.shows.upcoming.iter().map(ShowView::full).collect(),
    })
}

/// `GET /artists/create`
///
/// Every availability day starts checked.
pub async fn create_artist_form_handler() -> ArtistFormTemplate {
    ArtistFormTemplate::create(ArtistForm::default(), Vec::new())
}

/// `POST /artists/create`
pub async fn create_artist_handler(
    State(state): State<AppState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Response {
    let form = ArtistForm::from_data(&FormData::new(pairs));

    if let Err(e) = form.validate() {
        let errors = field_errors(&e);
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            ArtistFormTemplate::create(form, errors),
        )
            .into_response();
    }

    match state.artist_service.create_artist(form.to_new_artist()).await {
        Ok(artist) => Redirect::to(&format!(
            "/artists/{}?notice={}",
            artist.id,
            Notice::Listed.as_str()
        ))
        .into_response(),
        Err(e) => {
            tracing::error!(artist = %form.name, "Failed to list artist: {}", e);
            HomeTemplate::failure(format!(
                "Oops! Something wrong happened, artist {} could not be listed!",
                form.name
            ))
            .into_response()
        }
    }
}

/// `GET /artists/{id}/edit`
pub async fn edit_artist_form_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<ArtistFormTemplate, WebError> {
    let artist = state.artist_service.get_artist(id).await?;
    Ok(ArtistFormTemplate::edit(
        id,
        ArtistForm::from_artist(&artist),
        Vec::new(),
    ))
}

/// `POST /artists/{id}/edit`
pub async fn edit_artist_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<Response, WebError> {
    let form = ArtistForm::from_data(&FormData::new(pairs));

    if let Err(e) = form.validate() {
        let errors = field_errors(&e);
        return Ok((
            StatusCode::UNPROCESSABLE_ENTITY,
            ArtistFormTemplate::edit(id, form, errors),
        )
            .into_response());
    }

    state
        .artist_service
        .update_artist(id, form.to_new_artist())
        .await?;

    Ok(Redirect::to(&format!("/artists/{}?notice={}", id, Notice::Edited.as_str())).into_response())
}

/// `DELETE /artists/{id}`
pub async fn delete_artist_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, WebError> {
    state.artist_service.delete_artist(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `POST /artists/{id}/delete`
pub async fn delete_artist_submit_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Redirect, WebError> {
    state.artist_service.delete_artist(id).await?;
    Ok(Redirect::to(&format!(
        "/?notice={}",
        Notice::ArtistDeleted.as_str()
    )))
}
