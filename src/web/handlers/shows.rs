//! Show listing and booking handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};

use crate::error::AppError;
use crate::state::AppState;
use crate::web::error::WebError;
use crate::web::forms::{Choice, FieldError, FormData, ShowForm};
use crate::web::handlers::HomeTemplate;
use crate::web::notice::Notice;
use crate::web::views::ShowView;

/// All shows.
#[derive(Template, WebTemplate)]
#[template(path = "shows.html")]
pub struct ShowsTemplate {
    pub shows: Vec<ShowView>,
}

/// Booking form.
///
/// `error` carries the booking rejection (past date, double booking,
/// unavailable day) above the field errors.
#[derive(Template, WebTemplate)]
#[template(path = "forms/new_show.html")]
pub struct NewShowTemplate {
    pub form: ShowForm,
    pub artists: Vec<Choice>,
    pub venues: Vec<Choice>,
    pub errors: Vec<FieldError>,
    pub error: Option<String>,
}

/// Artists seeking venues and venues seeking talent.
async fn booking_choices(state: &AppState) -> Result<(Vec<Choice>, Vec<Choice>), AppError> {
    let artists = state
        .artist_service
        .list_seeking_artists()
        .await?
        .into_iter()
        .map(|a| Choice::new(a.id.to_string(), a.name, false))
        .collect();

    let venues = state
        .venue_service
        .list_seeking_venues()
        .await?
        .into_iter()
        .map(|v| Choice::new(v.id.to_string(), v.name, false))
        .collect();

    Ok((artists, venues))
}

/// `GET /shows`
pub async fn shows_handler(State(state): State<AppState>) -> Result<ShowsTemplate, WebError> {
    let shows = state.booking_service.list_shows().await?;
    Ok(ShowsTemplate {
        shows: shows.iter().map(ShowView::medium).collect(),
    })
}

/// `GET /shows/create`
pub async fn create_show_form_handler(
    State(state): State<AppState>,
) -> Result<NewShowTemplate, WebError> {
    let (artists, venues) = booking_choices(&state).await?;

    Ok(NewShowTemplate {
        form: ShowForm::new(state.booking_service.now()),
        artists,
        venues,
        errors: Vec::new(),
        error: None,
    })
}

/// `POST /shows/create`
///
/// Redirects home on success. Invalid input and booking rejections
/// re-render the form; store failures render the home page with an error.
pub async fn create_show_handler(
    State(state): State<AppState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<Response, WebError> {
    let form = ShowForm::from_data(&FormData::new(pairs));
    let (artists, venues) = booking_choices(&state).await?;

    let request = match form.parse(&artists, &venues) {
        Ok(request) => request,
        Err(errors) => {
            return Ok(render_form(
                StatusCode::UNPROCESSABLE_ENTITY,
                form,
                artists,
                venues,
                errors,
                None,
            ));
        }
    };

    match state
        .booking_service
        .book_show(request.artist_id, request.venue_id, request.start_time)
        .await
    {
        Ok(_) => {
            let location = format!("/?notice={}", Notice::ShowListed.as_str());
            Ok(Redirect::to(&location).into_response())
        }
        Err(e @ AppError::Internal { .. }) => {
            tracing::error!("Failed to list show: {}", e);
            Ok(HomeTemplate::failure(
                "Oops! Something wrong happened, your show could not be listed!".to_string(),
            )
            .into_response())
        }
        Err(e) => Ok(render_form(
            e.status(),
            form,
            artists,
            venues,
            Vec::new(),
            Some(e.message().to_string()),
        )),
    }
}

fn render_form(
    status: StatusCode,
    form: ShowForm,
    artists: Vec<Choice>,
    venues: Vec<Choice>,
    errors: Vec<FieldError>,
    error: Option<String>,
) -> Response {
    let artists = form.mark(artists, "artist_id");
    let venues = form.mark(venues, "venue_id");

    (
        status,
        NewShowTemplate {
            form,
            artists,
            venues,
            errors,
            error,
        },
    )
        .into_response()
}
