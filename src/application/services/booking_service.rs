//! Show booking service.

use chrono::NaiveDateTime;
use serde_json::json;
use std::sync::Arc;

use crate::domain::entities::{Artist, NewShow, Show, ShowListing, Venue};
use crate::domain::repositories::{ArtistRepository, ShowRepository, VenueRepository};
use crate::domain::scheduling::{self, Clock};
use crate::error::AppError;

/// Service deciding whether shows may be booked and booking them.
///
/// The admissibility check runs against the artist's current shows; the
/// store's one-show-per-day index is the final arbiter when two bookings
/// race past the check.
pub struct BookingService {
    artist_repository: Arc<dyn ArtistRepository>,
    venue_repository: Arc<dyn VenueRepository>,
    show_repository: Arc<dyn ShowRepository>,
    clock: Arc<dyn Clock>,
}

impl BookingService {
    /// Creates a new booking service.
    pub fn new(
        artist_repository: Arc<dyn ArtistRepository>,
        venue_repository: Arc<dyn VenueRepository>,
        show_repository: Arc<dyn ShowRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            artist_repository,
            venue_repository,
            show_repository,
            clock,
        }
    }

    /// Current time according to the service clock.
    pub fn now(&self) -> NaiveDateTime {
        self.clock.now()
    }

    /// Lists every show with artist and venue details, ordered by start time.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_shows(&self) -> Result<Vec<ShowListing>, AppError> {
        let mut shows = self.show_repository.list_listings().await?;
        shows.sort_by_key(|s| (s.start_time, s.show_id));
        Ok(shows)
    }

    /// Checks whether a show may be booked without booking it.
    ///
    /// Returns the resolved artist and venue.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the artist or venue does not exist.
    /// Returns [`AppError::Validation`] if the start time is in the past or
    /// the artist is unavailable that weekday.
    /// Returns [`AppError::Conflict`] if the artist already plays that day.
    pub async fn check_show(
        &self,
        artist_id: i64,
        venue_id: i64,
        start_time: NaiveDateTime,
    ) -> Result<(Artist, Venue), AppError> {
        let artist = self.get_artist(artist_id).await?;

        let venue = self
            .venue_repository
            .find_by_id(venue_id)
            .await?
            .ok_or_else(|| AppError::not_found("Venue not found", json!({ "id": venue_id })))?;

        let existing = self.show_repository.list_by_artist(artist_id).await?;

        if let Err(e) = scheduling::validate(&artist, start_time, &existing, self.clock.now()) {
            tracing::info!(
                artist_id,
                venue_id,
                %start_time,
                reason = e.kind(),
                "Show rejected"
            );
            return Err(e.into());
        }

        Ok((artist, venue))
    }

    /// Books a show after checking it is admissible.
    ///
    /// # Errors
    ///
    /// See [`Self::check_show`]. Additionally returns [`AppError::Conflict`]
    /// with a "please try again" message when a concurrent booking for the
    /// same artist and day wins the race.
    pub async fn book_show(
        &self,
        artist_id: i64,
        venue_id: i64,
        start_time: NaiveDateTime,
    ) -> Result<Show, AppError> {
        self.check_show(artist_id, venue_id, start_time).await?;

        let show = self
            .show_repository
            .create(NewShow {
                artist_id,
                venue_id,
                start_time,
            })
            .await?;

        tracing::info!(
            show_id = show.id,
            artist_id,
            venue_id,
            %start_time,
            "Show booked"
        );

        Ok(show)
    }

    /// Resolves an artist for availability display.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the artist does not exist.
    pub async fn get_artist(&self, artist_id: i64) -> Result<Artist, AppError> {
        self.artist_repository
            .find_by_id(artist_id)
            .await?
            .ok_or_else(|| AppError::not_found("Artist not found", json!({ "id": artist_id })))
    }
}
