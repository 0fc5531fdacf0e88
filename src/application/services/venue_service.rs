//! Venue management service.

use serde_json::json;
use std::sync::Arc;

use crate::application::services::SearchResults;
use crate::domain::entities::{NewVenue, ShowTimeline, Venue, VenueArea};
use crate::domain::repositories::{ShowRepository, VenueRepository};
use crate::domain::scheduling::Clock;
use crate::error::AppError;

/// A venue together with its past and upcoming shows.
#[derive(Debug, Clone)]
pub struct VenueProfile {
    pub venue: Venue,
    pub shows: ShowTimeline,
}

/// Service for listing, searching and editing venues.
pub struct VenueService {
    repository: Arc<dyn VenueRepository>,
    show_repository: Arc<dyn ShowRepository>,
    clock: Arc<dyn Clock>,
}

impl VenueService {
    /// Creates a new venue service.
    pub fn new(
        repository: Arc<dyn VenueRepository>,
        show_repository: Arc<dyn ShowRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repository,
            show_repository,
            clock,
        }
    }

    /// Lists venues grouped by `(city, state)`, areas ordered by state then city.
    pub async fn list_venue_areas(&self) -> Result<Vec<VenueArea>, AppError> {
        let summaries = self.repository.list_summaries(self.clock.now()).await?;
        Ok(VenueArea::group(summaries))
    }

    /// Lists venues looking for talent, for the booking form.
    pub async fn list_seeking_venues(&self) -> Result<Vec<Venue>, AppError> {
        self.repository.list_seeking().await
    }

    /// Searches venues by name, city, state or genre.
    pub async fn search_venues(&self, term: &str) -> Result<SearchResults<Venue>, AppError> {
        let items = self.repository.search(term).await?;
        Ok(SearchResults::new(items))
    }

    /// Retrieves a venue by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the venue does not exist.
    pub async fn get_venue(&self, id: i64) -> Result<Venue, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Venue not found", json!({ "id": id })))
    }

    /// Retrieves a venue with past and upcoming shows.
    pub async fn get_venue_profile(&self, id: i64) -> Result<VenueProfile, AppError> {
        let venue = self.get_venue(id).await?;
        let listings = self.show_repository.listings_for_venue(id).await?;

        Ok(VenueProfile {
            venue,
            shows: ShowTimeline::split(listings, self.clock.now()),
        })
    }

    /// Creates a venue.
    pub async fn create_venue(&self, new_venue: NewVenue) -> Result<Venue, AppError> {
        let venue = self.repository.create(new_venue).await?;
        tracing::info!(venue_id = venue.id, "Venue created");
        Ok(venue)
    }

    /// Replaces a venue's profile.
    pub async fn update_venue(&self, id: i64, venue: NewVenue) -> Result<Venue, AppError> {
        let venue = self.repository.update(id, venue).await?;
        tracing::info!(venue_id = id, "Venue updated");
        Ok(venue)
    }

    /// Deletes a venue and its shows.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the venue does not exist.
    pub async fn delete_venue(&self, id: i64) -> Result<(), AppError> {
        if !self.repository.delete(id).await? {
            return Err(AppError::not_found("Venue not found", json!({ "id": id })));
        }
        tracing::info!(venue_id = id, "Venue deleted");
        Ok(())
    }

    /// Counts all venues.
    pub async fn count_venues(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }
}
