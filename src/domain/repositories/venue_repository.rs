//! Repository trait for venue data access.

use chrono::NaiveDateTime;

use crate::domain::entities::{NewVenue, Venue, VenueSummary};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing venues.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgVenueRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VenueRepository: Send + Sync {
    /// Creates a new venue.
    async fn create(&self, new_venue: NewVenue) -> Result<Venue, AppError>;

    /// Finds a venue by id.
    async fn find_by_id(&self, id: i64) -> Result<Option<Venue>, AppError>;

    /// Lists venue summaries ordered by state, city and name.
    ///
    /// `num_upcoming_shows` counts shows starting at or after `now`.
    async fn list_summaries(&self, now: NaiveDateTime) -> Result<Vec<VenueSummary>, AppError>;

    /// Lists venues looking for talent, ordered by name.
    async fn list_seeking(&self) -> Result<Vec<Venue>, AppError>;

    /// Case-insensitive substring search over name, city, state and genres.
    async fn search(&self, term: &str) -> Result<Vec<Venue>, AppError>;

    /// Replaces all profile fields of a venue.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no venue has this id.
    async fn update(&self, id: i64, venue: NewVenue) -> Result<Venue, AppError>;

    /// Deletes a venue and, by cascade, its shows.
    ///
    /// Returns `Ok(false)` if no venue has this id.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;

    /// Counts all venues.
    async fn count(&self) -> Result<i64, AppError>;
}
