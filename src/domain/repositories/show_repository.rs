//! Repository trait for show data access.

use chrono::NaiveDateTime;

use crate::domain::entities::{NewShow, Show, ShowListing};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for booking and listing shows.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgShowRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShowRepository: Send + Sync {
    /// Inserts a show.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the artist already has a show on the
    /// same calendar date (enforced by the `shows_artist_day_key` index).
    /// Returns [`AppError::NotFound`] if the artist or venue does not exist.
    async fn create(&self, new_show: NewShow) -> Result<Show, AppError>;

    /// Lists every show booked for an artist, in no particular order.
    async fn list_by_artist(&self, artist_id: i64) -> Result<Vec<Show>, AppError>;

    /// Lists every show with artist and venue details, ordered by start time.
    async fn list_listings(&self) -> Result<Vec<ShowListing>, AppError>;

    /// Lists the shows of one artist with venue details.
    async fn listings_for_artist(&self, artist_id: i64) -> Result<Vec<ShowListing>, AppError>;

    /// Lists the shows at one venue with artist details.
    async fn listings_for_venue(&self, venue_id: i64) -> Result<Vec<ShowListing>, AppError>;

    /// Counts all shows, or only those starting at or after `from` when given.
    async fn count(&self, from: Option<NaiveDateTime>) -> Result<i64, AppError>;
}
