//! Repository trait for artist data access.

use crate::domain::entities::{Artist, NewArtist};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing artists.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgArtistRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ArtistRepository: Send + Sync {
    /// Creates a new artist.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_artist: NewArtist) -> Result<Artist, AppError>;

    /// Finds an artist by id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Artist))` if found
    /// - `Ok(None)` if not found
    async fn find_by_id(&self, id: i64) -> Result<Option<Artist>, AppError>;

    /// Lists all artists ordered by name.
    async fn list(&self) -> Result<Vec<Artist>, AppError>;

    /// Lists artists looking for venues, ordered by name.
    async fn list_seeking(&self) -> Result<Vec<Artist>, AppError>;

    /// Case-insensitive substring search over name, city, state and genres.
    async fn search(&self, term: &str) -> Result<Vec<Artist>, AppError>;

    /// Replaces all profile fields of an artist.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no artist has this id.
    async fn update(&self, id: i64, artist: NewArtist) -> Result<Artist, AppError>;

    /// Deletes an artist and, by cascade, its shows.
    ///
    /// Returns `Ok(false)` if no artist has this id.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;

    /// Counts all artists.
    async fn count(&self) -> Result<i64, AppError>;
}
