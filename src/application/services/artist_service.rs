//! Artist management service.

use serde_json::json;
use std::sync::Arc;

use crate::application::services::SearchResults;
use crate::domain::entities::{Artist, NewArtist, ShowTimeline};
use crate::domain::repositories::{ArtistRepository, ShowRepository};
use crate::domain::scheduling::Clock;
use crate::error::AppError;

/// An artist together with its availability phrase and shows.
#[derive(Debug, Clone)]
pub struct ArtistProfile {
    pub artist: Artist,
    pub availability_summary: String,
    pub shows: ShowTimeline,
}

/// Service for listing, searching and editing artists.
pub struct ArtistService {
    repository: Arc<dyn ArtistRepository>,
    show_repository: Arc<dyn ShowRepository>,
    clock: Arc<dyn Clock>,
}

impl ArtistService {
    /// Creates a new artist service.
    pub fn new(
        repository: Arc<dyn ArtistRepository>,
        show_repository: Arc<dyn ShowRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repository,
            show_repository,
            clock,
        }
    }

    /// Lists all artists ordered by name.
    pub async fn list_artists(&self) -> Result<Vec<Artist>, AppError> {
        self.repository.list().await
    }

    /// Lists artists looking for venues, for the booking form.
    pub async fn list_seeking_artists(&self) -> Result<Vec<Artist>, AppError> {
        self.repository.list_seeking().await
    }

    /// Searches artists by name, city, state or genre.
    pub async fn search_artists(&self, term: &str) -> Result<SearchResults<Artist>, AppError> {
        let items = self.repository.search(term).await?;
        Ok(SearchResults::new(items))
    }

    /// Retrieves an artist by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the artist does not exist.
    pub async fn get_artist(&self, id: i64) -> Result<Artist, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Artist not found", json!({ "id": id })))
    }

    /// Retrieves an artist with past and upcoming shows.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the artist does not exist.
    pub async fn get_artist_profile(&self, id: i64) -> Result<ArtistProfile, AppError> {
        let artist = self.get_artist(id).await?;
        let listings = self.show_repository.listings_for_artist(id).await?;

        Ok(ArtistProfile {
            availability_summary: artist.availability_summary(),
            shows: ShowTimeline::split(listings, self.clock.now()),
            artist,
        })
    }

    /// Creates an artist.
    pub async fn create_artist(&self, new_artist: NewArtist) -> Result<Artist, AppError> {
        let artist = self.repository.create(new_artist).await?;
        tracing::info!(artist_id = artist.id, "Artist created");
        Ok(artist)
    }

    /// Replaces an artist's profile, including availability.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the artist does not exist.
    pub async fn update_artist(&self, id: i64, artist: NewArtist) -> Result<Artist, AppError> {
        let artist = self.repository.update(id, artist).await?;
        tracing::info!(artist_id = id, "Artist updated");
        Ok(artist)
    }

    /// Deletes an artist and its shows.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the artist does not exist.
    pub async fn delete_artist(&self, id: i64) -> Result<(), AppError> {
        if !self.repository.delete(id).await? {
            return Err(AppError::not_found("Artist not found", json!({ "id": id })));
        }
        tracing::info!(artist_id = id, "Artist deleted");
        Ok(())
    }

    /// Counts all artists.
    pub async fn count_artists(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::availability::Availability;
    use crate::domain::entities::ShowListing;
    use crate::domain::repositories::{MockArtistRepository, MockShowRepository};
    use crate::domain::scheduling::FixedClock;
    use chrono::{NaiveDate, NaiveDateTime};

    fn at(d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    fn create_test_artist(id: i64) -> Artist {
        let mut new_artist = NewArtist::new("The Wild Sax Band", "San Francisco", "CA");
        new_artist.availability =
            Availability::from_flags([true, false, true, false, true, false, false]);
        Artist::from_new(id, new_artist)
    }

    fn listing(id: i64, start_time: NaiveDateTime) -> ShowListing {
        ShowListing {
            show_id: id,
            start_time,
            artist_id: 1,
            artist_name: "The Wild Sax Band".to_string(),
            artist_image_link: None,
            venue_id: 3,
            venue_name: "Park Square Live Music & Coffee".to_string(),
            venue_image_link: None,
        }
    }

    fn service(artists: MockArtistRepository, shows: MockShowRepository) -> ArtistService {
        ArtistService::new(
            Arc::new(artists),
            Arc::new(shows),
            Arc::new(FixedClock(at(10, 12))),
        )
    }

    #[tokio::test]
    async fn test_get_artist_profile_splits_shows() {
        let mut artists = MockArtistRepository::new();
        artists
            .expect_find_by_id()
            .returning(|id| Ok(Some(create_test_artist(id))));
        let mut shows = MockShowRepository::new();
        shows
            .expect_listings_for_artist()
            .withf(|id| *id == 1)
            .returning(|_| Ok(vec![listing(1, at(3, 20)), listing(2, at(14, 20))]));

        let profile = service(artists, shows).get_artist_profile(1).await.unwrap();

        assert_eq!(
            profile.availability_summary,
            "available on Monday, Wednesday and Friday"
        );
        assert_eq!(profile.shows.past.len(), 1);
        assert_eq!(profile.shows.upcoming.len(), 1);
        assert_eq!(profile.shows.upcoming[0].show_id, 2);
    }

    #[tokio::test]
    async fn test_get_artist_profile_not_found() {
        let mut artists = MockArtistRepository::new();
        artists.expect_find_by_id().returning(|_| Ok(None));
        let mut shows = MockShowRepository::new();
        shows.expect_listings_for_artist().times(0);

        let err = service(artists, shows)
            .get_artist_profile(9)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_delete_missing_artist() {
        let mut artists = MockArtistRepository::new();
        artists.expect_delete().times(1).returning(|_| Ok(false));

        let err = service(artists, MockShowRepository::new())
            .delete_artist(4)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_search_counts_results() {
        let mut artists = MockArtistRepository::new();
        artists
            .expect_search()
            .withf(|term| term == "band")
            .returning(|_| Ok(vec![create_test_artist(1), create_test_artist(2)]));

        let results = service(artists, MockShowRepository::new())
            .search_artists("band")
            .await
            .unwrap();
        assert_eq!(results.count, 2);
        assert_eq!(results.items.len(), 2);
    }
}
