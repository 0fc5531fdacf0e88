#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use chrono::{NaiveDate, NaiveDateTime};
use serde_json::json;
use sqlx::PgPool;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use fyyur::domain::entities::{
    Artist, Genre, NewArtist, NewShow, NewVenue, Show, ShowListing, Venue, VenueSummary,
};
use fyyur::domain::repositories::{ArtistRepository, ShowRepository, VenueRepository};
use fyyur::domain::scheduling::FixedClock;
use fyyur::error::{AppError, BOOKING_RACE_MESSAGE, SHOW_PER_DAY_CONSTRAINT};
use fyyur::infrastructure::persistence::{
    PgArtistRepository, PgShowRepository, PgVenueRepository,
};
use fyyur::routes::app_routes;
use fyyur::state::AppState;

/// Saturday 2024-06-01 12:00, the frozen "now" of every HTTP test.
pub fn now() -> NaiveDateTime {
    at(2024, 6, 1, 12)
}

pub fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, 0, 0)
        .unwrap()
}

#[derive(Default)]
struct Tables {
    artists: Vec<Artist>,
    venues: Vec<Venue>,
    shows: Vec<Show>,
    next_id: i64,
}

impl Tables {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn listing(&self, show: &Show) -> Option<ShowListing> {
        let artist = self.artists.iter().find(|a| a.id == show.artist_id)?;
        let venue = self.venues.iter().find(|v| v.id == show.venue_id)?;
        Some(ShowListing {
            show_id: show.id,
            start_time: show.start_time,
            artist_id: artist.id,
            artist_name: artist.name.clone(),
            artist_image_link: artist.image_link.clone(),
            venue_id: venue.id,
            venue_name: venue.name.clone(),
            venue_image_link: venue.image_link.clone(),
        })
    }

    fn listings(&self, keep: impl Fn(&Show) -> bool) -> Vec<ShowListing> {
        let mut listings: Vec<_> = self
            .shows
            .iter()
            .filter(|s| keep(s))
            .filter_map(|s| self.listing(s))
            .collect();
        listings.sort_by_key(|l| (l.start_time, l.show_id));
        listings
    }
}

/// In-memory store backing all three repositories.
///
/// Mirrors the PostgreSQL schema: deletes cascade to shows and the store
/// rejects a second show for an artist on the same date.
#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
    failing: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Makes every subsequent write fail with an internal error.
    pub fn fail_writes(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    fn check_writable(&self) -> Result<(), AppError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(AppError::internal("Database error", json!({})));
        }
        Ok(())
    }

    /// Inserts a show directly, bypassing the admissibility check.
    pub fn insert_show(&self, artist_id: i64, venue_id: i64, start_time: NaiveDateTime) -> i64 {
        let mut t = self.tables.lock().unwrap();
        let id = t.next_id();
        t.shows.push(Show {
            id,
            artist_id,
            venue_id,
            start_time,
        });
        id
    }

    pub fn show_count(&self) -> usize {
        self.tables.lock().unwrap().shows.len()
    }

    pub fn artist(&self, id: i64) -> Option<Artist> {
        self.tables
            .lock()
            .unwrap()
            .artists
            .iter()
            .find(|a| a.id == id)
            .cloned()
    }
}

fn matches(term: &str, fields: &[&str]) -> bool {
    let term = term.trim().to_lowercase();
    fields.iter().any(|f| f.to_lowercase().contains(&term))
}

#[async_trait]
impl ArtistRepository for MemoryStore {
    async fn create(&self, new_artist: NewArtist) -> Result<Artist, AppError> {
        self.check_writable()?;
        let mut t = self.tables.lock().unwrap();
        let artist = Artist::from_new(t.next_id(), new_artist);
        t.artists.push(artist.clone());
        Ok(artist)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Artist>, AppError> {
        Ok(self.artist(id))
    }

    async fn list(&self) -> Result<Vec<Artist>, AppError> {
        let mut artists = self.tables.lock().unwrap().artists.clone();
        artists.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        Ok(artists)
    }

    async fn list_seeking(&self) -> Result<Vec<Artist>, AppError> {
        let mut artists = ArtistRepository::list(self).await?;
        artists.retain(|a| a.seeking_venue);
        Ok(artists)
    }

    async fn search(&self, term: &str) -> Result<Vec<Artist>, AppError> {
        let mut artists = ArtistRepository::list(self).await?;
        artists.retain(|a| {
            matches(
                term,
                &[&a.name, &a.city, &a.state, &Genre::join(&a.genres)],
            )
        });
        Ok(artists)
    }

    async fn update(&self, id: i64, artist: NewArtist) -> Result<Artist, AppError> {
        self.check_writable()?;
        let mut t = self.tables.lock().unwrap();
        let slot = t
            .artists
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| AppError::not_found("Artist not found", json!({ "id": id })))?;
        *slot = Artist::from_new(id, artist);
        Ok(slot.clone())
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        self.check_writable()?;
        let mut t = self.tables.lock().unwrap();
        let before = t.artists.len();
        t.artists.retain(|a| a.id != id);
        t.shows.retain(|s| s.artist_id != id);
        Ok(t.artists.len() != before)
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.tables.lock().unwrap().artists.len() as i64)
    }
}

#[async_trait]
impl VenueRepository for MemoryStore {
    async fn create(&self, new_venue: NewVenue) -> Result<Venue, AppError> {
        self.check_writable()?;
        let mut t = self.tables.lock().unwrap();
        let venue = Venue::from_new(t.next_id(), new_venue);
        t.venues.push(venue.clone());
        Ok(venue)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Venue>, AppError> {
        Ok(self
            .tables
            .lock()
            .unwrap()
            .venues
            .iter()
            .find(|v| v.id == id)
            .cloned())
    }

    async fn list_summaries(&self, now: NaiveDateTime) -> Result<Vec<VenueSummary>, AppError> {
        let t = self.tables.lock().unwrap();
        let mut venues = t.venues.clone();
        venues.sort_by(|a, b| {
            (&a.state, &a.city, &a.name, a.id).cmp(&(&b.state, &b.city, &b.name, b.id))
        });
        Ok(venues
            .into_iter()
            .map(|v| VenueSummary {
                num_upcoming_shows: t
                    .shows
                    .iter()
                    .filter(|s| s.venue_id == v.id && s.start_time >= now)
                    .count() as i64,
                id: v.id,
                name: v.name,
                city: v.city,
                state: v.state,
            })
            .collect())
    }

    async fn list_seeking(&self) -> Result<Vec<Venue>, AppError> {
        let mut venues: Vec<_> = self
            .tables
            .lock()
            .unwrap()
            .venues
            .iter()
            .filter(|v| v.seeking_talent)
            .cloned()
            .collect();
        venues.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(venues)
    }

    async fn search(&self, term: &str) -> Result<Vec<Venue>, AppError> {
        let mut venues: Vec<_> = self
            .tables
            .lock()
            .unwrap()
            .venues
            .iter()
            .filter(|v| {
                matches(
                    term,
                    &[&v.name, &v.city, &v.state, &Genre::join(&v.genres)],
                )
            })
            .cloned()
            .collect();
        venues.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(venues)
    }

    async fn update(&self, id: i64, venue: NewVenue) -> Result<Venue, AppError> {
        self.check_writable()?;
        let mut t = self.tables.lock().unwrap();
        let slot = t
            .venues
            .iter_mut()
            .find(|v| v.id == id)
            .ok_or_else(|| AppError::not_found("Venue not found", json!({ "id": id })))?;
        *slot = Venue::from_new(id, venue);
        Ok(slot.clone())
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        self.check_writable()?;
        let mut t = self.tables.lock().unwrap();
        let before = t.venues.len();
        t.venues.retain(|v| v.id != id);
        t.shows.retain(|s| s.venue_id != id);
        Ok(t.venues.len() != before)
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.tables.lock().unwrap().venues.len() as i64)
    }
}

#[async_trait]
impl ShowRepository for MemoryStore {
    async fn create(&self, new_show: NewShow) -> Result<Show, AppError> {
        self.check_writable()?;
        let mut t = self.tables.lock().unwrap();
        let day = new_show.start_time.date();
        if t
            .shows
            .iter()
            .any(|s| s.artist_id == new_show.artist_id && s.start_time.date() == day)
        {
            return Err(AppError::conflict(
                BOOKING_RACE_MESSAGE,
                json!({ "kind": "constraint_violation", "constraint": SHOW_PER_DAY_CONSTRAINT }),
            ));
        }
        let show = Show {
            id: t.next_id(),
            artist_id: new_show.artist_id,
            venue_id: new_show.venue_id,
            start_time: new_show.start_time,
        };
        t.shows.push(show.clone());
        Ok(show)
    }

    async fn list_by_artist(&self, artist_id: i64) -> Result<Vec<Show>, AppError> {
        Ok(self
            .tables
            .lock()
            .unwrap()
            .shows
            .iter()
            .filter(|s| s.artist_id == artist_id)
            .cloned()
            .collect())
    }

    async fn list_listings(&self) -> Result<Vec<ShowListing>, AppError> {
        Ok(self.tables.lock().unwrap().listings(|_| true))
    }

    async fn listings_for_artist(&self, artist_id: i64) -> Result<Vec<ShowListing>, AppError> {
        Ok(self
            .tables
            .lock()
            .unwrap()
            .listings(|s| s.artist_id == artist_id))
    }

    async fn listings_for_venue(&self, venue_id: i64) -> Result<Vec<ShowListing>, AppError> {
        Ok(self
            .tables
            .lock()
            .unwrap()
            .listings(|s| s.venue_id == venue_id))
    }

    async fn count(&self, from: Option<NaiveDateTime>) -> Result<i64, AppError> {
        let t = self.tables.lock().unwrap();
        Ok(t.shows
            .iter()
            .filter(|s| from.is_none_or(|from| s.start_time >= from))
            .count() as i64)
    }
}

/// State over an in-memory store with the clock frozen at [`now`].
pub fn create_test_state(store: Arc<MemoryStore>) -> AppState {
    AppState::new(
        store.clone(),
        store.clone(),
        store,
        Arc::new(FixedClock(now())),
    )
}

/// Application routes over an in-memory store.
pub fn create_test_server(store: Arc<MemoryStore>) -> TestServer {
    TestServer::new(app_routes(create_test_state(store), "static")).unwrap()
}

/// State over PostgreSQL repositories for `#[sqlx::test]` tests.
pub fn create_pg_state(pool: PgPool) -> AppState {
    let pool = Arc::new(pool);
    AppState::new(
        Arc::new(PgArtistRepository::new(pool.clone())),
        Arc::new(PgVenueRepository::new(pool.clone())),
        Arc::new(PgShowRepository::new(pool)),
        Arc::new(FixedClock(now())),
    )
}

pub async fn seed_artist(
    store: &MemoryStore,
    name: &str,
    f: impl FnOnce(&mut NewArtist),
) -> Artist {
    let mut new_artist = NewArtist::new(name, "San Francisco", "CA");
    new_artist.genres = vec![Genre::RockNRoll];
    new_artist.seeking_venue = true;
    f(&mut new_artist);
    ArtistRepository::create(store, new_artist).await.unwrap()
}

pub async fn seed_venue(store: &MemoryStore, name: &str, city: &str, state: &str) -> Venue {
    let mut new_venue = NewVenue::new(name, city, state, "1015 Folsom Street");
    new_venue.genres = vec![Genre::Jazz, Genre::Reggae];
    new_venue.seeking_talent = true;
    VenueRepository::create(store, new_venue).await.unwrap()
}
