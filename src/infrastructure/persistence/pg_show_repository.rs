//! PostgreSQL implementation of show repository.

use async_trait::async_trait;
use chrono::NaiveDateTime;
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::{NewShow, Show, ShowListing};
use crate::domain::repositories::ShowRepository;
use crate::error::AppError;

const LISTING_SELECT: &str = r#"
    SELECT s.id AS show_id, s.start_time,
           a.id AS artist_id, a.name AS artist_name, a.image_link AS artist_image_link,
           v.id AS venue_id, v.name AS venue_name, v.image_link AS venue_image_link
    FROM shows s
    JOIN artists a ON a.id = s.artist_id
    JOIN venues v ON v.id = s.venue_id
"#;

#[derive(FromRow)]
struct ShowRow {
    id: i64,
    artist_id: i64,
    venue_id: i64,
    start_time: NaiveDateTime,
}

impl From<ShowRow> for Show {
    fn from(r: ShowRow) -> Self {
        Show {
            id: r.id,
            artist_id: r.artist_id,
            venue_id: r.venue_id,
            start_time: r.start_time,
        }
    }
}

#[derive(FromRow)]
struct ListingRow {
    show_id: i64,
    start_time: NaiveDateTime,
    artist_id: i64,
    artist_name: String,
    artist_image_link: Option<String>,
    venue_id: i64,
    venue_name: String,
    venue_image_link: Option<String>,
}

impl From<ListingRow> for ShowListing {
    fn from(r: ListingRow) -> Self {
        ShowListing {
            show_id: r.show_id,
            start_time: r.start_time,
            artist_id: r.artist_id,
            artist_name: r.artist_name,
            artist_image_link: r.artist_image_link,
            venue_id: r.venue_id,
            venue_name: r.venue_name,
            venue_image_link: r.venue_image_link,
        }
    }
}

/// PostgreSQL repository for shows.
///
/// The `shows_artist_day_key` unique index rejects a second show for the
/// same artist on the same date; the resulting error is mapped to
/// [`AppError::Conflict`] by [`crate::error::map_sqlx_error`].
pub struct PgShowRepository {
    pool: Arc<PgPool>,
}

impl PgShowRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    async fn fetch_listings(
        &self,
        filter: &str,
        id: Option<i64>,
    ) -> Result<Vec<ShowListing>, AppError> {
        let sql = format!("{LISTING_SELECT} {filter} ORDER BY s.start_time, s.id");

        let rows = sqlx::query_as::<_, ListingRow>(&sql)
            .bind(id)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(ShowListing::from).collect())
    }
}

#[async_trait]
impl ShowRepository for PgShowRepository {
    async fn create(&self, new_show: NewShow) -> Result<Show, AppError> {
        let row = sqlx::query_as::<_, ShowRow>(
            r#"
            INSERT INTO shows (artist_id, venue_id, start_time)
            VALUES ($1, $2, $3)
            RETURNING id, artist_id, venue_id, start_time
            "#,
        )
        .bind(new_show.artist_id)
        .bind(new_show.venue_id)
        .bind(new_show.start_time)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn list_by_artist(&self, artist_id: i64) -> Result<Vec<Show>, AppError> {
        let rows = sqlx::query_as::<_, ShowRow>(
            "SELECT id, artist_id, venue_id, start_time FROM shows WHERE artist_id = $1",
        )
        .bind(artist_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Show::from).collect())
    }

    async fn list_listings(&self) -> Result<Vec<ShowListing>, AppError> {
        self.fetch_listings("WHERE $1::bigint IS NULL", None).await
    }

    async fn listings_for_artist(&self, artist_id: i64) -> Result<Vec<ShowListing>, AppError> {
        self.fetch_listings("WHERE s.artist_id = $1", Some(artist_id))
            .await
    }

    async fn listings_for_venue(&self, venue_id: i64) -> Result<Vec<ShowListing>, AppError> {
        self.fetch_listings("WHERE s.venue_id = $1", Some(venue_id))
            .await
    }

    async fn count(&self, from: Option<NaiveDateTime>) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM shows WHERE ($1::timestamp IS NULL OR start_time >= $1)",
        )
        .bind(from)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(count)
    }
}
