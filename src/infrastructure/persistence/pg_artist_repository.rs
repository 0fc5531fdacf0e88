//! PostgreSQL implementation of artist repository.

use async_trait::async_trait;
use serde_json::json;
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::availability::Availability;
use crate::domain::entities::{Artist, Genre, NewArtist};
use crate::domain::repositories::ArtistRepository;
use crate::error::AppError;
use crate::utils::search::like_pattern;

const ARTIST_COLUMNS: &str = "id, name, city, state, phone, genres, image_link, facebook_link, \
     website, seeking_venue, seeking_description, availability";

#[derive(FromRow)]
struct ArtistRow {
    id: i64,
    name: String,
    city: String,
    state: String,
    phone: Option<String>,
    genres: String,
    image_link: Option<String>,
    facebook_link: Option<String>,
    website: Option<String>,
    seeking_venue: bool,
    seeking_description: Option<String>,
    availability: i16,
}

impl From<ArtistRow> for Artist {
    fn from(r: ArtistRow) -> Self {
        Artist {
            id: r.id,
            name: r.name,
            city: r.city,
            state: r.state,
            phone: r.phone,
            genres: Genre::parse_list(&r.genres),
            image_link: r.image_link,
            facebook_link: r.facebook_link,
            website: r.website,
            seeking_venue: r.seeking_venue,
            seeking_description: r.seeking_description,
            availability: Availability::from_bits(r.availability as u8),
        }
    }
}

/// PostgreSQL repository for artists.
///
/// Availability is stored as a 7-bit `SMALLINT`; genres as a `", "`-joined string.
pub struct PgArtistRepository {
    pool: Arc<PgPool>,
}

impl PgArtistRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ArtistRepository for PgArtistRepository {
    async fn create(&self, new_artist: NewArtist) -> Result<Artist, AppError> {
        let sql = format!(
            r#"
            INSERT INTO artists (name, city, state, phone, genres, image_link, facebook_link,
                                 website, seeking_venue, seeking_description, availability)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING {ARTIST_COLUMNS}
            "#
        );

        let row = sqlx::query_as::<_, ArtistRow>(&sql)
            .bind(new_artist.name)
            .bind(new_artist.city)
            .bind(new_artist.state)
            .bind(new_artist.phone)
            .bind(Genre::join(&new_artist.genres))
            .bind(new_artist.image_link)
            .bind(new_artist.facebook_link)
            .bind(new_artist.website)
            .bind(new_artist.seeking_venue)
            .bind(new_artist.seeking_description)
            .bind(new_artist.availability.bits() as i16)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Artist>, AppError> {
        let sql = format!("SELECT {ARTIST_COLUMNS} FROM artists WHERE id = $1");

        let row = sqlx::query_as::<_, ArtistRow>(&sql)
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(Artist::from))
    }

    async fn list(&self) -> Result<Vec<Artist>, AppError> {
        let sql = format!("SELECT {ARTIST_COLUMNS} FROM artists ORDER BY name, id");

        let rows = sqlx::query_as::<_, ArtistRow>(&sql)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(Artist::from).collect())
    }

    async fn list_seeking(&self) -> Result<Vec<Artist>, AppError> {
        let sql = format!(
            "SELECT {ARTIST_COLUMNS} FROM artists WHERE seeking_venue = TRUE ORDER BY name, id"
        );

        let rows = sqlx::query_as::<_, ArtistRow>(&sql)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(Artist::from).collect())
    }

    async fn search(&self, term: &str) -> Result<Vec<Artist>, AppError> {
        let sql = format!(
            r#"
            SELECT {ARTIST_COLUMNS}
            FROM artists
            WHERE name ILIKE $1 OR city ILIKE $1 OR state ILIKE $1 OR genres ILIKE $1
            ORDER BY name, id
            "#
        );

        let rows = sqlx::query_as::<_, ArtistRow>(&sql)
            .bind(like_pattern(term))
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(Artist::from).collect())
    }

    async fn update(&self, id: i64, artist: NewArtist) -> Result<Artist, AppError> {
        let sql = format!(
            r#"
            UPDATE artists SET
                name = $2, city = $3, state = $4, phone = $5, genres = $6,
                image_link = $7, facebook_link = $8, website = $9,
                seeking_venue = $10, seeking_description = $11, availability = $12
            WHERE id = $1
            RETURNING {ARTIST_COLUMNS}
            "#
        );

        let row = sqlx::query_as::<_, ArtistRow>(&sql)
            .bind(id)
            .bind(artist.name)
            .bind(artist.city)
            .bind(artist.state)
            .bind(artist.phone)
            .bind(Genre::join(&artist.genres))
            .bind(artist.image_link)
            .bind(artist.facebook_link)
            .bind(artist.website)
            .bind(artist.seeking_venue)
            .bind(artist.seeking_description)
            .bind(artist.availability.bits() as i16)
            .fetch_optional(self.pool.as_ref())
            .await?;

        row.map(Artist::from)
            .ok_or_else(|| AppError::not_found("Artist not found", json!({ "id": id })))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM artists WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM artists")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
