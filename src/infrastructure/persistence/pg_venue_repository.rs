//! PostgreSQL implementation of venue repository.

use async_trait::async_trait;
use chrono::NaiveDateTime;
use serde_json::json;
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::{Genre, NewVenue, Venue, VenueSummary};
use crate::domain::repositories::VenueRepository;
use crate::error::AppError;
use crate::utils::search::like_pattern;

const VENUE_COLUMNS: &str = "id, name, city, state, address, phone, genres, image_link, \
     facebook_link, website, seeking_talent, seeking_description";

#[derive(FromRow)]
struct VenueRow {
    id: i64,
    name: String,
    city: String,
    state: String,
    address: String,
    phone: Option<String>,
    genres: String,
    image_link: Option<String>,
    facebook_link: Option<String>,
    website: Option<String>,
    seeking_talent: bool,
    seeking_description: Option<String>,
}

impl From<VenueRow> for Venue {
    fn from(r: VenueRow) -> Self {
        Venue {
            id: r.id,
            name: r.name,
            city: r.city,
            state: r.state,
            address: r.address,
            phone: r.phone,
            genres: Genre::parse_list(&r.genres),
            image_link: r.image_link,
            facebook_link: r.facebook_link,
            website: r.website,
            seeking_talent: r.seeking_talent,
            seeking_description: r.seeking_description,
        }
    }
}

#[derive(FromRow)]
struct VenueSummaryRow {
    id: i64,
    name: String,
    city: String,
    state: String,
    num_upcoming_shows: i64,
}

/// PostgreSQL repository for venues.
pub struct PgVenueRepository {
    pool: Arc<PgPool>,
}

impl PgVenueRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VenueRepository for PgVenueRepository {
    async fn create(&self, new_venue: NewVenue) -> Result<Venue, AppError> {
        let sql = format!(
            r#"
            INSERT INTO venues (name, city, state, address, phone, genres, image_link,
                                facebook_link, website, seeking_talent, seeking_description)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING {VENUE_COLUMNS}
            "#
        );

        let row = sqlx::query_as::<_, VenueRow>(&sql)
            .bind(new_venue.name)
            .bind(new_venue.city)
            .bind(new_venue.state)
            .bind(new_venue.address)
            .bind(new_venue.phone)
            .bind(Genre::join(&new_venue.genres))
            .bind(new_venue.image_link)
            .bind(new_venue.facebook_link)
            .bind(new_venue.website)
            .bind(new_venue.seeking_talent)
            .bind(new_venue.seeking_description)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Venue>, AppError> {
        let sql = format!("SELECT {VENUE_COLUMNS} FROM venues WHERE id = $1");

        let row = sqlx::query_as::<_, VenueRow>(&sql)
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(Venue::from))
    }

    async fn list_summaries(&self, now: NaiveDateTime) -> Result<Vec<VenueSummary>, AppError> {
        let rows = sqlx::query_as::<_, VenueSummaryRow>(
            r#"
            SELECT v.id, v.name, v.city, v.state,
                   COUNT(s.id) FILTER (WHERE s.start_time >= $1) AS num_upcoming_shows
            FROM venues v
            LEFT JOIN shows s ON s.venue_id = v.id
            GROUP BY v.id
            ORDER BY v.state, v.city, v.name, v.id
            "#,
        )
        .bind(now)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| VenueSummary {
                id: r.id,
                name: r.name,
                city: r.city,
                state: r.state,
                num_upcoming_shows: r.num_upcoming_shows,
            })
            .collect())
    }

    async fn list_seeking(&self) -> Result<Vec<Venue>, AppError> {
        let sql = format!(
            "SELECT {VENUE_COLUMNS} FROM venues WHERE seeking_talent = TRUE ORDER BY name, id"
        );

        let rows = sqlx::query_as::<_, VenueRow>(&sql)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(Venue::from).collect())
    }

    async fn search(&self, term: &str) -> Result<Vec<Venue>, AppError> {
        let sql = format!(
            r#"
            SELECT {VENUE_COLUMNS}
            FROM venues
            WHERE name ILIKE $1 OR city ILIKE $1 OR state ILIKE $1 OR genres ILIKE $1
            ORDER BY name, id
            "#
        );

        let rows = sqlx::query_as::<_, VenueRow>(&sql)
            .bind(like_pattern(term))
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(Venue::from).collect())
    }

    async fn update(&self, id: i64, venue: NewVenue) -> Result<Venue, AppError> {
        let sql = format!(
            r#"
            UPDATE venues SET
                name = $2, city = $3, state = $4, address = $5, phone = $6, genres = $7,
                image_link = $8, facebook_link = $9, website = $10,
                seeking_talent = $11, seeking_description = $12
            WHERE id = $1
            RETURNING {VENUE_COLUMNS}
            "#
        );

        let row = sqlx::query_as::<_, VenueRow>(&sql)
            .bind(id)
            .bind(venue.name)
            .bind(venue.city)
            .bind(venue.state)
            .bind(venue.address)
            .bind(venue.phone)
            .bind(Genre::join(&venue.genres))
            .bind(venue.image_link)
            .bind(venue.facebook_link)
            .bind(venue.website)
            .bind(venue.seeking_talent)
            .bind(venue.seeking_description)
            .fetch_optional(self.pool.as_ref())
            .await?;

        row.map(Venue::from)
            .ok_or_else(|| AppError::not_found("Venue not found", json!({ "id": id })))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM venues WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM venues")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
