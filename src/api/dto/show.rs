//! DTOs for show endpoints.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{Show, ShowListing};

/// Request to check or book a show.
///
/// `start_time` is a naive local timestamp, e.g. `"2024-06-10T19:00:00"`.
#[derive(Debug, Deserialize, Validate)]
pub struct ShowRequest {
    #[validate(range(min = 1, message = "artist_id must be positive"))]
    pub artist_id: i64,

    #[validate(range(min = 1, message = "venue_id must be positive"))]
    pub venue_id: i64,

    pub start_time: NaiveDateTime,
}

/// A booked show.
#[derive(Debug, Serialize)]
pub struct ShowItem {
    pub id: i64,
    pub artist_id: i64,
    pub venue_id: i64,
    pub start_time: NaiveDateTime,
}

impl From<Show> for ShowItem {
    fn from(s: Show) -> Self {
        Self {
            id: s.id,
            artist_id: s.artist_id,
            venue_id: s.venue_id,
            start_time: s.start_time,
        }
    }
}

/// A show with artist and venue names.
#[derive(Debug, Serialize)]
pub struct ShowListItem {
    pub id: i64,
    pub venue_id: i64,
    pub venue_name: String,
    pub artist_id: i64,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: NaiveDateTime,
}

impl From<ShowListing> for ShowListItem {
    fn from(l: ShowListing) -> Self {
        Self {
            id: l.show_id,
            venue_id: l.venue_id,
            venue_name: l.venue_name,
            artist_id: l.artist_id,
            artist_name: l.artist_name,
            artist_image_link: l.artist_image_link,
            start_time: l.start_time,
        }
    }
}

/// Response containing all shows.
#[derive(Debug, Serialize)]
pub struct ShowListResponse {
    pub items: Vec<ShowListItem>,
}

/// Result of a successful admissibility check.
#[derive(Debug, Serialize)]
pub struct CheckShowResponse {
    pub admissible: bool,
    pub artist_id: i64,
    pub artist_name: String,
    pub venue_id: i64,
    pub venue_name: String,
    pub start_time: NaiveDateTime,
}
