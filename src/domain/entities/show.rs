//! Show entity: one artist performing at one venue at a start time.

use chrono::NaiveDateTime;

/// A booked show.
///
/// Shows are immutable once booked and are removed only when their artist
/// or venue is deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Show {
    pub id: i64,
    pub artist_id: i64,
    pub venue_id: i64,
    pub start_time: NaiveDateTime,
}

/// Input data for booking a show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewShow {
    pub artist_id: i64,
    pub venue_id: i64,
    pub start_time: NaiveDateTime,
}

/// A show joined with the names and images of its artist and venue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowListing {
    pub show_id: i64,
    pub start_time: NaiveDateTime,
    pub artist_id: i64,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub venue_id: i64,
    pub venue_name: String,
    pub venue_image_link: Option<String>,
}

/// Shows of one artist or venue split around the current time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShowTimeline {
    pub past: Vec<ShowListing>,
    pub upcoming: Vec<ShowListing>,
}

impl ShowTimeline {
    /// Splits listings into past (`start_time < now`) and upcoming
    /// (`start_time >= now`), each ordered by start time.
    pub fn split(mut listings: Vec<ShowListing>, now: NaiveDateTime) -> Self {
        listings.sort_by_key(|l| l.start_time);
        let (past, upcoming) = listings.into_iter().partition(|l| l.start_time < now);
        Self { past, upcoming }
    }
}
