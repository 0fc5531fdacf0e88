//! DTOs for artist availability.

use serde::Serialize;

use crate::domain::availability::WeekFlags;

/// Weekly availability of an artist.
#[derive(Debug, Serialize)]
pub struct AvailabilityResponse {
    pub artist_id: i64,
    pub name: String,
    pub days: WeekFlags,
    pub summary: String,
}
