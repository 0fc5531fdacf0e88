//! Venue entity and the area grouping used by the venue listing.

use crate::domain::entities::Genre;

/// A place that hosts shows.
#[derive(Debug, Clone, PartialEq)]
pub struct Venue {
    pub id: i64,
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: Option<String>,
    pub genres: Vec<Genre>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

impl Venue {
    /// Creates a venue from its id and profile fields.
    pub fn from_new(id: i64, new_venue: NewVenue) -> Self {
        Self {
            id,
            name: new_venue.name,
            city: new_venue.city,
            state: new_venue.state,
            address: new_venue.address,
            phone: new_venue.phone,
            genres: new_venue.genres,
            image_link: new_venue.image_link,
            facebook_link: new_venue.facebook_link,
            website: new_venue.website,
            seeking_talent: new_venue.seeking_talent,
            seeking_description: new_venue.seeking_description,
        }
    }
}

/// Profile fields for creating or replacing a venue.
#[derive(Debug, Clone, PartialEq)]
pub struct NewVenue {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: Option<String>,
    pub genres: Vec<Genre>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

impl NewVenue {
    /// Minimal profile with no links and not seeking talent.
    pub fn new(
        name: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            city: city.into(),
            state: state.into(),
            address: address.into(),
            phone: None,
            genres: Vec::new(),
            image_link: None,
            facebook_link: None,
            website: None,
            seeking_talent: false,
            seeking_description: None,
        }
    }
}

/// Venue row of the listing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VenueSummary {
    pub id: i64,
    pub name: String,
    pub city: String,
    pub state: String,
    pub num_upcoming_shows: i64,
}

/// Venues sharing a city and state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VenueArea {
    pub city: String,
    pub state: String,
    pub venues: Vec<VenueSummary>,
}

impl VenueArea {
    /// Groups consecutive summaries with the same `(city, state)`.
    ///
    /// Input must already be ordered by state and city.
    pub fn group(summaries: Vec<VenueSummary>) -> Vec<VenueArea> {
        let mut areas: Vec<VenueArea> = Vec::new();

        for summary in summaries {
            match areas.last_mut() {
                Some(area) if area.city == summary.city && area.state == summary.state => {
                    area.venues.push(summary);
                }
                _ => areas.push(VenueArea {
                    city: summary.city.clone(),
                    state: summary.state.clone(),
                    venues: vec![summary],
                }),
            }
        }

        areas
    }
}
