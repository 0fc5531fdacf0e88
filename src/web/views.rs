//! Display models shared by page templates.
//!
//! Templates only print strings; dates and optional fields are formatted here.

use crate::domain::entities::{Artist, Genre, ShowListing, Venue};
use crate::utils::datetime::{format_full, format_medium};

/// A show row on a listing or detail page.
#[derive(Debug, Clone)]
pub struct ShowView {
    pub artist_id: i64,
    pub artist_name: String,
    pub artist_image_link: String,
    pub venue_id: i64,
    pub venue_name: String,
    pub venue_image_link: String,
    pub start_time: String,
}

impl ShowView {
    /// Uses the medium date format.
    pub fn medium(listing: &ShowListing) -> Self {
        Self::with_time(listing, format_medium(&listing.start_time))
    }

    /// Uses the full date format.
    pub fn full(listing: &ShowListing) -> Self {
        Self::with_time(listing, format_full(&listing.start_time))
    }

    fn with_time(listing: &ShowListing, start_time: String) -> Self {
        Self {
            artist_id: listing.artist_id,
            artist_name: listing.artist_name.clone(),
            artist_image_link: listing.artist_image_link.clone().unwrap_or_default(),
            venue_id: listing.venue_id,
            venue_name: listing.venue_name.clone(),
            venue_image_link: listing.venue_image_link.clone().unwrap_or_default(),
            start_time,
        }
    }
}

/// Profile fields common to artist and venue pages.
#[derive(Debug, Clone)]
pub struct ProfileView {
    pub id: i64,
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: String,
    pub genres: Vec<String>,
    pub image_link: String,
    pub facebook_link: String,
    pub website: String,
    pub seeking: bool,
    pub seeking_description: String,
}

fn genre_names(genres: &[Genre]) -> Vec<String> {
    genres.iter().map(|g| g.to_string()).collect()
}

impl From<&Artist> for ProfileView {
    fn from(a: &Artist) -> Self {
        Self {
            id: a.id,
            name: a.name.clone(),
            city: a.city.clone(),
            state: a.state.clone(),
            address: String::new(),
            phone: a.phone.clone().unwrap_or_default(),
            genres: genre_names(&a.genres),
            image_link: a.image_link.clone().unwrap_or_default(),
            facebook_link: a.facebook_link.clone().unwrap_or_default(),
            website: a.website.clone().unwrap_or_default(),
            seeking: a.seeking_venue,
            seeking_description: a.seeking_description.clone().unwrap_or_default(),
        }
    }
}

impl From<&Venue> for ProfileView {
    fn from(v: &Venue) -> Self {
        Self {
            id: v.id,
            name: v.name.clone(),
            city: v.city.clone(),
            state: v.state.clone(),
            address: v.address.clone(),
            phone: v.phone.clone().unwrap_or_default(),
            genres: genre_names(&v.genres),
            image_link: v.image_link.clone().unwrap_or_default(),
            facebook_link: v.facebook_link.clone().unwrap_or_default(),
            website: v.website.clone().unwrap_or_default(),
            seeking: v.seeking_talent,
            seeking_description: v.seeking_description.clone().unwrap_or_default(),
        }
    }
}
