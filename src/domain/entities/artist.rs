//! Artist entity.

use crate::domain::availability::Availability;
use crate::domain::entities::Genre;

/// A performer listed in the directory.
#[derive(Debug, Clone, PartialEq)]
pub struct Artist {
    pub id: i64,
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub genres: Vec<Genre>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
    pub availability: Availability,
}

impl Artist {
    /// Creates an artist from its id and profile fields.
    pub fn from_new(id: i64, new_artist: NewArtist) -> Self {
        Self {
            id,
            name: new_artist.name,
            city: new_artist.city,
            state: new_artist.state,
            phone: new_artist.phone,
            genres: new_artist.genres,
            image_link: new_artist.image_link,
            facebook_link: new_artist.facebook_link,
            website: new_artist.website,
            seeking_venue: new_artist.seeking_venue,
            seeking_description: new_artist.seeking_description,
            availability: new_artist.availability,
        }
    }

    /// Human-readable weekly availability, e.g. `"available all week"`.
    pub fn availability_summary(&self) -> String {
        self.availability.summary()
    }

    /// Availability as a sentence naming the artist.
    pub fn availability_sentence(&self) -> String {
        self.availability.sentence(&self.name)
    }
}

/// Profile fields for creating or replacing an artist.
#[derive(Debug, Clone, PartialEq)]
pub struct NewArtist {
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub genres: Vec<Genre>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
    pub availability: Availability,
}

impl NewArtist {
    /// Minimal profile with defaults: no links, not seeking, available all week.
    pub fn new(name: impl Into<String>, city: impl Into<String>, state: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            city: city.into(),
            state: state.into(),
            phone: None,
            genres: Vec::new(),
            image_link: None,
            facebook_link: None,
            website: None,
            seeking_venue: false,
            seeking_description: None,
            availability: Availability::ALL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    #[test]
    fn test_new_artist_defaults() {
        let new_artist = NewArtist::new("Guns N Petals", "San Francisco", "CA");
        assert!(new_artist.availability.is_all_week());
        assert!(!new_artist.seeking_venue);
        assert!(new_artist.genres.is_empty());
    }

    #[test]
    fn test_from_new_keeps_fields() {
        let mut new_artist = NewArtist::new("Matt Quevedo", "New York", "NY");
        new_artist.genres = vec![Genre::Jazz];
        new_artist.availability = Availability::NONE.with(Weekday::Mon, true);

        let artist = Artist::from_new(7, new_artist);

        assert_eq!(artist.id, 7);
        assert_eq!(artist.name, "Matt Quevedo");
        assert_eq!(artist.genres, vec![Genre::Jazz]);
        assert_eq!(artist.availability_summary(), "available on Monday");
    }
}
