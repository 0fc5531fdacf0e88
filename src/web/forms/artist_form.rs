//! Artist create/edit form.

use validator::Validate;

use crate::domain::availability::{Availability, WEEK, weekday_name};
use crate::domain::entities::{Artist, NewArtist};
use crate::web::forms::{
    Choice, FormData, PHONE_REGEX, genre_choices, non_empty, parse_genres, state_choices,
    validate_facebook_link, validate_genres, validate_state, validate_website,
};

/// Entered values of the artist form.
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct ArtistForm {
    #[validate(length(
        min = 2,
        max = 50,
        message = "Please enter an artist name (2-50 characters)"
    ))]
    pub name: String,

    #[validate(length(
        min = 2,
        max = 50,
        message = "Please enter the artist's city (2-50 characters)"
    ))]
    pub city: String,

    #[validate(custom(function = "validate_state"))]
    pub state: String,

    #[validate(regex(
        path = "*PHONE_REGEX",
        message = "Please enter a phone number as xxx-xxx-xxxx"
    ))]
    pub phone: String,

    pub image_link: String,

    #[validate(custom(function = "validate_genres"))]
    pub genres: Vec<String>,

    #[validate(custom(function = "validate_website"))]
    pub website: String,

    #[validate(custom(function = "validate_facebook_link"))]
    pub facebook_link: String,

    pub seeking_venue: bool,

    #[validate(length(max = 500, message = "Description must be at most 500 characters"))]
    pub seeking_description: String,

    /// Monday → Sunday.
    pub days: [bool; 7],
}

impl Default for ArtistForm {
    /// Blank form with every day checked.
    fn default() -> Self {
        Self {
            name: String::new(),
            city: String::new(),
            state: String::new(),
            phone: String::new(),
            image_link: String::new(),
            genres: Vec::new(),
            website: String::new(),
            facebook_link: String::new(),
            seeking_venue: false,
            seeking_description: String::new(),
            days: [true; 7],
        }
    }
}

impl ArtistForm {
    /// Reads a submitted form. Unchecked day boxes are absent from the body.
    pub fn from_data(data: &FormData) -> Self {
        let mut days = [false; 7];
        for (flag, day) in days.iter_mut().zip(WEEK) {
            *flag = data.checked(&day_key(day));
        }

        Self {
            name: data.value("name"),
            city: data.value("city"),
            state: data.value("state"),
            phone: data.value("phone"),
            image_link: data.value("image_link"),
            genres: data.values("genres"),
            website: data.value("website"),
            facebook_link: data.value("facebook_link"),
            seeking_venue: data.checked("seeking_venue"),
            seeking_description: data.value("seeking_description"),
            days,
        }
    }

    /// Prefills the form from a stored artist.
    pub fn from_artist(artist: &Artist) -> Self {
        Self {
            name: artist.name.clone(),
            city: artist.city.clone(),
            state: artist.state.clone(),
            phone: artist.phone.clone().unwrap_or_default(),
            image_link: artist.image_link.clone().unwrap_or_default(),
            genres: artist.genres.iter().map(|g| g.to_string()).collect(),
            website: artist.website.clone().unwrap_or_default(),
            facebook_link: artist.facebook_link.clone().unwrap_or_default(),
            seeking_venue: artist.seeking_venue,
            seeking_description: artist.seeking_description.clone().unwrap_or_default(),
            days: artist.availability.flags(),
        }
    }

    /// Converts a validated form into profile fields.
    pub fn to_new_artist(&self) -> NewArtist {
        NewArtist {
            name: self.name.clone(),
            city: self.city.clone(),
            state: self.state.clone(),
            phone: non_empty(&self.phone),
            genres: parse_genres(&self.genres),
            image_link: non_empty(&self.image_link),
            facebook_link: non_empty(&self.facebook_link),
            website: non_empty(&self.website),
            seeking_venue: self.seeking_venue,
            seeking_description: non_empty(&self.seeking_description),
            availability: Availability::from_flags(self.days),
        }
    }

    pub fn state_choices(&self) -> Vec<Choice> {
        state_choices(&self.state)
    }

    pub fn genre_choices(&self) -> Vec<Choice> {
        genre_choices(&self.genres)
    }

    /// Availability checkboxes, Monday first.
    pub fn day_choices(&self) -> Vec<Choice> {
        WEEK.iter()
            .zip(self.days)
            .map(|(day, checked)| Choice::new(day_key(*day), weekday_name(*day), checked))
            .collect()
    }
}

fn day_key(day: chrono::Weekday) -> String {
    weekday_name(day).to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Genre;
    use chrono::Weekday;

    fn data(pairs: &[(&str, &str)]) -> FormData {
        FormData::new(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    fn valid_pairs() -> Vec<(&'static str, &'static str)> {
        vec![
            ("name", "Guns N Petals"),
            ("city", "San Francisco"),
            ("state", "CA"),
            ("genres", "Rock n Roll"),
            ("genres", "Heavy Metal"),
            ("monday", "y"),
            ("friday", "y"),
        ]
    }

    #[test]
    fn test_blank_form_checks_every_day() {
        let form = ArtistForm::default();
        assert!(form.day_choices().iter().all(|c| c.selected));
        assert_eq!(form.to_new_artist().availability, Availability::ALL);
    }

    #[test]
    fn test_valid_submission() {
        let form = ArtistForm::from_data(&data(&valid_pairs()));
        assert!(form.validate().is_ok());

        let artist = form.to_new_artist();
        assert_eq!(artist.genres, vec![Genre::RockNRoll, Genre::HeavyMetal]);
        assert_eq!(
            artist.availability,
            Availability::NONE
                .with(Weekday::Mon, true)
                .with(Weekday::Fri, true)
        );
        assert_eq!(artist.website, None);
        assert!(!artist.seeking_venue);
    }

    #[test]
    fn test_unchecked_days_mean_unavailable() {
        let form = ArtistForm::from_data(&data(&[("name", "Solo")]));
        assert!(form.to_new_artist().availability.is_empty());
    }

    #[test]
    fn test_invalid_submission_reports_fields() {
        let form = ArtistForm::from_data(&data(&[
            ("name", "X"),
            ("city", "San Francisco"),
            ("state", "ZZ"),
            ("website", "nope"),
        ]));
        let errors = form.validate().unwrap_err();
        let fields = errors.field_errors();

        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("state"));
        assert!(fields.contains_key("genres"));
        assert!(fields.contains_key("website"));
        assert!(!fields.contains_key("city"));
    }

    #[test]
    fn test_prefill_round_trips_through_form() {
        let mut new_artist = NewArtist::new("The Wild Sax Band", "San Francisco", "CA");
        new_artist.genres = vec![Genre::Jazz, Genre::Classical];
        new_artist.availability = Availability::NONE.with(Weekday::Sat, true);
        new_artist.seeking_venue = true;
        let artist = Artist::from_new(3, new_artist.clone());

        let form = ArtistForm::from_artist(&artist);
        assert_eq!(form.to_new_artist(), new_artist);
        assert!(form.genre_choices().iter().any(|c| c.value == "Jazz" && c.selected));
    }
}
