//! Venue create/edit form.

use validator::Validate;

use crate::domain::entities::{NewVenue, Venue};
use crate::web::forms::{
    Choice, FormData, PHONE_REGEX, genre_choices, non_empty, parse_genres, state_choices,
    validate_facebook_link, validate_genres, validate_state, validate_website,
};

/// Entered values of the venue form.
#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct VenueForm {
    #[validate(length(
        min = 2,
        max = 50,
        message = "Please enter a venue name (2-50 characters)"
    ))]
    pub name: String,

    #[validate(length(
        min = 2,
        max = 50,
        message = "Please enter the venue's city (2-50 characters)"
    ))]
    pub city: String,

    #[validate(custom(function = "validate_state"))]
    pub state: String,

    #[validate(length(
        min = 10,
        max = 120,
        message = "Please enter the venue's address (10-120 characters)"
    ))]
    pub address: String,

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

    pub seeking_talent: bool,

    #[validate(length(max = 500, message = "Description must be at most 500 characters"))]
    pub seeking_description: String,
}

impl VenueForm {
    pub fn from_data(data: &FormData) -> Self {
        Self {
            name: data.value("name"),
            city: data.value("city"),
            state: data.value("state"),
            address: data.value("address"),
            phone: data.value("phone"),
            image_link: data.value("image_link"),
            genres: data.values("genres"),
            website: data.value("website"),
            facebook_link: data.value("facebook_link"),
            seeking_talent: data.checked("seeking_talent"),
            seeking_description: data.value("seeking_description"),
        }
    }

    pub fn from_venue(venue: &Venue) -> Self {
        Self {
            name: venue.name.clone(),
            city: venue.city.clone(),
            state: venue.state.clone(),
            address: venue.address.clone(),
            phone: venue.phone.clone().unwrap_or_default(),
            image_link: venue.image_link.clone().unwrap_or_default(),
            genres: venue.genres.iter().map(|g| g.to_string()).collect(),
            website: venue.website.clone().unwrap_or_default(),
            facebook_link: venue.facebook_link.clone().unwrap_or_default(),
            seeking_talent: venue.seeking_talent,
            seeking_description: venue.seeking_description.clone().unwrap_or_default(),
        }
    }

    pub fn to_new_venue(&self) -> NewVenue {
        NewVenue {
            name: self.name.clone(),
            city: self.city.clone(),
            state: self.state.clone(),
            address: self.address.clone(),
            phone: non_empty(&self.phone),
            genres: parse_genres(&self.genres),
            image_link: non_empty(&self.image_link),
            facebook_link: non_empty(&self.facebook_link),
            website: non_empty(&self.website),
            seeking_talent: self.seeking_talent,
            seeking_description: non_empty(&self.seeking_description),
        }
    }

    pub fn state_choices(&self) -> Vec<Choice> {
        state_choices(&self.state)
    }

    pub fn genre_choices(&self) -> Vec<Choice> {
        genre_choices(&self.genres)
    }
}
