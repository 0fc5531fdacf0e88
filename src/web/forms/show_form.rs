//! Show booking form.

use chrono::NaiveDateTime;
use validator::{Validate, ValidationError};

use crate::utils::datetime::{INPUT_FORMAT, ceil_to_minute, parse_start_time};
use crate::web::forms::{Choice, FieldError, FormData};

/// Entered values of the booking form.
#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct ShowForm {
    #[validate(custom(function = "validate_artist_id"))]
    pub artist_id: String,

    #[validate(custom(function = "validate_venue_id"))]
    pub venue_id: String,

    #[validate(custom(function = "validate_start_time"))]
    pub start_time: String,
}

/// A validated booking request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShowRequest {
    pub artist_id: i64,
    pub venue_id: i64,
    pub start_time: NaiveDateTime,
}

impl ShowForm {
    /// Blank form with the start time preset to the first whole minute not before `now`.
    pub fn new(now: NaiveDateTime) -> Self {
        Self {
            start_time: ceil_to_minute(now).format(INPUT_FORMAT).to_string(),
            ..Self::default()
        }
    }

    pub fn from_data(data: &FormData) -> Self {
        Self {
            artist_id: data.value("artist_id"),
            venue_id: data.value("venue_id"),
            start_time: data.value("start_time"),
        }
    }

    /// Validates the form and checks the chosen ids against the offered choices.
    pub fn parse(
        &self,
        artists: &[Choice],
        venues: &[Choice],
    ) -> Result<ShowRequest, Vec<FieldError>> {
        if let Err(e) = self.validate() {
            return Err(super::field_errors(&e));
        }

        let mut errors = Vec::new();
        if !artists.iter().any(|c| c.value == self.artist_id) {
            errors.push(FieldError::new("artist_id", "Not a valid choice"));
        }
        if !venues.iter().any(|c| c.value == self.venue_id) {
            errors.push(FieldError::new("venue_id", "Not a valid choice"));
        }

        match (
            self.artist_id.parse(),
            self.venue_id.parse(),
            parse_start_time(&self.start_time),
        ) {
            (Ok(artist_id), Ok(venue_id), Some(start_time)) if errors.is_empty() => {
                Ok(ShowRequest {
                    artist_id,
                    venue_id,
                    start_time,
                })
            }
            _ => Err(errors),
        }
    }

    /// Choices with the entered id marked selected.
    pub fn mark(&self, choices: Vec<Choice>, field: &str) -> Vec<Choice> {
        let selected = match field {
            "artist_id" => &self.artist_id,
            _ => &self.venue_id,
        };
        choices
            .into_iter()
            .map(|c| Choice {
                selected: &c.value == selected,
                ..c
            })
            .collect()
    }
}

fn validate_id(value: &str, message: &'static str) -> Result<(), ValidationError> {
    match value.parse::<i64>() {
        Ok(id) if id > 0 => Ok(()),
        _ => Err(ValidationError::new("required").with_message(message.into())),
    }
}

fn validate_artist_id(value: &str) -> Result<(), ValidationError> {
    validate_id(value, "Please choose the artist")
}

fn validate_venue_id(value: &str) -> Result<(), ValidationError> {
    validate_id(value, "Please choose the venue")
}

fn validate_start_time(value: &str) -> Result<(), ValidationError> {
    match parse_start_time(value) {
        Some(_) => Ok(()),
        None => Err(ValidationError::new("start_time")
            .with_message("Please enter a start time as YYYY-MM-DD HH:MM".into())),
    }
}
