//! HTML form parsing and validation.
//!
//! Forms arrive as `application/x-www-form-urlencoded` bodies and are
//! extracted as raw key/value pairs so that repeated keys (the genre
//! multi-select) survive. Each form keeps the entered text for re-rendering
//! and validates with `validator`.

pub mod artist_form;
pub mod show_form;
pub mod venue_form;

pub use artist_form::ArtistForm;
pub use show_form::ShowForm;
pub use venue_form::VenueForm;

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

use validator::{ValidateUrl, ValidationError, ValidationErrors};

use crate::domain::entities::{Genre, US_STATES, is_us_state};

/// US phone number `xxx-xxx-xxxx`; the field may be left empty.
pub(crate) static PHONE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{3}-\d{3}-\d{4})?$").unwrap());

/// Raw urlencoded form body.
#[derive(Debug, Clone, Default)]
pub struct FormData(Vec<(String, String)>);

impl FormData {
    pub fn new(pairs: Vec<(String, String)>) -> Self {
        Self(pairs)
    }

    /// First value for `key`, trimmed; empty if absent.
    pub fn value(&self, key: &str) -> String {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.trim().to_string())
            .unwrap_or_default()
    }

    /// Every non-empty value submitted for `key`, in order.
    pub fn values(&self, key: &str) -> Vec<String> {
        self.0
            .iter()
            .filter(|(k, v)| k == key && !v.trim().is_empty())
            .map(|(_, v)| v.trim().to_string())
            .collect()
    }

    /// Checkbox state: present with any value other than `false`.
    pub fn checked(&self, key: &str) -> bool {
        self.0
            .iter()
            .any(|(k, v)| k == key && !v.is_empty() && v != "false")
    }
}

/// A validation message attached to a form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Flattens `validator` output into field messages sorted by field name.
pub fn field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut out: Vec<FieldError> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                let message = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value for {}", field));
                FieldError::new(field.to_string(), message)
            })
        })
        .collect();

    out.sort_by(|a, b| a.field.cmp(&b.field));
    out
}

/// An `<option>` or checkbox in a rendered form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

impl Choice {
    pub fn new(value: impl Into<String>, label: impl Into<String>, selected: bool) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            selected,
        }
    }
}

pub(crate) fn state_choices(selected: &str) -> Vec<Choice> {
    US_STATES
        .iter()
        .map(|code| Choice::new(*code, *code, *code == selected))
        .collect()
}

pub(crate) fn genre_choices(selected: &[String]) -> Vec<Choice> {
    Genre::ALL
        .iter()
        .map(|g| Choice::new(g.as_str(), g.as_str(), selected.iter().any(|s| s == g.as_str())))
        .collect()
}

/// Parses submitted genre names; call only after [`validate_genres`] passed.
pub(crate) fn parse_genres(names: &[String]) -> Vec<Genre> {
    names.iter().filter_map(|n| n.parse().ok()).collect()
}

pub(crate) fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

fn error(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

pub(crate) fn validate_state(value: &str) -> Result<(), ValidationError> {
    if is_us_state(value) {
        Ok(())
    } else {
        Err(error("state", "Please select a valid state"))
    }
}

pub(crate) fn validate_genres(values: &[String]) -> Result<(), ValidationError> {
    if values.is_empty() {
        return Err(error("genres", "Please select at least one genre"));
    }
    if values.iter().any(|v| v.parse::<Genre>().is_err()) {
        return Err(error("genres", "Please select genres from the list"));
    }
    if values.join(", ").len() > 150 {
        return Err(error("genres", "Too many genres selected"));
    }
    Ok(())
}

fn validate_optional_url(value: &str, min: usize) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Ok(());
    }
    if !value.validate_url() {
        return Err(error("url", "Please enter a valid URL"));
    }
    let len = value.chars().count();
    if len < min || len > 120 {
        return Err(error("length", "URL length is out of range"));
    }
    Ok(())
}

pub(crate) fn validate_website(value: &str) -> Result<(), ValidationError> {
    validate_optional_url(value, 10)
}

pub(crate) fn validate_facebook_link(value: &str) -> Result<(), ValidationError> {
    validate_optional_url(value, 15)
}
