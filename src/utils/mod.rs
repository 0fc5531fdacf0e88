//! Utility functions shared across layers.
//!
//! - [`datetime`] - Show start time parsing and display
//! - [`search`] - Search term escaping

pub mod datetime;
pub mod search;
