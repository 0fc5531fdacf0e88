//! Core domain entities representing the directory's data model.
//!
//! # Entity Types
//!
//! - [`Artist`] - A performer with a weekly availability profile
//! - [`Venue`] - A place hosting shows
//! - [`Show`] - An artist booked at a venue at a start time
//!
//! Creation inputs use separate structs (`NewArtist`, `NewVenue`, `NewShow`).

pub mod artist;
pub mod genre;
pub mod show;
pub mod us_state;
pub mod venue;

pub use artist::{Artist, NewArtist};
pub use genre::Genre;
pub use show::{NewShow, Show, ShowListing, ShowTimeline};
pub use us_state::{US_STATES, is_us_state};
pub use venue::{NewVenue, Venue, VenueArea, VenueSummary};
