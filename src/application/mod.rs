//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers.
//!
//! # Available Services
//!
//! - [`services::ArtistService`] - Artist listing, search, profiles and edits
//! - [`services::VenueService`] - Venue listing by area, search, profiles and edits
//! - [`services::BookingService`] - Show admissibility checks and booking

pub mod services;
