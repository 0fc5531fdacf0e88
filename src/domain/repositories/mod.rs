//! Repository trait definitions for the domain layer.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`ArtistRepository`] - Artist CRUD and search
//! - [`VenueRepository`] - Venue CRUD, search and area listing
//! - [`ShowRepository`] - Show booking and listings

pub mod artist_repository;
pub mod show_repository;
pub mod venue_repository;

pub use artist_repository::ArtistRepository;
pub use show_repository::ShowRepository;
pub use venue_repository::VenueRepository;

#[cfg(test)]
pub use artist_repository::MockArtistRepository;
#[cfg(test)]
pub use show_repository::MockShowRepository;
#[cfg(test)]
pub use venue_repository::MockVenueRepository;
