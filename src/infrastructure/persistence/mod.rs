//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx with
//! bound parameters and `FromRow` row types.
//!
//! # Repositories
//!
//! - [`PgArtistRepository`] - Artist storage, search and availability
//! - [`PgVenueRepository`] - Venue storage, search and area listing
//! - [`PgShowRepository`] - Show booking and joined listings

pub mod pg_artist_repository;
pub mod pg_show_repository;
pub mod pg_venue_repository;

pub use pg_artist_repository::PgArtistRepository;
pub use pg_show_repository::PgShowRepository;
pub use pg_venue_repository::PgVenueRepository;
