//! Business logic services for the application layer.

pub mod artist_service;
pub mod booking_service;
pub mod venue_service;

pub use artist_service::{ArtistProfile, ArtistService};
pub use booking_service::BookingService;
pub use venue_service::{VenueProfile, VenueService};

/// Search hits with their count.
#[derive(Debug, Clone)]
pub struct SearchResults<T> {
    pub count: usize,
    pub items: Vec<T>,
}

impl<T> SearchResults<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            count: items.len(),
            items,
        }
    }
}
