//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::application::services::{ArtistService, BookingService, VenueService};
use crate::domain::repositories::{ArtistRepository, ShowRepository, VenueRepository};
use crate::domain::scheduling::Clock;

#[derive(Clone)]
pub struct AppState {
    pub artist_service: Arc<ArtistService>,
    pub venue_service: Arc<VenueService>,
    pub booking_service: Arc<BookingService>,
}

impl AppState {
    /// Wires the services over the given repositories and clock.
    pub fn new(
        artists: Arc<dyn ArtistRepository>,
        venues: Arc<dyn VenueRepository>,
        shows: Arc<dyn ShowRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let artist_service = Arc::new(ArtistService::new(
            artists.clone(),
            shows.clone(),
            clock.clone(),
        ));
        let venue_service = Arc::new(VenueService::new(
            venues.clone(),
            shows.clone(),
            clock.clone(),
        ));
        let booking_service = Arc::new(BookingService::new(artists, venues, shows, clock));

        Self {
            artist_service,
            venue_service,
            booking_service,
        }
    }
}
