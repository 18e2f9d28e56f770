use std::sync::Arc;
use acme_booking::BookingManager;
use acme_core::repository::{BookingRepository, FlightRepository};
use acme_core::FlightService;
use acme_store::{InMemoryBookingRepository, InMemoryFlightRepository};

/// Handles shared by every request. Both services point at the same flight store.
#[derive(Clone)]
pub struct AppState {
    pub bookings: BookingManager,
    pub flights: FlightService,
}

impl AppState {
    pub fn new(flight_repo: Arc<dyn FlightRepository>, booking_repo: Arc<dyn BookingRepository>) -> Self {
        Self {
            bookings: BookingManager::new(flight_repo.clone(), booking_repo),
            flights: FlightService::new(flight_repo),
        }
    }

    /// In-memory stores loaded with the default flight fixture.
    pub fn seeded() -> Self {
        Self::new(
            Arc::new(InMemoryFlightRepository::seeded()),
            Arc::new(InMemoryBookingRepository::new()),
        )
    }
}
