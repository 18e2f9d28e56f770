use async_trait::async_trait;
use acme_shared::{Booking, Flight, Passenger};

/// Flight data access. Lookups report absence with `None`; nothing here can fail.
#[async_trait]
pub trait FlightRepository: Send + Sync {
    /// Replaces every stored flight. Later entries win on duplicate ids.
    async fn replace_all(&self, flights: Vec<Flight>);

    async fn find_by_id(&self, id: &str) -> Option<Flight>;

    /// Flights whose origin and destination match ignoring case, earliest departure first.
    async fn search(&self, origin: &str, destination: &str) -> Vec<Flight>;
}

/// Booking data access. The repository owns the authoritative copy of each booking;
/// every method hands out clones.
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Inserts or overwrites the booking at its id. No validation.
    async fn save(&self, booking: Booking);

    async fn find_by_id(&self, id: &str) -> Option<Booking>;

    /// Swaps the passenger on an existing booking, leaving status and timestamp alone.
    async fn replace_passenger(&self, id: &str, passenger: Passenger) -> Option<Booking>;

    /// Moves a confirmed booking to cancelled. Cancelling twice returns the stored record as is.
    async fn cancel(&self, id: &str) -> Option<Booking>;

    async fn list_all(&self) -> Vec<Booking>;

    /// Fresh booking key.
    fn new_id(&self) -> String;
}
