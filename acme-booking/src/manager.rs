use acme_core::repository::{BookingRepository, FlightRepository};
use acme_shared::{Booking, Passenger};
use std::sync::Arc;
use tracing::{info, warn};

/// Orchestrates the booking lifecycle: create, passenger update, cancel.
///
/// The flight check and the booking write are two separate store accesses. Flights are
/// only replaced when seeding, so the gap between them is not guarded.
#[derive(Clone)]
pub struct BookingManager {
    flights: Arc<dyn FlightRepository>,
    bookings: Arc<dyn BookingRepository>,
}

impl BookingManager {
    pub fn new(flights: Arc<dyn FlightRepository>, bookings: Arc<dyn BookingRepository>) -> Self {
        Self { flights, bookings }
    }

    /// Create a confirmed booking on an existing flight.
    pub async fn create_booking(&self, flight_id: &str, passenger: Passenger) -> Result<Booking, BookingError> {
        if self.flights.find_by_id(flight_id).await.is_none() {
            warn!("Booking rejected, unknown flight {}", flight_id);
            return Err(BookingError::FlightNotFound(flight_id.to_string()));
        }

        let booking = Booking::confirmed(self.bookings.new_id(), flight_id.to_string(), passenger);
        self.bookings.save(booking.clone()).await;

        info!("Booking confirmed: {} on {}", booking.id, booking.flight_id);
        Ok(booking)
    }

    /// Replace the passenger on a booking. Flight, timestamp and status stay as they are.
    pub async fn update_passenger(&self, booking_id: &str, passenger: Passenger) -> Result<Booking, BookingError> {
        let updated = self
            .bookings
            .replace_passenger(booking_id, passenger)
            .await
            .ok_or_else(|| BookingError::BookingNotFound(booking_id.to_string()))?;

        info!("Passenger updated on booking {}: {:?}", updated.id, updated.passenger);
        Ok(updated)
    }

    pub async fn find_by_id(&self, booking_id: &str) -> Result<Booking, BookingError> {
        self.bookings
            .find_by_id(booking_id)
            .await
            .ok_or_else(|| BookingError::BookingNotFound(booking_id.to_string()))
    }

    /// Transition: Confirmed → Cancelled. Repeating it on a cancelled booking is a no-op.
    pub async fn cancel(&self, booking_id: &str) -> Result<Booking, BookingError> {
        self.bookings
            .cancel(booking_id)
            .await
            .ok_or_else(|| BookingError::BookingNotFound(booking_id.to_string()))
    }

    pub async fn list_all(&self) -> Vec<Booking> {
        self.bookings.list_all().await
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum BookingError {
    #[error("Flight not found: {0}")]
    FlightNotFound(String),

    #[error("Booking not found: {0}")]
    BookingNotFound(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use acme_shared::BookingStatus;
    use acme_store::{InMemoryBookingRepository, InMemoryFlightRepository};

    fn manager() -> (BookingManager, Arc<InMemoryBookingRepository>) {
        let bookings = Arc::new(InMemoryBookingRepository::new());
        let manager = BookingManager::new(Arc::new(InMemoryFlightRepository::seeded()), bookings.clone());
        (manager, bookings)
    }

    fn passenger() -> Passenger {
        Passenger::new("Alex Doe", "alex@example.com", "+64-021-0000")
    }

    #[tokio::test]
    async fn test_create_booking() {
        let (manager, store) = manager();

        let booking = manager.create_booking("FL001", passenger()).await.unwrap();
        assert_eq!(booking.status, BookingStatus::Confirmed);
        assert_eq!(booking.flight_id, "FL001");
        assert!(!booking.id.is_empty());
        assert_eq!(store.find_by_id(&booking.id).await, Some(booking));
    }

    #[tokio::test]
    async fn test_create_booking_unknown_flight_stores_nothing() {
        let (manager, store) = manager();

        let err = manager.create_booking("UNKNOWN", passenger()).await.unwrap_err();
        assert_eq!(err, BookingError::FlightNotFound("UNKNOWN".to_string()));
        assert!(store.list_all().await.is_empty());
    }

    #[tokio::test]
    async fn test_booking_lifecycle() {
        let (manager, _) = manager();
        let created = manager.create_booking("FL002", passenger()).await.unwrap();

        let updated = manager
            .update_passenger(&created.id, Passenger::new("Sam Roe", "sam@example.com", "021-222"))
            .await
            .unwrap();
        assert_eq!(updated.passenger.email, "sam@example.com");
        assert_eq!(updated.flight_id, created.flight_id);
        assert_eq!(updated.booked_at, created.booked_at);
        assert_eq!(updated.status, BookingStatus::Confirmed);

        let first = manager.cancel(&created.id).await.unwrap();
        assert_eq!(first.status, BookingStatus::Cancelled);
        let second = manager.cancel(&created.id).await.unwrap();
        assert_eq!(second, first);
        assert_eq!(second.booked_at, created.booked_at);
        assert_eq!(second.passenger.name, "Sam Roe");

        assert_eq!(manager.find_by_id(&created.id).await.unwrap(), second);
        assert_eq!(manager.list_all().await.len(), 1);
    }

    #[tokio::test]
    async fn test_missing_booking_is_reported() {
        let (manager, _) = manager();
        let missing = BookingError::BookingNotFound("nope".to_string());

        assert_eq!(manager.find_by_id("nope").await.unwrap_err(), missing);
        assert_eq!(manager.cancel("nope").await.unwrap_err(), missing);
        assert_eq!(
            manager.update_passenger("nope", passenger()).await.unwrap_err(),
            missing
        );
    }
}
