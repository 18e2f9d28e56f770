use acme_core::repository::BookingRepository;
use acme_shared::{Booking, Passenger};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

/// Bookings keyed by id. Read-modify-write operations run under a single write lock,
/// so concurrent updates to one key serialize and the last writer wins.
#[derive(Default)]
pub struct InMemoryBookingRepository {
    bookings: RwLock<HashMap<String, Booking>>,
}

impl InMemoryBookingRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookingRepository for InMemoryBookingRepository {
    async fn save(&self, booking: Booking) {
        debug!("Saving booking {}", booking.id);
        self.bookings.write().await.insert(booking.id.clone(), booking);
    }

    async fn find_by_id(&self, id: &str) -> Option<Booking> {
        self.bookings.read().await.get(id).cloned()
    }

    async fn replace_passenger(&self, id: &str, passenger: Passenger) -> Option<Booking> {
        let mut bookings = self.bookings.write().await;
        let existing = bookings.get_mut(id)?;
        let updated = existing.with_passenger(passenger);
        *existing = updated.clone();
        Some(updated)
    }

    async fn cancel(&self, id: &str) -> Option<Booking> {
        let mut bookings = self.bookings.write().await;
        let existing = bookings.get_mut(id)?;
        if existing.is_cancelled() {
            return Some(existing.clone());
        }
        let cancelled = existing.cancelled();
        *existing = cancelled.clone();
        info!("Booking {} moved to {}", id, cancelled.status);
        Some(cancelled)
    }

    async fn list_all(&self) -> Vec<Booking> {
        self.bookings.read().await.values().cloned().collect()
    }

    fn new_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use acme_shared::BookingStatus;
    use std::collections::HashSet;
    use std::sync::Arc;

    fn booking(repo: &InMemoryBookingRepository) -> Booking {
        Booking::confirmed(
            repo.new_id(),
            "FL001".to_string(),
            Passenger::new("A", "a@example.com", "021"),
        )
    }

    #[tokio::test]
    async fn test_save_and_find() {
        let repo = InMemoryBookingRepository::new();
        let b = booking(&repo);
        repo.save(b.clone()).await;

        assert_eq!(repo.find_by_id(&b.id).await, Some(b));
        assert!(repo.find_by_id("missing").await.is_none());
    }

    #[tokio::test]
    async fn test_save_overwrites_same_id() {
        let repo = InMemoryBookingRepository::new();
        let b = booking(&repo);
        repo.save(b.clone()).await;
        repo.save(b.with_passenger(Passenger::new("B", "b@example.com", "022"))).await;

        assert_eq!(repo.list_all().await.len(), 1);
        assert_eq!(repo.find_by_id(&b.id).await.unwrap().passenger.name, "B");
    }

    #[tokio::test]
    async fn test_replace_passenger_only_touches_passenger() {
        let repo = InMemoryBookingRepository::new();
        let b = booking(&repo);
        repo.save(b.clone()).await;

        let updated = repo
            .replace_passenger(&b.id, Passenger::new("New", "new@example.com", "099"))
            .await
            .unwrap();
        assert_eq!(updated.passenger.name, "New");
        assert_eq!(updated.id, b.id);
        assert_eq!(updated.flight_id, b.flight_id);
        assert_eq!(updated.booked_at, b.booked_at);
        assert_eq!(updated.status, BookingStatus::Confirmed);
        assert_eq!(repo.find_by_id(&b.id).await, Some(updated));

        assert!(repo
            .replace_passenger("missing", Passenger::new("X", "x@example.com", "0"))
            .await
            .is_none());
    }

    #[tokio::test]
    async fn test_cancel_is_idempotent() {
        let repo = InMemoryBookingRepository::new();
        let b = booking(&repo);
        repo.save(b.clone()).await;

        let first = repo.cancel(&b.id).await.unwrap();
        assert_eq!(first.status, BookingStatus::Cancelled);
        assert_eq!(first.booked_at, b.booked_at);

        let second = repo.cancel(&b.id).await.unwrap();
        assert_eq!(second, first);
        assert!(repo.cancel("missing").await.is_none());
    }

    #[tokio::test]
    async fn test_list_all_is_a_copy() {
        let repo = InMemoryBookingRepository::new();
        repo.save(booking(&repo)).await;
        repo.save(booking(&repo)).await;

        let mut all = repo.list_all().await;
        assert_eq!(all.len(), 2);
        all.clear();
        assert_eq!(repo.list_all().await.len(), 2);
    }

    #[tokio::test]
    async fn test_new_ids_are_unique() {
        let repo = InMemoryBookingRepository::new();
        let ids: HashSet<String> = (0..1000).map(|_| repo.new_id()).collect();
        assert_eq!(ids.len(), 1000);
        assert!(ids.iter().all(|id| !id.is_empty()));
    }

    #[tokio::test]
    async fn test_concurrent_cancel_and_update() {
        let repo = Arc::new(InMemoryBookingRepository::new());
        let b = booking(&repo);
        repo.save(b.clone()).await;

        let mut handles = Vec::new();
        for i in 0..32 {
            let repo = repo.clone();
            let id = b.id.clone();
            handles.push(tokio::spawn(async move {
                if i % 2 == 0 {
                    repo.cancel(&id).await
                } else {
                    let name = format!("Passenger {}", i);
                    repo.replace_passenger(&id, Passenger::new(name, "p@example.com", "021")).await
                }
            }));
        }
        for handle in handles {
            assert!(handle.await.unwrap().is_some());
        }

        let stored = repo.find_by_id(&b.id).await.unwrap();
        assert_eq!(stored.status, BookingStatus::Cancelled);
        assert_eq!(stored.booked_at, b.booked_at);
        assert_eq!(stored.flight_id, "FL001");
        assert_eq!(repo.list_all().await.len(), 1);
    }
}
