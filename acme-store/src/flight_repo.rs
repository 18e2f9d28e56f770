use acme_core::repository::FlightRepository;
use acme_shared::Flight;
use async_trait::async_trait;
use chrono::{Duration, TimeZone, Utc};
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::{debug, info};

/// Fixture flights loaded at startup: three NZ domestic legs two to seven hours after
/// 2025-08-11 09:00 UTC.
pub fn default_seed() -> Vec<Flight> {
    let base = Utc
        .with_ymd_and_hms(2025, 8, 11, 9, 0, 0)
        .single()
        .expect("seed base time is a valid UTC instant");
    let at = |hours: i64| base + Duration::hours(hours);
    vec![
        Flight::new("FL001", "Wellington", "Auckland", at(2), at(3)),
        Flight::new("FL002", "Wellington", "Christchurch", at(4), at(5)),
        Flight::new("FL003", "Auckland", "Wellington", at(6), at(7)),
    ]
}

/// Seeded flight table. Each entry remembers its load position so equal departure
/// times come back in insertion order.
pub struct InMemoryFlightRepository {
    flights: RwLock<HashMap<String, (usize, Flight)>>,
}

impl InMemoryFlightRepository {
    pub fn new() -> Self {
        Self::with_flights(Vec::new())
    }

    pub fn with_flights(flights: Vec<Flight>) -> Self {
        Self {
            flights: RwLock::new(index(flights)),
        }
    }

    pub fn seeded() -> Self {
        Self::with_flights(default_seed())
    }
}

impl Default for InMemoryFlightRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn index(flights: Vec<Flight>) -> HashMap<String, (usize, Flight)> {
    flights
        .into_iter()
        .enumerate()
        .map(|(pos, flight)| (flight.id.clone(), (pos, flight)))
        .collect()
}

#[async_trait]
impl FlightRepository for InMemoryFlightRepository {
    async fn replace_all(&self, flights: Vec<Flight>) {
        let fresh = index(flights);
        info!("Loaded {} flight(s)", fresh.len());
        *self.flights.write().await = fresh;
    }

    async fn find_by_id(&self, id: &str) -> Option<Flight> {
        let flights = self.flights.read().await;
        let found = flights.get(id).map(|(_, flight)| flight.clone());
        debug!("Flight lookup {}: found={}", id, found.is_some());
        found
    }

    async fn search(&self, origin: &str, destination: &str) -> Vec<Flight> {
        let flights = self.flights.read().await;
        let mut matches: Vec<&(usize, Flight)> = flights
            .values()
            .filter(|(_, f)| f.serves_route(origin, destination))
            .collect();
        matches.sort_by(|(pa, a), (pb, b)| {
            a.departure_time.cmp(&b.departure_time).then(pa.cmp(pb))
        });
        matches.into_iter().map(|(_, f)| f.clone()).collect()
    }
}
