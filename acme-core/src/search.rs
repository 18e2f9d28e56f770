use std::sync::Arc;
use acme_shared::Flight;
use tracing::debug;
use crate::repository::FlightRepository;
use crate::validation::require_non_blank;
use crate::CoreResult;

#[derive(Debug, Clone)]
pub struct FlightSearchRequest {
    pub origin: String,
    pub destination: String,
}

impl FlightSearchRequest {
    /// Builds a request from optional query values; both ends must be present and non-blank.
    pub fn parse(origin: Option<&str>, destination: Option<&str>) -> CoreResult<Self> {
        let origin = require_non_blank("origin", origin.unwrap_or_default())?;
        let destination = require_non_blank("destination", destination.unwrap_or_default())?;
        Ok(Self {
            origin: origin.to_string(),
            destination: destination.to_string(),
        })
    }
}

/// Read-only flight queries for the API layer.
#[derive(Clone)]
pub struct FlightService {
    flights: Arc<dyn FlightRepository>,
}

impl FlightService {
    pub fn new(flights: Arc<dyn FlightRepository>) -> Self {
        Self { flights }
    }

    pub async fn search_flights(&self, req: &FlightSearchRequest) -> Vec<Flight> {
        let results = self.flights.search(&req.origin, &req.destination).await;
        debug!(
            "Flight search {} -> {} returned {} result(s)",
            req.origin,
            req.destination,
            results.len()
        );
        results
    }

    pub async fn get_flight_by_id(&self, id: &str) -> Option<Flight> {
        self.flights.find_by_id(id).await
    }
}
