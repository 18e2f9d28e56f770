use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

/// A scheduled route entry. Seeded at startup and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Flight {
    pub id: String,
    pub origin: String,
    pub destination: String,
    pub departure_time: DateTime<Utc>,
    pub arrival_time: DateTime<Utc>,
}

impl Flight {
    pub fn new(
        id: impl Into<String>,
        origin: impl Into<String>,
        destination: impl Into<String>,
        departure_time: DateTime<Utc>,
        arrival_time: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            origin: origin.into(),
            destination: destination.into(),
            departure_time,
            arrival_time,
        }
    }

    /// Case-insensitive exact match on both route ends.
    pub fn serves_route(&self, origin: &str, destination: &str) -> bool {
        self.origin.to_lowercase() == origin.to_lowercase()
            && self.destination.to_lowercase() == destination.to_lowercase()
    }
}
