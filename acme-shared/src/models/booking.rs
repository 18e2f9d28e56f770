use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use std::fmt;
use crate::pii::Masked;

/// Booking lifecycle. Only `Confirmed -> Cancelled` is allowed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    Confirmed,
    Cancelled,
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookingStatus::Confirmed => write!(f, "CONFIRMED"),
            BookingStatus::Cancelled => write!(f, "CANCELLED"),
        }
    }
}

/// Contact details attached to a booking. Replaced wholesale, never patched.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Passenger {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl Passenger {
    pub fn new(name: impl Into<String>, email: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }
}

impl fmt::Debug for Passenger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Passenger")
            .field("name", &self.name)
            .field("email", &Masked(&self.email))
            .field("phone", &Masked(&self.phone))
            .finish()
    }
}

/// A passenger's reservation against a flight.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub flight_id: String,
    pub passenger: Passenger,
    pub booked_at: DateTime<Utc>,
    pub status: BookingStatus,
}

impl Booking {
    /// New confirmed booking stamped with the current time.
    pub fn confirmed(id: String, flight_id: String, passenger: Passenger) -> Self {
        Self {
            id,
            flight_id,
            passenger,
            booked_at: Utc::now(),
            status: BookingStatus::Confirmed,
        }
    }

    /// Same booking with a different passenger; id, flight, timestamp and status are kept.
    pub fn with_passenger(&self, passenger: Passenger) -> Self {
        Self {
            passenger,
            ..self.clone()
        }
    }

    /// Cancelled copy of this booking. Already-cancelled bookings come back unchanged.
    pub fn cancelled(&self) -> Self {
        Self {
            status: BookingStatus::Cancelled,
            ..self.clone()
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.status == BookingStatus::Cancelled
    }
}
