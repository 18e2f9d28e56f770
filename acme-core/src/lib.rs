pub mod repository;
pub mod search;
pub mod validation;

pub use repository::{BookingRepository, FlightRepository};
pub use search::{FlightSearchRequest, FlightService};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
