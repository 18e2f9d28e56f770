pub mod app_config;
pub mod booking_repo;
pub mod flight_repo;

pub use booking_repo::InMemoryBookingRepository;
pub use flight_repo::{default_seed, InMemoryFlightRepository};
