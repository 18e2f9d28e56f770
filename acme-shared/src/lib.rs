pub mod models;
pub mod pii;

pub use models::{Booking, BookingStatus, Flight, Passenger};
pub use pii::Masked;
