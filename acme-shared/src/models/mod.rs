pub mod booking;
pub mod flight;

pub use booking::{Booking, BookingStatus, Passenger};
pub use flight::Flight;
