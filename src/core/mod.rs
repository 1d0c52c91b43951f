//! Core parking-lot domain: cars, slots, and allocation bookkeeping.

pub mod car;
pub mod error;
pub mod lot;

pub use car::Car;
pub use error::{AppResult, LotError};
pub use lot::{ParkingLot, DEFAULT_CAPACITY};
