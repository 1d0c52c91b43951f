//! Configuration models for the lot and the application.

pub mod lot;

pub use lot::{AppConfig, LotConfig};
