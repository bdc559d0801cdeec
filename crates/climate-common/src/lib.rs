//! Common types and utilities shared across the climate service crates.

pub mod error;
pub mod measurement;
pub mod station;
pub mod time;

pub use error::{ClimateError, ClimateResult};
pub use measurement::{Measurement, PrecipitationReading, TemperatureObservation, TemperatureStats};
pub use station::{Station, StationActivity};
pub use time::{DateWindow, TimeParseError, DATE_FORMAT, ROLLING_WINDOW_DAYS};
