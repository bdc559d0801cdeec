//! Daily measurement types and the aggregates derived from them.

use serde::{Deserialize, Serialize};

use crate::time::DateWindow;

/// A row of the `measurement` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub id: i64,
    /// Station code this measurement belongs to.
    pub station: String,
    /// `YYYY-MM-DD`
    pub date: String,
    /// Precipitation; missing readings are stored as NULL.
    pub prcp: Option<f64>,
    /// Observed temperature.
    pub tobs: f64,
}

impl Measurement {
    pub fn new(station: impl Into<String>, date: impl Into<String>, prcp: Option<f64>, tobs: f64) -> Self {
        Self {
            id: 0,
            station: station.into(),
            date: date.into(),
            prcp,
            tobs,
        }
    }
}

/// A `(date, prcp)` pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrecipitationReading {
    pub date: String,
    pub prcp: Option<f64>,
}

/// A `(date, tobs)` pair for a single station.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemperatureObservation {
    pub date: String,
    pub tobs: f64,
}

/// Min/avg/max temperature over a date window.
///
/// All three values are `None` when no measurement falls in the window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemperatureStats {
    pub window: DateWindow,
    pub min: Option<f64>,
    pub avg: Option<f64>,
    pub max: Option<f64>,
}

impl TemperatureStats {
    pub fn empty(window: DateWindow) -> Self {
        Self {
            window,
            min: None,
            avg: None,
            max: None,
        }
    }

    /// True when the window matched no measurements.
    pub fn is_empty(&self) -> bool {
        self.min.is_none() && self.avg.is_none() && self.max.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_stats() {
        let stats = TemperatureStats::empty(DateWindow::starting("2030-01-01"));
        assert!(stats.is_empty());
        assert_eq!(stats.window.end, None);
    }

    #[test]
    fn test_populated_stats_not_empty() {
        let stats = TemperatureStats {
            window: DateWindow::between("2017-01-01", "2017-01-31"),
            min: Some(60.0),
            avg: Some(68.5),
            max: Some(77.0),
        };
        assert!(!stats.is_empty());
    }
}
