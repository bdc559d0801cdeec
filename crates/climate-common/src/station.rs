//! Weather station types.

use serde::{Deserialize, Serialize};

/// A row of the `station` table.
///
/// Only `station` (the code) is served by the API; the remaining columns are
/// carried so the type matches the stored schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    pub id: i64,
    pub station: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub elevation: f64,
}

impl Station {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: 0,
            station: code.into(),
            name: name.into(),
            latitude: 0.0,
            longitude: 0.0,
            elevation: 0.0,
        }
    }

    pub fn with_location(mut self, latitude: f64, longitude: f64, elevation: f64) -> Self {
        self.latitude = latitude;
        self.longitude = longitude;
        self.elevation = elevation;
        self
    }
}

/// Number of measurement rows recorded by a station.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StationActivity {
    pub station: String,
    pub observations: i64,
}
