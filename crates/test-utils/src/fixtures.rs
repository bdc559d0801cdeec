//! Climate dataset fixtures.
//!
//! [`DatasetBuilder`] writes a throwaway SQLite file laid out like the
//! production `hawaii.sqlite`; [`hawaii_sample`] seeds it with a small,
//! hand-checked dataset whose expected query results are listed in
//! [`sample`].

use std::path::{Path, PathBuf};

use climate_common::{Measurement, Station};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use crate::paths::{fixture_db_path, temp_test_dir_with_prefix};

/// DDL of the production dataset.
pub const HAWAII_SCHEMA: &[&str] = &[
    "CREATE TABLE station (
        id INTEGER NOT NULL,
        station TEXT,
        name TEXT,
        latitude FLOAT,
        longitude FLOAT,
        elevation FLOAT,
        PRIMARY KEY (id)
    )",
    "CREATE TABLE measurement (
        id INTEGER NOT NULL,
        station TEXT,
        date TEXT,
        prcp FLOAT,
        tobs FLOAT,
        PRIMARY KEY (id),
        FOREIGN KEY(station) REFERENCES station (station)
    )",
];

/// A seeded database living in a temporary directory.
///
/// The file is deleted when the fixture is dropped.
pub struct ClimateFixture {
    _dir: tempfile::TempDir,
    path: PathBuf,
}

impl ClimateFixture {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Builder for [`ClimateFixture`].
#[derive(Debug, Clone)]
pub struct DatasetBuilder {
    schema: Vec<String>,
    stations: Vec<Station>,
    measurements: Vec<Measurement>,
}

impl Default for DatasetBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DatasetBuilder {
    /// Empty tables with the production schema.
    pub fn new() -> Self {
        Self {
            schema: HAWAII_SCHEMA.iter().map(|s| s.to_string()).collect(),
            stations: Vec::new(),
            measurements: Vec::new(),
        }
    }

    /// Replace the DDL, e.g. to simulate a mismatched database.
    ///
    /// Rows are only inserted into tables the custom DDL still defines
    /// with the production columns; leave them empty otherwise.
    pub fn with_schema(mut self, statements: &[&str]) -> Self {
        self.schema = statements.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn station(mut self, station: Station) -> Self {
        self.stations.push(station);
        self
    }

    pub fn measurement(mut self, measurement: Measurement) -> Self {
        self.measurements.push(measurement);
        self
    }

    /// Shorthand for a measurement row.
    pub fn reading(self, station: &str, date: &str, prcp: Option<f64>, tobs: f64) -> Self {
        self.measurement(Measurement::new(station, date, prcp, tobs))
    }

    /// Write the database file.
    pub async fn build(self) -> ClimateFixture {
        let dir = temp_test_dir_with_prefix("climate_fixture");
        let path = fixture_db_path(&dir);

        let options = SqliteConnectOptions::new()
            .filename(&path)
            .create_if_missing(true)
            .foreign_keys(false);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
            .expect("Failed to create fixture database");

        for statement in &self.schema {
            sqlx::query(statement)
                .execute(&pool)
                .await
                .expect("Failed to create fixture schema");
        }

        for (idx, station) in self.stations.iter().enumerate() {
            let id = if station.id > 0 { station.id } else { idx as i64 + 1 };
            sqlx::query(
                "INSERT INTO station (id, station, name, latitude, longitude, elevation) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            )
            .bind(id)
            .bind(&station.station)
            .bind(&station.name)
            .bind(station.latitude)
            .bind(station.longitude)
            .bind(station.elevation)
            .execute(&pool)
            .await
            .expect("Failed to insert fixture station");
        }

        for (idx, m) in self.measurements.iter().enumerate() {
            let id = if m.id > 0 { m.id } else { idx as i64 + 1 };
            sqlx::query(
                "INSERT INTO measurement (id, station, date, prcp, tobs) \
                 VALUES (?1, ?2, ?3, ?4, ?5)",
            )
            .bind(id)
            .bind(&m.station)
            .bind(&m.date)
            .bind(m.prcp)
            .bind(m.tobs)
            .execute(&pool)
            .await
            .expect("Failed to insert fixture measurement");
        }

        pool.close().await;

        ClimateFixture { _dir: dir, path }
    }
}

/// Expected results for [`hawaii_sample`].
pub mod sample {
    pub const LATEST_DATE: &str = "2017-08-23";
    pub const CUTOFF_DATE: &str = "2016-08-23";

    /// Sorted station codes, including one station without measurements.
    pub const STATIONS: &[&str] = &[
        "USC00513117",
        "USC00516128",
        "USC00517948",
        "USC00519281",
        "USC00519397",
    ];

    pub const MOST_ACTIVE: &str = "USC00519281";
    pub const MOST_ACTIVE_COUNT: i64 = 6;
    pub const MEASUREMENT_COUNT: i64 = 15;

    /// Precipitation map for the trailing year: last row per date in
    /// `(date, station)` order wins.
    pub const PRECIPITATION: &[(&str, Option<f64>)] = &[
        ("2016-08-23", Some(0.08)),
        ("2016-12-31", None),
        ("2017-01-01", Some(0.0)),
        ("2017-01-15", Some(0.0)),
        ("2017-01-20", Some(0.45)),
        ("2017-01-31", Some(0.1)),
        ("2017-02-01", Some(0.0)),
        ("2017-08-23", Some(0.0)),
    ];

    /// Trailing-year observations of [`MOST_ACTIVE`].
    pub const MOST_ACTIVE_TOBS: &[(&str, f64)] = &[
        ("2016-08-23", 77.0),
        ("2017-01-01", 64.0),
        ("2017-01-15", 70.0),
        ("2017-01-31", 72.0),
        ("2017-08-23", 79.0),
    ];

    /// Stats over `2017-01-01..=2017-01-31`.
    pub const JANUARY_2017: (f64, f64, f64) = (62.0, 67.8, 72.0);

    /// Stats from `2017-08-23` onwards.
    pub const FROM_LATEST: (f64, f64, f64) = (76.0, 236.0 / 3.0, 81.0);
}

/// Small Hawaii-like dataset with hand-checked aggregates.
pub fn hawaii_sample() -> DatasetBuilder {
    DatasetBuilder::new()
        .station(
            Station::new("USC00519397", "WAIKIKI 717.2, HI US").with_location(21.2716, -157.8168, 3.0),
        )
        .station(
            Station::new("USC00513117", "KANEOHE 838.1, HI US").with_location(21.4234, -157.8015, 14.6),
        )
        .station(
            Station::new("USC00519281", "WAIHEE 837.5, HI US").with_location(21.45167, -157.84889, 32.9),
        )
        .station(
            Station::new("USC00516128", "MANOA LYON ARBO 785.2, HI US")
                .with_location(21.3331, -157.8025, 152.4),
        )
        .station(
            Station::new("USC00517948", "PEARL CITY, HI US").with_location(21.3934, -157.9751, 11.9),
        )
        // Most active station: six rows.
        .reading("USC00519281", "2016-08-22", Some(0.8), 76.0)
        .reading("USC00519281", "2016-08-23", Some(1.79), 77.0)
        .reading("USC00519281", "2017-01-01", Some(0.29), 64.0)
        .reading("USC00519281", "2017-01-15", Some(0.0), 70.0)
        .reading("USC00519281", "2017-01-31", Some(0.1), 72.0)
        .reading("USC00519281", "2017-08-23", Some(0.0), 79.0)
        .reading("USC00519397", "2016-08-23", Some(0.08), 81.0)
        .reading("USC00519397", "2017-01-01", Some(0.0), 62.0)
        .reading("USC00519397", "2017-02-01", Some(0.0), 66.0)
        .reading("USC00519397", "2017-08-23", Some(0.0), 81.0)
        .reading("USC00513117", "2010-01-01", Some(0.08), 65.0)
        .reading("USC00513117", "2016-12-31", None, 68.0)
        .reading("USC00513117", "2017-01-20", Some(0.45), 71.0)
        .reading("USC00516128", "2016-08-22", None, 73.0)
        .reading("USC00516128", "2017-08-23", Some(0.45), 76.0)
}
