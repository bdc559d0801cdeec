//! Read-only catalog over the SQLite climate dataset.

use std::path::{Path, PathBuf};

use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    FromRow, SqlitePool,
};
use tracing::{debug, info};

use climate_common::{
    ClimateError, ClimateResult, DateWindow, PrecipitationReading, StationActivity,
    TemperatureObservation, TemperatureStats,
};

use crate::schema;

/// Connection settings for the catalog.
#[derive(Debug, Clone)]
pub struct CatalogOptions {
    /// Path to the SQLite file.
    pub path: PathBuf,
    /// Upper bound on pooled read connections.
    pub max_connections: u32,
}

impl CatalogOptions {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            max_connections: 4,
        }
    }

    pub fn with_max_connections(mut self, max_connections: u32) -> Self {
        self.max_connections = max_connections.max(1);
        self
    }
}

/// Database connection pool and the climate queries.
pub struct Catalog {
    pool: SqlitePool,
}

impl Catalog {
    /// Open the dataset read-only and verify its schema.
    ///
    /// Fails if the file does not exist or lacks a declared table or column.
    pub async fn connect(options: &CatalogOptions) -> ClimateResult<Self> {
        let catalog = Self::open(&options.path, options.max_connections).await?;
        schema::verify(&catalog.pool).await?;

        info!(path = %options.path.display(), "Opened climate database");
        Ok(catalog)
    }

    async fn open(path: &Path, max_connections: u32) -> ClimateResult<Self> {
        let connect_options = SqliteConnectOptions::new()
            .filename(path)
            .read_only(true)
            .create_if_missing(false);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(connect_options)
            .await
            .map_err(|e| {
                ClimateError::DatabaseError(format!(
                    "Connection to {} failed: {}",
                    path.display(),
                    e
                ))
            })?;

        Ok(Self { pool })
    }

    /// Close every pooled connection. Further queries fail.
    pub async fn close(&self) {
        self.pool.close().await;
    }

    /// Round-trip a trivial query.
    pub async fn ping(&self) -> ClimateResult<()> {
        if self.pool.is_closed() {
            return Err(ClimateError::ServiceUnavailable(
                "connection pool closed".to_string(),
            ));
        }

        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| ClimateError::DatabaseError(format!("Ping failed: {}", e)))?;

        Ok(())
    }

    /// Row counts and date span of the dataset.
    pub async fn summary(&self) -> ClimateResult<DatasetSummary> {
        let stations = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM station")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| ClimateError::DatabaseError(format!("Query failed: {}", e)))?;

        let (measurements, first_date, latest_date) =
            sqlx::query_as::<_, (i64, Option<String>, Option<String>)>(
                "SELECT COUNT(*), MIN(date), MAX(date) FROM measurement",
            )
            .fetch_one(&self.pool)
            .await
            .map_err(|e| ClimateError::DatabaseError(format!("Query failed: {}", e)))?;

        Ok(DatasetSummary {
            stations,
            measurements,
            first_date,
            latest_date,
        })
    }

    /// Most recent measurement date, `None` for an empty table.
    pub async fn latest_date(&self) -> ClimateResult<Option<String>> {
        sqlx::query_scalar::<_, Option<String>>("SELECT MAX(date) FROM measurement")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| ClimateError::DatabaseError(format!("Query failed: {}", e)))
    }

    /// The trailing 365-day window ending at the latest measurement.
    ///
    /// `None` when there are no measurements to anchor the window.
    pub async fn trailing_year(&self) -> ClimateResult<Option<DateWindow>> {
        match self.latest_date().await? {
            Some(latest) => {
                let window = DateWindow::trailing_year(&latest)?;
                debug!(latest = %latest, cutoff = %window.start, "Computed trailing window");
                Ok(Some(window))
            }
            None => Ok(None),
        }
    }

    /// Every `(date, prcp)` pair in the window, ordered by date then station.
    pub async fn precipitation(&self, window: &DateWindow) -> ClimateResult<Vec<PrecipitationReading>> {
        let rows = sqlx::query_as::<_, PrecipitationRow>(
            "SELECT date, prcp FROM measurement \
             WHERE date >= ?1 AND (?2 IS NULL OR date <= ?2) \
             ORDER BY date ASC, station ASC",
        )
        .bind(&window.start)
        .bind(window.end.as_deref())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ClimateError::DatabaseError(format!("Query failed: {}", e)))?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    /// All station codes, alphabetically.
    pub async fn list_station_codes(&self) -> ClimateResult<Vec<String>> {
        sqlx::query_scalar::<_, String>("SELECT DISTINCT station FROM station ORDER BY station ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| ClimateError::DatabaseError(format!("Query failed: {}", e)))
    }

    /// The station with the most measurement rows.
    ///
    /// Stations with equal counts are ordered by code, so ties go to the
    /// lowest code.
    pub async fn most_active_station(&self) -> ClimateResult<Option<StationActivity>> {
        let row = sqlx::query_as::<_, ActivityRow>(
            "SELECT station, COUNT(*) AS observations FROM measurement \
             GROUP BY station \
             ORDER BY observations DESC, station ASC \
             LIMIT 1",
        )
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| ClimateError::DatabaseError(format!("Query failed: {}", e)))?;

        Ok(row.map(|r| r.into()))
    }

    /// Temperature observations for one station in the window, by date.
    pub async fn temperature_observations(
        &self,
        station: &str,
        window: &DateWindow,
    ) -> ClimateResult<Vec<TemperatureObservation>> {
        let rows = sqlx::query_as::<_, ObservationRow>(
            "SELECT date, tobs FROM measurement \
             WHERE station = ?1 AND date >= ?2 AND (?3 IS NULL OR date <= ?3) \
             ORDER BY date ASC, id ASC",
        )
        .bind(station)
        .bind(&window.start)
        .bind(window.end.as_deref())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ClimateError::DatabaseError(format!("Query failed: {}", e)))?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    /// Min, average and max temperature over every station in the window.
    ///
    /// A window without measurements yields [`TemperatureStats::empty`].
    pub async fn temperature_stats(&self, window: &DateWindow) -> ClimateResult<TemperatureStats> {
        let (min, avg, max) = sqlx::query_as::<_, (Option<f64>, Option<f64>, Option<f64>)>(
            "SELECT MIN(tobs), AVG(tobs), MAX(tobs) FROM measurement \
             WHERE date >= ?1 AND (?2 IS NULL OR date <= ?2)",
        )
        .bind(&window.start)
        .bind(window.end.as_deref())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| ClimateError::DatabaseError(format!("Query failed: {}", e)))?;

        if avg.is_none() {
            debug!(start = %window.start, end = ?window.end, "No measurements in window");
            return Ok(TemperatureStats::empty(window.clone()));
        }

        Ok(TemperatureStats {
            window: window.clone(),
            min,
            avg,
            max,
        })
    }
}

/// Size and date span of the loaded dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetSummary {
    pub stations: i64,
    pub measurements: i64,
    pub first_date: Option<String>,
    pub latest_date: Option<String>,
}

/// Internal row types for database queries.
#[derive(FromRow)]
struct PrecipitationRow {
    date: String,
    prcp: Option<f64>,
}

impl From<PrecipitationRow> for PrecipitationReading {
    fn from(row: PrecipitationRow) -> Self {
        PrecipitationReading {
            date: row.date,
            prcp: row.prcp,
        }
    }
}

#[derive(FromRow)]
struct ObservationRow {
    date: String,
    tobs: f64,
}

impl From<ObservationRow> for TemperatureObservation {
    fn from(row: ObservationRow) -> Self {
        TemperatureObservation {
            date: row.date,
            tobs: row.tobs,
        }
    }
}

#[derive(FromRow)]
struct ActivityRow {
    station: String,
    observations: i64,
}

impl From<ActivityRow> for StationActivity {
    fn from(row: ActivityRow) -> Self {
        StationActivity {
            station: row.station,
            observations: row.observations,
        }
    }
}
