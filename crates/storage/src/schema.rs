//! Static declaration of the climate dataset schema.
//!
//! The database is populated out-of-band; these declarations describe the
//! tables the service expects and are checked against the live file when the
//! catalog connects.

use sqlx::SqlitePool;
use tracing::debug;

use climate_common::{ClimateError, ClimateResult};

/// A declared column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpec {
    pub name: &'static str,
    /// Declared SQL type, informational only (SQLite uses type affinity).
    pub sql_type: &'static str,
    pub nullable: bool,
}

/// A declared table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableSchema {
    pub name: &'static str,
    pub columns: &'static [ColumnSpec],
}

const fn column(name: &'static str, sql_type: &'static str, nullable: bool) -> ColumnSpec {
    ColumnSpec {
        name,
        sql_type,
        nullable,
    }
}

pub const STATION: TableSchema = TableSchema {
    name: "station",
    columns: &[
        column("id", "INTEGER", false),
        column("station", "TEXT", false),
        column("name", "TEXT", true),
        column("latitude", "FLOAT", true),
        column("longitude", "FLOAT", true),
        column("elevation", "FLOAT", true),
    ],
};

pub const MEASUREMENT: TableSchema = TableSchema {
    name: "measurement",
    columns: &[
        column("id", "INTEGER", false),
        column("station", "TEXT", false),
        column("date", "TEXT", false),
        column("prcp", "FLOAT", true),
        column("tobs", "FLOAT", false),
    ],
};

/// Every table the service reads.
pub const TABLES: &[TableSchema] = &[STATION, MEASUREMENT];

impl TableSchema {
    /// Names of declared columns missing from `actual`.
    pub fn missing_columns(&self, actual: &[String]) -> Vec<&'static str> {
        self.columns
            .iter()
            .filter(|c| !actual.iter().any(|a| a.eq_ignore_ascii_case(c.name)))
            .map(|c| c.name)
            .collect()
    }
}

/// Check every declared table and column against the database.
///
/// Extra columns are tolerated; a missing table or column is a
/// [`ClimateError::SchemaMismatch`].
pub async fn verify(pool: &SqlitePool) -> ClimateResult<()> {
    for table in TABLES {
        let actual = sqlx::query_scalar::<_, String>("SELECT name FROM pragma_table_info(?1)")
            .bind(table.name)
            .fetch_all(pool)
            .await
            .map_err(|e| {
                ClimateError::DatabaseError(format!("Schema lookup for '{}' failed: {}", table.name, e))
            })?;

        if actual.is_empty() {
            return Err(ClimateError::SchemaMismatch(format!(
                "table '{}' not found",
                table.name
            )));
        }

        let missing = table.missing_columns(&actual);
        if !missing.is_empty() {
            return Err(ClimateError::SchemaMismatch(format!(
                "table '{}' is missing column(s): {}",
                table.name,
                missing.join(", ")
            )));
        }

        debug!(table = table.name, columns = ?actual, "Verified table schema");
    }

    Ok(())
}
