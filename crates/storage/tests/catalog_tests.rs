//! Catalog queries against seeded SQLite fixtures.

use climate_common::{ClimateError, DateWindow};
use storage::{Catalog, CatalogOptions};
use test_utils::{assert_approx_eq, hawaii_sample, sample, DatasetBuilder};

async fn sample_catalog() -> (test_utils::ClimateFixture, Catalog) {
    let fixture = hawaii_sample().build().await;
    let catalog = Catalog::connect(&CatalogOptions::new(fixture.path()))
        .await
        .unwrap();
    (fixture, catalog)
}

// ============================================================================
// Connection and schema
// ============================================================================

#[tokio::test]
async fn test_connect_missing_file_fails() {
    let dir = test_utils::temp_test_dir_with_prefix("climate_missing");
    let options = CatalogOptions::new(dir.path().join("nope.sqlite"));

    let err = Catalog::connect(&options).await.err().unwrap();
    assert!(matches!(err, ClimateError::DatabaseError(_)));
}

#[tokio::test]
async fn test_connect_missing_table_fails() {
    let fixture = DatasetBuilder::new()
        .with_schema(&["CREATE TABLE station (id INTEGER PRIMARY KEY, station TEXT, name TEXT, \
                        latitude FLOAT, longitude FLOAT, elevation FLOAT)"])
        .build()
        .await;

    let err = Catalog::connect(&CatalogOptions::new(fixture.path()))
        .await
        .err()
        .unwrap();
    match err {
        ClimateError::SchemaMismatch(msg) => assert!(msg.contains("measurement")),
        other => panic!("Expected schema mismatch, got {other:?}"),
    }
}

#[tokio::test]
async fn test_connect_missing_column_fails() {
    let fixture = DatasetBuilder::new()
        .with_schema(&[
            "CREATE TABLE station (id INTEGER PRIMARY KEY, station TEXT, name TEXT, \
             latitude FLOAT, longitude FLOAT, elevation FLOAT)",
            "CREATE TABLE measurement (id INTEGER PRIMARY KEY, station TEXT, date TEXT, prcp FLOAT)",
        ])
        .build()
        .await;

    let err = Catalog::connect(&CatalogOptions::new(fixture.path()))
        .await
        .err()
        .unwrap();
    match err {
        ClimateError::SchemaMismatch(msg) => assert!(msg.contains("tobs")),
        other => panic!("Expected schema mismatch, got {other:?}"),
    }
}

#[tokio::test]
async fn test_ping_and_close() {
    let (_fixture, catalog) = sample_catalog().await;
    catalog.ping().await.unwrap();

    catalog.close().await;
    let err = catalog.ping().await.err().unwrap();
    assert_eq!(err.http_status_code(), 503);
}

#[tokio::test]
async fn test_summary() {
    let (_fixture, catalog) = sample_catalog().await;
    let summary = catalog.summary().await.unwrap();

    assert_eq!(summary.stations, sample::STATIONS.len() as i64);
    assert_eq!(summary.measurements, sample::MEASUREMENT_COUNT);
    assert_eq!(summary.first_date.as_deref(), Some("2010-01-01"));
    assert_eq!(summary.latest_date.as_deref(), Some(sample::LATEST_DATE));
}

// ============================================================================
// Trailing window and precipitation
// ============================================================================

#[tokio::test]
async fn test_trailing_year_window() {
    let (_fixture, catalog) = sample_catalog().await;

    assert_eq!(
        catalog.latest_date().await.unwrap().as_deref(),
        Some(sample::LATEST_DATE)
    );
    let window = catalog.trailing_year().await.unwrap().unwrap();
    assert_eq!(window, DateWindow::starting(sample::CUTOFF_DATE));
}

#[tokio::test]
async fn test_trailing_year_empty_dataset() {
    let fixture = DatasetBuilder::new().build().await;
    let catalog = Catalog::connect(&CatalogOptions::new(fixture.path()))
        .await
        .unwrap();

    assert_eq!(catalog.latest_date().await.unwrap(), None);
    assert_eq!(catalog.trailing_year().await.unwrap(), None);
}

#[tokio::test]
async fn test_precipitation_respects_cutoff() {
    let (_fixture, catalog) = sample_catalog().await;
    let window = catalog.trailing_year().await.unwrap().unwrap();
    let readings = catalog.precipitation(&window).await.unwrap();

    assert_eq!(window.start, sample::CUTOFF_DATE);
    assert!(readings.iter().all(|r| window.contains(&r.date)));
    assert!(readings.iter().any(|r| r.date == "2016-08-23"));
    assert!(!readings.iter().any(|r| r.date == "2016-08-22"));

    // Ordered by date, then station.
    let dates: Vec<_> = readings.iter().map(|r| r.date.as_str()).collect();
    let mut sorted = dates.clone();
    sorted.sort();
    assert_eq!(dates, sorted);
    assert_eq!(readings.len(), 12);
}

#[tokio::test]
async fn test_precipitation_keeps_nulls() {
    let (_fixture, catalog) = sample_catalog().await;
    let readings = catalog
        .precipitation(&DateWindow::between("2016-12-31", "2016-12-31"))
        .await
        .unwrap();

    assert_eq!(readings.len(), 1);
    assert_eq!(readings[0].prcp, None);
}

// ============================================================================
// Stations
// ============================================================================

#[tokio::test]
async fn test_station_codes_sorted() {
    let (_fixture, catalog) = sample_catalog().await;
    let codes = catalog.list_station_codes().await.unwrap();
    assert_eq!(codes, sample::STATIONS);
}

#[tokio::test]
async fn test_most_active_station() {
    let (_fixture, catalog) = sample_catalog().await;
    let busiest = catalog.most_active_station().await.unwrap().unwrap();
    assert_eq!(busiest.station, sample::MOST_ACTIVE);
    assert_eq!(busiest.observations, sample::MOST_ACTIVE_COUNT);
}

#[tokio::test]
async fn test_most_active_tie_goes_to_lowest_code() {
    let fixture = DatasetBuilder::new()
        .reading("USC00519397", "2017-01-01", Some(0.0), 70.0)
        .reading("USC00519397", "2017-01-02", Some(0.0), 71.0)
        .reading("USC00513117", "2017-01-01", Some(0.1), 69.0)
        .reading("USC00513117", "2017-01-02", Some(0.2), 68.0)
        .build()
        .await;
    let catalog = Catalog::connect(&CatalogOptions::new(fixture.path()))
        .await
        .unwrap();

    let busiest = catalog.most_active_station().await.unwrap().unwrap();
    assert_eq!(busiest.station, "USC00513117");
    assert_eq!(busiest.observations, 2);
}

#[tokio::test]
async fn test_most_active_empty_dataset() {
    let fixture = DatasetBuilder::new().build().await;
    let catalog = Catalog::connect(&CatalogOptions::new(fixture.path()))
        .await
        .unwrap();
    assert!(catalog.most_active_station().await.unwrap().is_none());
}

// ============================================================================
// Temperature
// ============================================================================

#[tokio::test]
async fn test_temperature_observations_for_station() {
    let (_fixture, catalog) = sample_catalog().await;
    let window = DateWindow::starting(sample::CUTOFF_DATE);
    let observations = catalog
        .temperature_observations(sample::MOST_ACTIVE, &window)
        .await
        .unwrap();

    let got: Vec<_> = observations
        .iter()
        .map(|o| (o.date.as_str(), o.tobs))
        .collect();
    assert_eq!(got, sample::MOST_ACTIVE_TOBS);
    assert!(observations.iter().all(|o| window.contains(&o.date)));
    assert!(!window.contains("2016-08-22"));
}

#[tokio::test]
async fn test_temperature_stats_closed_window() {
    let (_fixture, catalog) = sample_catalog().await;
    let window = DateWindow::between("2017-01-01", "2017-01-31");
    let stats = catalog.temperature_stats(&window).await.unwrap();

    let (min, avg, max) = sample::JANUARY_2017;
    assert_eq!(stats.window, window);
    assert_approx_eq!(stats.min.unwrap(), min, 1e-9);
    assert_approx_eq!(stats.avg.unwrap(), avg, 1e-9);
    assert_approx_eq!(stats.max.unwrap(), max, 1e-9);
}

#[tokio::test]
async fn test_temperature_stats_open_window() {
    let (_fixture, catalog) = sample_catalog().await;
    let stats = catalog
        .temperature_stats(&DateWindow::starting(sample::LATEST_DATE))
        .await
        .unwrap();

    let (min, avg, max) = sample::FROM_LATEST;
    assert_approx_eq!(stats.min.unwrap(), min, 1e-9);
    assert_approx_eq!(stats.avg.unwrap(), avg, 1e-9);
    assert_approx_eq!(stats.max.unwrap(), max, 1e-9);
    assert!(stats.min <= stats.avg && stats.avg <= stats.max);
}

#[tokio::test]
async fn test_temperature_stats_empty_window() {
    let (_fixture, catalog) = sample_catalog().await;
    let stats = catalog
        .temperature_stats(&DateWindow::starting("2030-01-01"))
        .await
        .unwrap();
    assert!(stats.is_empty());
    assert_eq!(stats.window.start, "2030-01-01");
}

#[tokio::test]
async fn test_unvalidated_dates_compare_as_strings() {
    let (_fixture, catalog) = sample_catalog().await;
    // "not-a-date" sorts after every digit-leading date.
    let stats = catalog
        .temperature_stats(&DateWindow::starting("not-a-date"))
        .await
        .unwrap();
    assert!(stats.is_empty());
}
