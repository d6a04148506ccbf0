//! Tests for the processing chain, the data generator and its statistics

pub mod chain_tests;
pub mod stats_tests;

// Test helper functions and fixtures
use crate::app::models::{Coordinates, MeteoData, StationData};
use crate::app::services::algorithms::{Algorithm, create_algorithm};
use chrono::{DateTime, Duration, TimeZone, Utc};

/// Create a test station at a given altitude
pub fn create_test_station(id: &str, altitude: f64) -> StationData {
    StationData::new(
        id,
        "Davos",
        Coordinates {
            latitude: 46.81,
            longitude: 9.84,
            altitude,
        },
    )
}

pub fn start_date() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
}

/// Create an hourly series with every parameter missing
pub fn create_empty_series(id: &str, altitude: f64, hours: i64) -> Vec<MeteoData> {
    (0..hours)
        .map(|h| MeteoData::new(create_test_station(id, altitude), start_date() + Duration::hours(h)))
        .collect()
}

/// Create an algorithm from literal arguments
pub fn algorithm(name: &str, args: &[&str]) -> Box<dyn Algorithm> {
    let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
    create_algorithm(name, &args).unwrap()
}
