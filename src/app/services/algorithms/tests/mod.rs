//! Tests for the filters, generators and the algorithm factory
//!
//! Radiation generators are exercised with scripted ephemerides so that day
//! and night are known in advance.

pub mod factory_tests;
pub mod filter_tests;
pub mod simple_generator_tests;

// Test helper functions and fixtures
use crate::app::models::{Coordinates, MeteoData, StationData};
use crate::app::services::meteolaws::{AtmosphericState, SolarEphemeris, SunState};
use chrono::{DateTime, TimeZone, Timelike, Utc};

/// Clear sky irradiance returned by the scripted ephemerides during the day
pub const TEST_CLEAR_SKY: f64 = 800.0;

/// Convert string literals into argument tokens
pub fn tokens(args: &[&str]) -> Vec<String> {
    args.iter().map(|s| s.to_string()).collect()
}

/// Create an alpine test station
pub fn create_test_station(id: &str) -> StationData {
    StationData::new(
        id,
        "Weissfluhjoch",
        Coordinates {
            latitude: 46.83,
            longitude: 9.81,
            altitude: 2540.0,
        },
    )
}

/// Timestamp helper for test dates
pub fn test_date(year: i32, month: u32, day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, 0, 0).unwrap()
}

/// Create a sample with every parameter missing
pub fn create_test_sample(station_id: &str, date: DateTime<Utc>) -> MeteoData {
    MeteoData::new(create_test_station(station_id), date)
}

/// Ephemeris with the same sun state at any time
#[derive(Debug, Clone, Copy)]
pub struct FixedSun {
    pub elevation: f64,
    pub clear_sky_global: f64,
}

impl FixedSun {
    pub fn day() -> Self {
        Self {
            elevation: 45.0,
            clear_sky_global: TEST_CLEAR_SKY,
        }
    }

    pub fn night() -> Self {
        Self {
            elevation: -10.0,
            clear_sky_global: 0.0,
        }
    }

    pub fn state(self) -> SunState {
        SunState {
            elevation: self.elevation,
            clear_sky_global: self.clear_sky_global,
        }
    }
}

impl SolarEphemeris for FixedSun {
    fn sun_state(&self, _: &Coordinates, _: DateTime<Utc>, _: &AtmosphericState) -> SunState {
        self.state()
    }
}

/// Ephemeris with daylight from 06:00 to 17:59 UTC
#[derive(Debug, Clone, Copy, Default)]
pub struct OfficeHoursSun;

impl SolarEphemeris for OfficeHoursSun {
    fn sun_state(&self, _: &Coordinates, date: DateTime<Utc>, _: &AtmosphericState) -> SunState {
        if (6..18).contains(&date.hour()) {
            FixedSun::day().state()
        } else {
            FixedSun::night().state()
        }
    }
}

/// Assert two floats are within a tolerance
pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected} +/- {tolerance}, got {actual}"
    );
}
