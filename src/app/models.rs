//! Data models for gap filling
//!
//! This module contains the core data structures for representing station
//! metadata and the per-instant samples the filters and generators work on.
//! All values are stored in SI units.

use crate::constants::{self, NODATA};
use crate::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

// =============================================================================
// Meteorological Parameter Index
// =============================================================================

/// Meteorological parameters carried by every sample
///
/// The declaration order is the order in which the parameters are processed,
/// so that a parameter generated early (e.g. ISWR) is available as a side input
/// to the generators of a later one (e.g. ILWR).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Parameter {
    /// Air pressure (Pa)
    P,
    /// Air temperature (K)
    TA,
    /// Relative humidity (fraction, 0 to 1)
    RH,
    /// Dew point temperature (K)
    TD,
    /// Specific humidity (kg kg-1)
    SH,
    /// Snow height (m)
    HS,
    /// Snow water equivalent (kg m-2)
    SWE,
    /// Reflected short-wave radiation (W m-2)
    RSWR,
    /// Incoming short-wave radiation (W m-2)
    ISWR,
    /// Incoming long-wave radiation (W m-2)
    ILWR,
    /// Measured cloud fraction (fraction, 0 to 1)
    CLD,
}

impl Parameter {
    /// Number of parameters in each sample
    pub const COUNT: usize = 11;

    /// All parameters in processing order
    pub const ALL: [Parameter; Parameter::COUNT] = [
        Parameter::P,
        Parameter::TA,
        Parameter::RH,
        Parameter::TD,
        Parameter::SH,
        Parameter::HS,
        Parameter::SWE,
        Parameter::RSWR,
        Parameter::ISWR,
        Parameter::ILWR,
        Parameter::CLD,
    ];

    /// Slot of this parameter in the sample's value array
    pub fn index(self) -> usize {
        self as usize
    }

    /// Configuration key of this parameter
    pub fn as_str(self) -> &'static str {
        match self {
            Parameter::P => "P",
            Parameter::TA => "TA",
            Parameter::RH => "RH",
            Parameter::TD => "TD",
            Parameter::SH => "SH",
            Parameter::HS => "HS",
            Parameter::SWE => "SWE",
            Parameter::RSWR => "RSWR",
            Parameter::ISWR => "ISWR",
            Parameter::ILWR => "ILWR",
            Parameter::CLD => "CLD",
        }
    }

    /// Human-readable description including the unit
    pub fn description(self) -> &'static str {
        match self {
            Parameter::P => "air pressure (Pa)",
            Parameter::TA => "air temperature (K)",
            Parameter::RH => "relative humidity (0-1)",
            Parameter::TD => "dew point temperature (K)",
            Parameter::SH => "specific humidity (kg/kg)",
            Parameter::HS => "snow height (m)",
            Parameter::SWE => "snow water equivalent (kg/m2)",
            Parameter::RSWR => "reflected short-wave radiation (W/m2)",
            Parameter::ISWR => "incoming short-wave radiation (W/m2)",
            Parameter::ILWR => "incoming long-wave radiation (W/m2)",
            Parameter::CLD => "cloud fraction (0-1)",
        }
    }
}

impl FromStr for Parameter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim();
        Parameter::ALL
            .iter()
            .copied()
            .find(|param| param.as_str().eq_ignore_ascii_case(key))
            .ok_or_else(|| Error::unknown_parameter(key))
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Station Metadata
// =============================================================================

/// Geographic position of a station in WGS84
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude in decimal degrees
    pub latitude: f64,

    /// Longitude in decimal degrees
    pub longitude: f64,

    /// Altitude above sea level in meters, NODATA when unknown
    pub altitude: f64,
}

impl Coordinates {
    /// Create new coordinates with validation
    pub fn new(latitude: f64, longitude: f64, altitude: f64) -> Result<Self> {
        let coords = Self {
            latitude,
            longitude,
            altitude,
        };
        coords.validate()?;
        Ok(coords)
    }

    /// Validate coordinate ranges
    pub fn validate(&self) -> Result<()> {
        let (lat_min, lat_max) = constants::LATITUDE_RANGE;
        if !(lat_min..=lat_max).contains(&self.latitude) {
            return Err(Error::data_validation(format!(
                "Invalid latitude {}: must be between {} and {} degrees",
                self.latitude, lat_min, lat_max
            )));
        }

        let (lon_min, lon_max) = constants::LONGITUDE_RANGE;
        if !(lon_min..=lon_max).contains(&self.longitude) {
            return Err(Error::data_validation(format!(
                "Invalid longitude {}: must be between {} and {} degrees",
                self.longitude, lon_min, lon_max
            )));
        }

        Ok(())
    }

    /// Check whether the altitude is known
    pub fn has_altitude(&self) -> bool {
        !constants::is_nodata(self.altitude) && self.altitude.is_finite()
    }
}

/// Static description of a measuring station
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationData {
    /// Unique station identifier, used as key for per-station state
    pub id: String,

    /// Human-readable station name
    pub name: String,

    /// Station position
    pub position: Coordinates,
}

impl StationData {
    /// Create a new station description
    pub fn new(id: impl Into<String>, name: impl Into<String>, position: Coordinates) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            position,
        }
    }
}

// =============================================================================
// Sample
// =============================================================================

/// One station's observation at one instant
///
/// Every parameter slot holds either a value in SI units or [`NODATA`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeteoData {
    /// Timestamp of the observation
    pub date: DateTime<Utc>,

    /// Station the observation belongs to
    pub station: StationData,

    values: [f64; Parameter::COUNT],
}

impl MeteoData {
    /// Create a sample with every parameter missing
    pub fn new(station: StationData, date: DateTime<Utc>) -> Self {
        Self {
            date,
            station,
            values: [NODATA; Parameter::COUNT],
        }
    }

    /// Builder-style setter, convenient for assembling samples
    pub fn with(mut self, param: Parameter, value: f64) -> Self {
        self.set(param, value);
        self
    }

    /// Get the value of a parameter (may be NODATA)
    pub fn get(&self, param: Parameter) -> f64 {
        self.values[param.index()]
    }

    /// Get the value of a parameter if it is present
    pub fn value(&self, param: Parameter) -> Option<f64> {
        let value = self.get(param);
        (!constants::is_nodata(value)).then_some(value)
    }

    /// Set the value of a parameter
    pub fn set(&mut self, param: Parameter, value: f64) {
        self.values[param.index()] = value;
    }

    /// Mark a parameter as missing
    pub fn clear(&mut self, param: Parameter) {
        self.set(param, NODATA);
    }

    /// Check whether a parameter is missing
    pub fn is_nodata(&self, param: Parameter) -> bool {
        constants::is_nodata(self.get(param))
    }

    /// Station position shortcut
    pub fn position(&self) -> &Coordinates {
        &self.station.position
    }

    /// Count missing values for a parameter over a series
    pub fn count_nodata(series: &[MeteoData], param: Parameter) -> usize {
        series.iter().filter(|md| md.is_nodata(param)).count()
    }
}

impl Index<Parameter> for MeteoData {
    type Output = f64;

    fn index(&self, param: Parameter) -> &f64 {
        &self.values[param.index()]
    }
}

impl IndexMut<Parameter> for MeteoData {
    fn index_mut(&mut self, param: Parameter) -> &mut f64 {
        &mut self.values[param.index()]
    }
}
