//! Application constants for the gap filling framework
//!
//! This module contains the nodata sentinel, physical constants and the
//! empirical values shared by the filters and generators.

// =============================================================================
// Missing Data
// =============================================================================

/// Reserved value marking a missing measurement in any parameter slot
pub const NODATA: f64 = -999.0;

/// Check whether a value is the missing data sentinel
pub fn is_nodata(value: f64) -> bool {
    value == NODATA
}

// =============================================================================
// Physical Constants
// =============================================================================

/// Physical constants in SI units
pub mod physics {
    /// Stefan-Boltzmann constant (W m-2 K-4)
    pub const STEFAN_BOLTZMANN: f64 = 5.670_374e-8;

    /// Standard gravity (m s-2)
    pub const GRAVITY: f64 = 9.806_65;

    /// Specific gas constant of dry air (J kg-1 K-1)
    pub const GAS_CONSTANT_AIR: f64 = 287.058;

    /// Ratio of the molecular weights of water vapor and dry air
    pub const EPSILON: f64 = 0.622;

    /// Melting point of water (K)
    pub const T_WATER_FREEZING: f64 = 273.15;

    /// Triple point of water (K)
    pub const T_WATER_TRIPLE_POINT: f64 = 273.16;

    /// Solar constant (W m-2)
    pub const SOLAR_CONSTANT: f64 = 1361.0;
}

/// International Standard Atmosphere reference values
pub mod standard_atmosphere {
    /// Sea level pressure (Pa)
    pub const SEA_LEVEL_PRESSURE: f64 = 101_325.0;

    /// Sea level temperature (K)
    pub const SEA_LEVEL_TEMPERATURE: f64 = 288.15;

    /// Tropospheric lapse rate (K m-1)
    pub const LAPSE_RATE: f64 = 0.0065;
}

// =============================================================================
// Radiation Generators
// =============================================================================

/// Empirical values used by the radiation generators
pub mod radiation {
    /// Albedo of snow covered ground, used to convert RSWR into ISWR
    pub const SNOW_ALBEDO: f64 = 0.85;

    /// Albedo of snow free ground (grass)
    pub const SOIL_ALBEDO: f64 = 0.23;

    /// Snow height above which the ground is considered snow covered (m)
    pub const SNOW_THRESHOLD: f64 = 0.1;

    /// Maximum age of a cached cloudiness estimate (hours)
    pub const CLOUDINESS_STALENESS_HOURS: i64 = 24;

    /// Clear sky irradiance below which measured short-wave data is not
    /// converted into cloudiness (W m-2)
    pub const MIN_CLEAR_SKY_GLOBAL: f64 = 5.0;

    /// Air temperature used when none is measured (K)
    pub const AVERAGE_TA: f64 = 274.98;

    /// Relative humidity used when none is measured (fraction)
    pub const AVERAGE_RH: f64 = 0.666;
}

/// Choose the ground albedo from the measured snow height
pub fn ground_albedo(snow_height: f64) -> f64 {
    if !is_nodata(snow_height) && snow_height > radiation::SNOW_THRESHOLD {
        radiation::SNOW_ALBEDO
    } else {
        radiation::SOIL_ALBEDO
    }
}

// =============================================================================
// Validation Ranges
// =============================================================================

/// Valid latitude range (degrees)
pub const LATITUDE_RANGE: (f64, f64) = (-90.0, 90.0);

/// Valid longitude range (degrees)
pub const LONGITUDE_RANGE: (f64, f64) = (-180.0, 180.0);

/// Default time step used by the `synth` command (minutes)
pub const DEFAULT_SYNTH_STEP_MINUTES: i64 = 60;

/// Largest time step accepted by the `synth` command (minutes, one year)
pub const MAX_SYNTH_STEP_MINUTES: i64 = 525_600;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nodata_detection() {
        assert!(is_nodata(NODATA));
        assert!(!is_nodata(0.0));
        assert!(!is_nodata(-998.9));
    }

    #[test]
    fn test_ground_albedo_threshold() {
        assert_eq!(ground_albedo(NODATA), radiation::SOIL_ALBEDO);
        assert_eq!(ground_albedo(0.05), radiation::SOIL_ALBEDO);
        assert_eq!(ground_albedo(0.1), radiation::SOIL_ALBEDO);
        assert_eq!(ground_albedo(0.5), radiation::SNOW_ALBEDO);
    }
}
