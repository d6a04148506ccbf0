//! Sun position and clear sky irradiance
//!
//! The radiation generators only depend on the [`SolarEphemeris`] trait. The
//! default [`SolarGeometry`] implementation uses the NOAA declination and
//! equation of time series, the Kasten and Young air mass and a broadband
//! transmittance corrected for precipitable water and ground reflection.

use super::atmosphere;
use crate::app::models::Coordinates;
use crate::constants::physics::SOLAR_CONSTANT;
use crate::constants::radiation::MIN_CLEAR_SKY_GLOBAL;
use chrono::{DateTime, Datelike, Timelike, Utc};
use std::f64::consts::PI;
use std::fmt;

/// Atmospheric conditions the clear sky irradiance depends on
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AtmosphericState {
    /// Air temperature (K)
    pub ta: f64,
    /// Relative humidity (fraction)
    pub rh: f64,
    /// Ground albedo (fraction)
    pub albedo: f64,
}

/// Sun position and the matching clear sky irradiance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunState {
    /// Solar elevation above the horizon (degrees)
    pub elevation: f64,
    /// Clear sky global irradiance on a horizontal surface (W m-2)
    pub clear_sky_global: f64,
}

impl SunState {
    /// Whether short-wave radiation can be expected
    pub fn is_day(&self) -> bool {
        self.elevation > 0.0 && self.clear_sky_global > 0.0
    }

    /// Whether the clear sky irradiance is large enough for a solar index
    ///
    /// Close to sunrise and sunset the clear sky value tends to zero and any
    /// measured short-wave radiation would be read as a full overcast.
    pub fn supports_solar_index(&self) -> bool {
        self.is_day() && self.clear_sky_global >= MIN_CLEAR_SKY_GLOBAL
    }
}

/// Ephemeris service consumed by the radiation generators
///
/// Implementations must be side-effect free.
pub trait SolarEphemeris: fmt::Debug + Send {
    /// Compute the sun state for a location and instant
    fn sun_state(
        &self,
        position: &Coordinates,
        date: DateTime<Utc>,
        atmosphere: &AtmosphericState,
    ) -> SunState;
}

/// Default ephemeris based on simple solar geometry
#[derive(Debug, Clone, Copy, Default)]
pub struct SolarGeometry;

impl SolarGeometry {
    /// Solar elevation in degrees
    pub fn elevation(position: &Coordinates, date: DateTime<Utc>) -> f64 {
        let hour = date.hour() as f64 + date.minute() as f64 / 60.0 + date.second() as f64 / 3600.0;
        let gamma = 2.0 * PI / 365.0 * (date.ordinal0() as f64 + (hour - 12.0) / 24.0);

        let declination = 0.006918 - 0.399912 * gamma.cos() + 0.070257 * gamma.sin()
            - 0.006758 * (2.0 * gamma).cos()
            + 0.000907 * (2.0 * gamma).sin()
            - 0.002697 * (3.0 * gamma).cos()
            + 0.00148 * (3.0 * gamma).sin();
        let equation_of_time = 229.18
            * (0.000075 + 0.001868 * gamma.cos()
                - 0.032077 * gamma.sin()
                - 0.014615 * (2.0 * gamma).cos()
                - 0.040849 * (2.0 * gamma).sin());

        let true_solar_minutes = hour * 60.0 + equation_of_time + 4.0 * position.longitude;
        let hour_angle = (true_solar_minutes / 4.0 - 180.0).to_radians();
        let latitude = position.latitude.to_radians();

        let cos_zenith = latitude.sin() * declination.sin()
            + latitude.cos() * declination.cos() * hour_angle.cos();
        90.0 - cos_zenith.clamp(-1.0, 1.0).acos().to_degrees()
    }

    fn clear_sky_global(
        position: &Coordinates,
        date: DateTime<Utc>,
        elevation: f64,
        atmosphere: &AtmosphericState,
    ) -> f64 {
        if elevation <= 0.0 {
            return 0.0;
        }

        let sin_elevation = elevation.to_radians().sin();
        let eccentricity = 1.0 + 0.033 * (2.0 * PI * date.ordinal() as f64 / 365.0).cos();
        let top_of_atmosphere = SOLAR_CONSTANT * eccentricity * sin_elevation;

        let air_mass = 1.0 / (sin_elevation + 0.50572 * (elevation + 6.07995).powf(-1.6364));
        let altitude = if position.has_altitude() {
            position.altitude
        } else {
            0.0
        };
        let pressure_air_mass = air_mass * (-altitude / 8434.5).exp();

        let broadband = 0.7_f64.powf(pressure_air_mass.powf(0.678));
        let water = atmosphere::precipitable_water(atmosphere.rh, atmosphere.ta);
        let water_absorption = (0.077 * (water * air_mass).powf(0.3)).min(1.0);

        let direct = top_of_atmosphere * broadband * (1.0 - water_absorption);
        let diffuse = top_of_atmosphere * (1.0 - broadband) * 0.5 * (1.0 - water_absorption);
        (direct + diffuse) / (1.0 - 0.06 * atmosphere.albedo)
    }
}

impl SolarEphemeris for SolarGeometry {
    fn sun_state(
        &self,
        position: &Coordinates,
        date: DateTime<Utc>,
        atmosphere: &AtmosphericState,
    ) -> SunState {
        let elevation = Self::elevation(position, date);
        SunState {
            elevation,
            clear_sky_global: Self::clear_sky_global(position, date, elevation, atmosphere),
        }
    }
}
