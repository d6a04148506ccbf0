//! Closed-form generators: constant, sinusoid, standard pressure and
//! relative humidity

use crate::app::models::{MeteoData, Parameter};
use crate::app::services::algorithms::arguments::{
    convert_numbers, expect_count, expect_none, parse_keyword, parse_number,
};
use crate::app::services::algorithms::factory::FromArguments;
use crate::app::services::algorithms::{Algorithm, AlgorithmKind};
use crate::app::services::meteolaws::atmosphere;
use crate::{Error, Result};
use chrono::{DateTime, Datelike, Timelike, Utc};
use std::f64::consts::PI;
use std::str::FromStr;

// =============================================================================
// Constant Generator
// =============================================================================

/// Fill missing samples with a constant (in SI units)
///
/// ```text
/// RH::generators = CST
/// RH::CST        = 0.7
/// ```
#[derive(Debug, Clone)]
pub struct ConstGenerator {
    name: String,
    constant: f64,
}

impl FromArguments for ConstGenerator {
    fn from_arguments(args: &[String], name: &str) -> Result<Self> {
        let values = convert_numbers(name, args, 1, 1)?;
        Ok(Self {
            name: name.to_string(),
            constant: values[0],
        })
    }
}

impl Algorithm for ConstGenerator {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::Generator
    }

    fn process_one(&mut self, param: Parameter, md: &mut MeteoData) -> bool {
        if md.is_nodata(param) {
            md[param] = self.constant;
        }
        true
    }
}

// =============================================================================
// Sinusoidal Generator
// =============================================================================

/// Period of the sinusoidal generator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinPeriod {
    Yearly,
    Daily,
}

impl FromStr for SinPeriod {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, ()> {
        if s.eq_ignore_ascii_case("yearly") {
            Ok(SinPeriod::Yearly)
        } else if s.eq_ignore_ascii_case("daily") {
            Ok(SinPeriod::Daily)
        } else {
            Err(())
        }
    }
}

impl SinPeriod {
    /// Fractional position of `date` within its period, in [0, 1)
    pub fn position(self, date: DateTime<Utc>) -> f64 {
        let seconds = date.num_seconds_from_midnight() as f64 + date.nanosecond() as f64 * 1e-9;
        let day_fraction = seconds / 86_400.0;

        match self {
            SinPeriod::Daily => day_fraction,
            SinPeriod::Yearly => {
                let year = date.year();
                let leap = (year % 4 == 0 && year % 100 != 0) || year % 400 == 0;
                let days_in_year = if leap { 366.0 } else { 365.0 };
                (date.ordinal0() as f64 + day_fraction) / days_in_year
            }
        }
    }
}

/// Sinusoidal variation between a minimum and a maximum
///
/// Arguments: the period (`yearly` or `daily`), the minimum, the maximum and
/// the phase at which the minimum is reached, as a fraction of the period.
/// The example below reaches 268.26 K after 1/12 of the year:
///
/// ```text
/// TA::generators = SIN
/// TA::SIN        = yearly 268.26 285.56 0.0833
/// ```
#[derive(Debug, Clone)]
pub struct SinGenerator {
    name: String,
    period: SinPeriod,
    min: f64,
    max: f64,
    phase: f64,
}

impl SinGenerator {
    /// Value of the sinusoid at `date`
    pub fn value_at(&self, date: DateTime<Utc>) -> f64 {
        let offset = 0.5 * (self.min + self.max);
        let amplitude = 0.5 * (self.max - self.min);
        let x = self.period.position(date);
        offset - amplitude * (2.0 * PI * (x - self.phase)).cos()
    }
}

impl FromArguments for SinGenerator {
    fn from_arguments(args: &[String], name: &str) -> Result<Self> {
        expect_count(name, args, 4, 4)?;
        let period: SinPeriod = parse_keyword(name, &args[0])?;
        let min = parse_number(name, &args[1])?;
        let max = parse_number(name, &args[2])?;
        let phase = parse_number(name, &args[3])?;

        if min > max {
            return Err(Error::invalid_argument(
                name,
                format!("minimum {min} is greater than maximum {max}"),
            ));
        }
        if !(0.0..=1.0).contains(&phase) {
            return Err(Error::invalid_argument(
                name,
                format!("phase {phase} must be a fraction of the period (0 to 1)"),
            ));
        }

        Ok(Self {
            name: name.to_string(),
            period,
            min,
            max,
            phase,
        })
    }
}

impl Algorithm for SinGenerator {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::Generator
    }

    fn process_one(&mut self, param: Parameter, md: &mut MeteoData) -> bool {
        if md.is_nodata(param) {
            md[param] = self.value_at(md.date);
        }
        true
    }
}

// =============================================================================
// Standard Pressure Generator
// =============================================================================

/// Standard atmosphere pressure at the station altitude
///
/// ```text
/// P::generators = STD_PRESS
/// ```
#[derive(Debug, Clone)]
pub struct StandardPressureGenerator {
    name: String,
}

impl FromArguments for StandardPressureGenerator {
    fn from_arguments(args: &[String], name: &str) -> Result<Self> {
        expect_none(name, args)?;
        Ok(Self {
            name: name.to_string(),
        })
    }
}

impl Algorithm for StandardPressureGenerator {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::Generator
    }

    fn process_one(&mut self, param: Parameter, md: &mut MeteoData) -> bool {
        if !md.is_nodata(param) {
            return true;
        }

        let position = *md.position();
        if !position.has_altitude() {
            return false;
        }
        md[param] = atmosphere::standard_pressure(position.altitude);
        true
    }
}

// =============================================================================
// Relative Humidity Generator
// =============================================================================

/// Relative humidity from dew point (TD) or specific humidity (SH), both
/// combined with the air temperature (TA)
///
/// Specific humidity is converted with the measured pressure when available,
/// otherwise with the standard pressure at the station altitude.
///
/// ```text
/// RH::generators = RELHUM
/// ```
#[derive(Debug, Clone)]
pub struct RhGenerator {
    name: String,
}

impl RhGenerator {
    fn relative_humidity(md: &MeteoData) -> Option<f64> {
        let ta = md.value(Parameter::TA)?;

        if let Some(td) = md.value(Parameter::TD) {
            return Some(atmosphere::dew_point_to_rh(td, ta));
        }

        let sh = md.value(Parameter::SH)?;
        let pressure = match md.value(Parameter::P) {
            Some(p) => p,
            None if md.position().has_altitude() => {
                atmosphere::standard_pressure(md.position().altitude)
            }
            None => return None,
        };
        Some(atmosphere::specific_to_rh(pressure, ta, sh))
    }
}

impl FromArguments for RhGenerator {
    fn from_arguments(args: &[String], name: &str) -> Result<Self> {
        expect_none(name, args)?;
        Ok(Self {
            name: name.to_string(),
        })
    }
}

impl Algorithm for RhGenerator {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::Generator
    }

    fn process_one(&mut self, param: Parameter, md: &mut MeteoData) -> bool {
        if !md.is_nodata(param) {
            return true;
        }

        match Self::relative_humidity(md) {
            Some(rh) => {
                md[param] = rh;
                true
            }
            None => false,
        }
    }
}
