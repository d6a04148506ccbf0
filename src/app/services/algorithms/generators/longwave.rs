//! Incoming long-wave radiation generators
//!
//! - [`ClearSkyLwGenerator`] assumes a cloudless sky and only needs air
//!   temperature and relative humidity.
//! - [`AllSkyLwGenerator`] corrects the emissivity for cloudiness, estimated
//!   from measured short-wave radiation and remembered per station for up to
//!   one day.
//!
//! It is recommended to declare a clear sky generator after the all sky one,
//! so that samples the latter cannot handle still get a value.

use crate::app::models::{MeteoData, Parameter};
use crate::app::services::algorithms::arguments::{expect_count, parse_keyword};
use crate::app::services::algorithms::factory::FromArguments;
use crate::app::services::algorithms::{Algorithm, AlgorithmKind};
use crate::app::services::meteolaws::{AtmosphericState, SolarEphemeris, SolarGeometry, atmosphere};
use crate::constants::{self, radiation::CLOUDINESS_STALENESS_HOURS};
use crate::Result;
use chrono::{DateTime, Datelike, Duration, Utc};
use std::collections::HashMap;
use std::str::FromStr;
use tracing::debug;

// =============================================================================
// Parametrizations
// =============================================================================

/// Clear sky parametrizations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearSkyModel {
    /// Brutsaert (1975)
    Brutsaert,
    /// Dilley and O'Brien (1998)
    Dilley,
    /// Prata (1996)
    Prata,
    /// Clark and Allen (1978)
    Clark,
    /// Tang et al. (2004)
    Tang,
    /// Idso (1981)
    Idso,
}

impl FromStr for ClearSkyModel {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, ()> {
        match s.to_ascii_uppercase().as_str() {
            "BRUTSAERT" => Ok(ClearSkyModel::Brutsaert),
            "DILLEY" => Ok(ClearSkyModel::Dilley),
            "PRATA" => Ok(ClearSkyModel::Prata),
            "CLARK" => Ok(ClearSkyModel::Clark),
            "TANG" => Ok(ClearSkyModel::Tang),
            "IDSO" => Ok(ClearSkyModel::Idso),
            _ => Err(()),
        }
    }
}

impl ClearSkyModel {
    /// Clear sky incoming long-wave radiation
    pub fn ilwr(self, rh: f64, ta: f64) -> f64 {
        let emissivity = match self {
            ClearSkyModel::Dilley => return atmosphere::dilley_ilwr(rh, ta),
            ClearSkyModel::Brutsaert => atmosphere::brutsaert_emissivity(rh, ta),
            ClearSkyModel::Prata => atmosphere::prata_emissivity(rh, ta),
            ClearSkyModel::Clark => atmosphere::clark_emissivity(rh, ta),
            ClearSkyModel::Tang => atmosphere::tang_emissivity(rh, ta),
            ClearSkyModel::Idso => atmosphere::idso_emissivity(rh, ta),
        };
        emissivity * atmosphere::blackbody(ta)
    }
}

/// All sky parametrizations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllSkyModel {
    /// Omstedt (1990)
    Omstedt,
    /// Konzelmann et al. (1994)
    Konzelmann,
    /// Unsworth and Monteith (1975), clear sky after Dilley and O'Brien
    Unsworth,
    /// Crawford and Duchon (1999)
    Crawford,
}

impl FromStr for AllSkyModel {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, ()> {
        match s.to_ascii_uppercase().as_str() {
            "OMSTEDT" => Ok(AllSkyModel::Omstedt),
            "KONZELMANN" => Ok(AllSkyModel::Konzelmann),
            "UNSWORTH" => Ok(AllSkyModel::Unsworth),
            "CRAWFORD" => Ok(AllSkyModel::Crawford),
            _ => Err(()),
        }
    }
}

impl AllSkyModel {
    /// All sky incoming long-wave radiation
    pub fn ilwr(self, rh: f64, ta: f64, date: DateTime<Utc>, cloudiness: f64) -> f64 {
        match self {
            AllSkyModel::Omstedt => atmosphere::omstedt_ilwr(rh, ta, cloudiness),
            AllSkyModel::Konzelmann => atmosphere::konzelmann_ilwr(rh, ta, cloudiness),
            AllSkyModel::Unsworth => atmosphere::unsworth_ilwr(rh, ta, cloudiness),
            AllSkyModel::Crawford => atmosphere::crawford_ilwr(rh, ta, date.month(), cloudiness),
        }
    }
}

/// Conversion of the solar index into a cloud fraction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloudinessMethod {
    /// Kasten and Czeplak (1980)
    Kasten,
    /// Crawford and Duchon (1999)
    Crawford,
}

impl FromStr for CloudinessMethod {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, ()> {
        match s.to_ascii_uppercase().as_str() {
            "KASTEN" => Ok(CloudinessMethod::Kasten),
            "CRAWFORD" => Ok(CloudinessMethod::Crawford),
            _ => Err(()),
        }
    }
}

impl CloudinessMethod {
    /// Cloud fraction from the solar index
    pub fn cloudiness(self, solar_index: f64) -> f64 {
        match self {
            CloudinessMethod::Kasten => atmosphere::kasten_cloudiness(solar_index),
            CloudinessMethod::Crawford => atmosphere::crawford_cloudiness(solar_index),
        }
    }
}

// =============================================================================
// Clear Sky Generator
// =============================================================================

/// Clear sky incoming long-wave radiation from TA and RH
///
/// This significantly underestimates ILWR for energy balance modeling.
///
/// ```text
/// ILWR::generators  = CLEARSKY_LW
/// ILWR::CLEARSKY_LW = DILLEY
/// ```
#[derive(Debug, Clone)]
pub struct ClearSkyLwGenerator {
    name: String,
    model: ClearSkyModel,
}

impl ClearSkyLwGenerator {
    /// Selected parametrization
    pub fn model(&self) -> ClearSkyModel {
        self.model
    }
}

impl FromArguments for ClearSkyLwGenerator {
    fn from_arguments(args: &[String], name: &str) -> Result<Self> {
        expect_count(name, args, 1, 1)?;
        Ok(Self {
            name: name.to_string(),
            model: parse_keyword(name, &args[0])?,
        })
    }
}

impl Algorithm for ClearSkyLwGenerator {
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

        match (md.value(Parameter::TA), md.value(Parameter::RH)) {
            (Some(ta), Some(rh)) => {
                md[param] = self.model.ilwr(rh, ta);
                true
            }
            _ => false,
        }
    }
}

// =============================================================================
// All Sky Generator
// =============================================================================

/// Last cloudiness estimate of a station
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CloudinessEstimate {
    /// Time of the sample the estimate was computed for
    pub date: DateTime<Utc>,
    /// Cloud fraction (0 to 1)
    pub cloudiness: f64,
}

impl CloudinessEstimate {
    /// Whether the estimate may still be used at `date`
    pub fn is_fresh_at(&self, date: DateTime<Utc>) -> bool {
        date.signed_duration_since(self.date) <= Duration::hours(CLOUDINESS_STALENESS_HOURS)
    }
}

/// Where the cloudiness of a sample came from
#[derive(Debug, Clone, Copy, PartialEq)]
enum CloudinessSource {
    Measured(f64),
    ShortWave(f64),
    Unavailable,
}

/// All sky incoming long-wave radiation from TA, RH and cloudiness
///
/// Arguments: the parametrization (`OMSTEDT`, `KONZELMANN`, `UNSWORTH` or
/// `CRAWFORD`) and optionally the conversion of the solar index into cloud
/// fraction (`KASTEN` or `CRAWFORD`, defaulting to Crawford for the Crawford
/// model and Kasten otherwise).
///
/// The cloudiness is taken, by priority, from a measured cloud fraction, from
/// the solar index (measured ISWR, or RSWR over a snow or grass albedo,
/// divided by the clear sky potential), from the station's last estimate if
/// it is at most one day old, or assumed zero. Short-wave data is ignored at
/// night and while the sun is too low for a meaningful clear sky potential.
/// Each fresh short-wave estimate replaces the station's cached one.
///
/// ```text
/// ILWR::generators = ALLSKY_LW CLEARSKY_LW
/// ILWR::ALLSKY_LW  = OMSTEDT
/// ```
#[derive(Debug)]
pub struct AllSkyLwGenerator<E: SolarEphemeris = SolarGeometry> {
    name: String,
    model: AllSkyModel,
    cloudiness_method: CloudinessMethod,
    ephemeris: E,
    last_cloudiness: HashMap<String, CloudinessEstimate>,
}

impl<E: SolarEphemeris> AllSkyLwGenerator<E> {
    /// Build the generator with a specific ephemeris service
    pub fn with_ephemeris(args: &[String], name: &str, ephemeris: E) -> Result<Self> {
        expect_count(name, args, 1, 2)?;
        let model: AllSkyModel = parse_keyword(name, &args[0])?;
        let cloudiness_method = match args.get(1) {
            Some(token) => parse_keyword(name, token)?,
            None if model == AllSkyModel::Crawford => CloudinessMethod::Crawford,
            None => CloudinessMethod::Kasten,
        };

        Ok(Self {
            name: name.to_string(),
            model,
            cloudiness_method,
            ephemeris,
            last_cloudiness: HashMap::new(),
        })
    }

    /// Selected parametrization
    pub fn model(&self) -> AllSkyModel {
        self.model
    }

    /// Selected solar index conversion
    pub fn cloudiness_method(&self) -> CloudinessMethod {
        self.cloudiness_method
    }

    /// Cached cloudiness of a station, regardless of its age
    pub fn cached_cloudiness(&self, station_id: &str) -> Option<CloudinessEstimate> {
        self.last_cloudiness.get(station_id).copied()
    }

    fn estimate_cloudiness(&self, md: &MeteoData, ta: f64, rh: f64) -> CloudinessSource {
        if let Some(cld) = md.value(Parameter::CLD) {
            if (0.0..=1.0).contains(&cld) {
                return CloudinessSource::Measured(cld);
            }
        }

        let hs = md.get(Parameter::HS);
        let albedo = constants::ground_albedo(hs);
        let sun = self.ephemeris.sun_state(
            md.position(),
            md.date,
            &AtmosphericState { ta, rh, albedo },
        );
        if !sun.supports_solar_index() {
            return CloudinessSource::Unavailable;
        }

        let iswr = md.value(Parameter::ISWR).or_else(|| {
            let rswr = md.value(Parameter::RSWR)?;
            md.value(Parameter::HS)?;
            Some(rswr / albedo)
        });

        match iswr {
            Some(iswr) => {
                let solar_index = (iswr / sun.clear_sky_global).clamp(0.0, 1.0);
                CloudinessSource::ShortWave(self.cloudiness_method.cloudiness(solar_index))
            }
            None => CloudinessSource::Unavailable,
        }
    }

    /// Fill one sample, carrying the station's last estimate in `last`
    fn generate(
        &self,
        param: Parameter,
        md: &mut MeteoData,
        last: &mut Option<CloudinessEstimate>,
    ) -> bool {
        if !md.is_nodata(param) {
            return true;
        }

        let (Some(ta), Some(rh)) = (md.value(Parameter::TA), md.value(Parameter::RH)) else {
            return false;
        };

        let cloudiness = match self.estimate_cloudiness(md, ta, rh) {
            CloudinessSource::Measured(cloudiness) => cloudiness,
            CloudinessSource::ShortWave(cloudiness) => {
                *last = Some(CloudinessEstimate {
                    date: md.date,
                    cloudiness,
                });
                cloudiness
            }
            CloudinessSource::Unavailable => match last {
                Some(estimate) if estimate.is_fresh_at(md.date) => estimate.cloudiness,
                Some(estimate) => {
                    debug!(
                        "Cloudiness of station {} from {} is stale at {}, assuming clear sky",
                        md.station.id, estimate.date, md.date
                    );
                    0.0
                }
                None => 0.0,
            },
        };

        md[param] = self.model.ilwr(rh, ta, md.date, cloudiness);
        true
    }

    fn store(&mut self, station_id: &str, estimate: Option<CloudinessEstimate>) {
        if let Some(estimate) = estimate {
            self.last_cloudiness.insert(station_id.to_string(), estimate);
        }
    }
}

impl FromArguments for AllSkyLwGenerator<SolarGeometry> {
    fn from_arguments(args: &[String], name: &str) -> Result<Self> {
        Self::with_ephemeris(args, name, SolarGeometry)
    }
}

impl<E: SolarEphemeris> Algorithm for AllSkyLwGenerator<E> {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::Generator
    }

    fn process_one(&mut self, param: Parameter, md: &mut MeteoData) -> bool {
        let mut last = self.cached_cloudiness(&md.station.id);
        let resolved = self.generate(param, md, &mut last);
        self.store(&md.station.id, last);
        resolved
    }

    fn process_series(&mut self, param: Parameter, series: &mut [MeteoData]) -> bool {
        let mut any_resolved = false;
        let mut current: Option<(String, Option<CloudinessEstimate>)> = None;

        for md in series.iter_mut() {
            let same_station = matches!(&current, Some((id, _)) if *id == md.station.id);
            if !same_station {
                if let Some((id, last)) = current.take() {
                    self.store(&id, last);
                }
                let last = self.cached_cloudiness(&md.station.id);
                current = Some((md.station.id.clone(), last));
            }

            if let Some((_, last)) = current.as_mut() {
                any_resolved |= self.generate(param, md, last);
            }
        }

        if let Some((id, last)) = current {
            self.store(&id, last);
        }
        any_resolved
    }
}
