//! Snow water equivalent from snow height

use crate::app::models::{MeteoData, Parameter};
use crate::app::services::algorithms::arguments::expect_none;
use crate::app::services::algorithms::factory::FromArguments;
use crate::app::services::algorithms::{Algorithm, AlgorithmKind};
use crate::app::services::meteolaws::atmosphere;
use crate::constants::radiation::AVERAGE_TA;
use crate::Result;

/// Snow water equivalent (kg m-2) from snow height (m) increments
///
/// Positive snow height increments are converted with the new snow density at
/// the sample air temperature. Decreasing snow heights are treated as
/// settling and keep the water equivalent. The accumulation restarts from
/// every measured SWE and from every snow-free sample, so a series must start
/// from one of these for samples to be resolved. Processing single samples
/// only resolves snow-free ones.
///
/// ```text
/// SWE::generators = HS_SWE
/// ```
#[derive(Debug, Clone)]
pub struct HsSweGenerator {
    name: String,
}

impl HsSweGenerator {
    /// Accumulate over one station's samples
    fn accumulate(param: Parameter, series: &mut [MeteoData]) -> bool {
        let mut any_resolved = false;
        // (snow height, water equivalent) of the previous usable sample
        let mut previous: Option<(f64, f64)> = None;

        for md in series.iter_mut() {
            let Some(hs) = md.value(Parameter::HS) else {
                previous = None;
                any_resolved |= !md.is_nodata(param);
                continue;
            };

            if let Some(swe) = md.value(param) {
                previous = Some((hs, swe));
                any_resolved = true;
                continue;
            }

            let swe = if hs <= 0.0 {
                0.0
            } else if let Some((previous_hs, previous_swe)) = previous {
                let ta = md.value(Parameter::TA).unwrap_or(AVERAGE_TA);
                let increment = (hs - previous_hs).max(0.0);
                previous_swe + increment * atmosphere::new_snow_density(ta)
            } else {
                continue;
            };

            md[param] = swe;
            previous = Some((hs, swe));
            any_resolved = true;
        }
        any_resolved
    }
}

impl FromArguments for HsSweGenerator {
    fn from_arguments(args: &[String], name: &str) -> Result<Self> {
        expect_none(name, args)?;
        Ok(Self {
            name: name.to_string(),
        })
    }
}

impl Algorithm for HsSweGenerator {
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

        match md.value(Parameter::HS) {
            Some(hs) if hs <= 0.0 => {
                md[param] = 0.0;
                true
            }
            _ => false,
        }
    }

    fn process_series(&mut self, param: Parameter, series: &mut [MeteoData]) -> bool {
        let mut any_resolved = false;
        for station in series.chunk_by_mut(|a, b| a.station.id == b.station.id) {
            any_resolved |= Self::accumulate(param, station);
        }
        any_resolved
    }
}
