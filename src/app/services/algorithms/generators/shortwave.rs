//! Potential short-wave radiation generator

use crate::app::models::{MeteoData, Parameter};
use crate::app::services::algorithms::arguments::expect_none;
use crate::app::services::algorithms::factory::FromArguments;
use crate::app::services::algorithms::{Algorithm, AlgorithmKind};
use crate::app::services::meteolaws::{AtmosphericState, SolarEphemeris, SolarGeometry, atmosphere};
use crate::constants::{
    self,
    radiation::{AVERAGE_RH, AVERAGE_TA},
};
use crate::Result;

/// Potential incoming (ISWR) or reflected (RSWR) short-wave radiation
///
/// The clear sky global irradiance is computed from TA and RH, using average
/// conditions when they are missing. When ILWR is available, the cloudiness
/// is recovered from the Unsworth relation with the same TA and RH, and the
/// irradiance is reduced with the Kasten and Czeplak solar index.
///
/// ```text
/// ISWR::generators = POT_RADIATION
/// ```
#[derive(Debug)]
pub struct PotRadGenerator<E: SolarEphemeris = SolarGeometry> {
    name: String,
    ephemeris: E,
}

impl<E: SolarEphemeris> PotRadGenerator<E> {
    /// Build the generator with a specific ephemeris service
    pub fn with_ephemeris(args: &[String], name: &str, ephemeris: E) -> Result<Self> {
        expect_none(name, args)?;
        Ok(Self {
            name: name.to_string(),
            ephemeris,
        })
    }

    /// Incoming short-wave radiation and the ground albedo used for it
    fn incoming(&self, md: &MeteoData) -> (f64, f64) {
        let albedo = constants::ground_albedo(md.get(Parameter::HS));
        let ta = md.value(Parameter::TA);
        let rh = md.value(Parameter::RH);

        let state = AtmosphericState {
            ta: ta.unwrap_or(AVERAGE_TA),
            rh: rh.unwrap_or(AVERAGE_RH),
            albedo,
        };
        let sun = self.ephemeris.sun_state(md.position(), md.date, &state);
        if !sun.is_day() {
            return (0.0, albedo);
        }

        let mut iswr = sun.clear_sky_global;
        if let Some(ilwr) = md.value(Parameter::ILWR) {
            let cloudiness = atmosphere::unsworth_cloudiness(state.rh, state.ta, ilwr);
            iswr *= atmosphere::kasten_solar_index(cloudiness);
        }
        (iswr, albedo)
    }
}

impl FromArguments for PotRadGenerator<SolarGeometry> {
    fn from_arguments(args: &[String], name: &str) -> Result<Self> {
        Self::with_ephemeris(args, name, SolarGeometry)
    }
}

impl<E: SolarEphemeris> Algorithm for PotRadGenerator<E> {
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

        let (iswr, albedo) = self.incoming(md);
        match param {
            Parameter::ISWR => md[param] = iswr,
            Parameter::RSWR => md[param] = iswr * albedo,
            _ => return false,
        }
        true
    }
}
