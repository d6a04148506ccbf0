//! Algorithm registry and factory
//!
//! Maps a case-insensitive name to a freshly constructed algorithm. The table
//! is static and holds no state, so every call returns an independent
//! instance.

use super::filters::{MaxFilter, MinFilter, MinMaxFilter};
use super::generators::{
    AllSkyLwGenerator, ClearSkyLwGenerator, ConstGenerator, HsSweGenerator, PotRadGenerator,
    RhGenerator, SinGenerator, StandardPressureGenerator,
};
use super::{Algorithm, AlgorithmKind};
use crate::{Error, Result};
use tracing::debug;

/// Construction from the configured argument tokens
pub trait FromArguments: Algorithm + Sized + 'static {
    /// Parse and validate `args`; `name` is used in error messages
    fn from_arguments(args: &[String], name: &str) -> Result<Self>;
}

type Constructor = fn(&[String], &str) -> Result<Box<dyn Algorithm>>;

fn construct<A: FromArguments>(args: &[String], name: &str) -> Result<Box<dyn Algorithm>> {
    Ok(Box::new(A::from_arguments(args, name)?))
}

/// Registry entry describing one algorithm
#[derive(Debug, Clone, Copy)]
pub struct AlgorithmInfo {
    /// Canonical (upper case) name
    pub name: &'static str,
    /// Filter or generator
    pub kind: AlgorithmKind,
    /// Expected argument tokens
    pub usage: &'static str,
    /// One line description
    pub description: &'static str,
    constructor: Constructor,
}

static REGISTRY: &[AlgorithmInfo] = &[
    AlgorithmInfo {
        name: "MAX",
        kind: AlgorithmKind::Filter,
        usage: "[soft] max [soft_value]",
        description: "Reject or clip values above a maximum",
        constructor: construct::<MaxFilter>,
    },
    AlgorithmInfo {
        name: "MIN",
        kind: AlgorithmKind::Filter,
        usage: "[soft] min [soft_value]",
        description: "Reject or clip values below a minimum",
        constructor: construct::<MinFilter>,
    },
    AlgorithmInfo {
        name: "MIN_MAX",
        kind: AlgorithmKind::Filter,
        usage: "[soft] min max [soft_min soft_max]",
        description: "Reject or clip values outside a range",
        constructor: construct::<MinMaxFilter>,
    },
    AlgorithmInfo {
        name: "CST",
        kind: AlgorithmKind::Generator,
        usage: "value",
        description: "Constant value",
        constructor: construct::<ConstGenerator>,
    },
    AlgorithmInfo {
        name: "SIN",
        kind: AlgorithmKind::Generator,
        usage: "yearly|daily min max phase",
        description: "Sinusoidal variation reaching its minimum at the phase",
        constructor: construct::<SinGenerator>,
    },
    AlgorithmInfo {
        name: "STD_PRESS",
        kind: AlgorithmKind::Generator,
        usage: "",
        description: "Standard atmosphere pressure at the station altitude",
        constructor: construct::<StandardPressureGenerator>,
    },
    AlgorithmInfo {
        name: "RELHUM",
        kind: AlgorithmKind::Generator,
        usage: "",
        description: "Relative humidity from dew point or specific humidity",
        constructor: construct::<RhGenerator>,
    },
    AlgorithmInfo {
        name: "CLEARSKY_LW",
        kind: AlgorithmKind::Generator,
        usage: "BRUTSAERT|DILLEY|PRATA|CLARK|TANG|IDSO",
        description: "Clear sky incoming long-wave radiation from TA and RH",
        constructor: construct::<ClearSkyLwGenerator>,
    },
    AlgorithmInfo {
        name: "ALLSKY_LW",
        kind: AlgorithmKind::Generator,
        usage: "OMSTEDT|KONZELMANN|UNSWORTH|CRAWFORD [KASTEN|CRAWFORD]",
        description: "All sky incoming long-wave radiation from TA, RH and cloudiness",
        constructor: construct::<AllSkyLwGenerator>,
    },
    AlgorithmInfo {
        name: "POT_RADIATION",
        kind: AlgorithmKind::Generator,
        usage: "",
        description: "Potential short-wave radiation, cloud corrected from ILWR",
        constructor: construct::<PotRadGenerator>,
    },
    AlgorithmInfo {
        name: "HS_SWE",
        kind: AlgorithmKind::Generator,
        usage: "",
        description: "Snow water equivalent from snow height increments",
        constructor: construct::<HsSweGenerator>,
    },
];

/// All registered algorithms, in registration order
pub fn available_algorithms() -> &'static [AlgorithmInfo] {
    REGISTRY
}

/// Look up a registry entry by case-insensitive name
pub fn find_algorithm(name: &str) -> Option<&'static AlgorithmInfo> {
    let name = name.trim();
    REGISTRY
        .iter()
        .find(|info| info.name.eq_ignore_ascii_case(name))
}

/// Create an algorithm by case-insensitive name
///
/// # Errors
///
/// [`Error::UnknownAlgorithm`] for unregistered names; argument errors from
/// the algorithm constructor are returned unchanged.
pub fn create_algorithm(name: &str, args: &[String]) -> Result<Box<dyn Algorithm>> {
    let info = find_algorithm(name).ok_or_else(|| Error::unknown_algorithm(name.trim()))?;
    debug!("Creating {} {} with arguments {:?}", info.kind, info.name, args);
    (info.constructor)(args, info.name)
}
