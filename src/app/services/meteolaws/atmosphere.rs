//! Atmospheric laws and radiation parametrizations
//!
//! Temperatures are in K, pressures in Pa, relative humidity and cloudiness
//! are fractions in [0, 1] and irradiances are in W m-2. None of these
//! functions look at the nodata sentinel: callers check their inputs first.

use crate::constants::physics::{
    EPSILON, GAS_CONSTANT_AIR, GRAVITY, STEFAN_BOLTZMANN, T_WATER_FREEZING, T_WATER_TRIPLE_POINT,
};
use crate::constants::standard_atmosphere::{LAPSE_RATE, SEA_LEVEL_PRESSURE, SEA_LEVEL_TEMPERATURE};
use std::f64::consts::PI;

// =============================================================================
// Humidity
// =============================================================================

/// Saturation vapor pressure over water (Magnus formula)
pub fn saturation_pressure_water(ta: f64) -> f64 {
    610.78 * (17.27 * (ta - T_WATER_FREEZING) / (ta - 35.86)).exp()
}

/// Saturation vapor pressure, over ice below the freezing point
pub fn saturation_pressure(ta: f64) -> f64 {
    if ta >= T_WATER_FREEZING {
        saturation_pressure_water(ta)
    } else {
        610.78 * (21.88 * (ta - T_WATER_FREEZING) / (ta - 7.66)).exp()
    }
}

/// Water vapor partial pressure
pub fn vapor_pressure(rh: f64, ta: f64) -> f64 {
    rh * saturation_pressure(ta)
}

/// Relative humidity from dew point and air temperature
pub fn dew_point_to_rh(td: f64, ta: f64) -> f64 {
    (saturation_pressure_water(td) / saturation_pressure_water(ta)).clamp(0.0, 1.0)
}

/// Dew point from relative humidity and air temperature (inverse Magnus)
pub fn rh_to_dew_point(rh: f64, ta: f64) -> f64 {
    let e = rh.max(1e-6) * saturation_pressure_water(ta);
    let x = (e / 610.78).ln() / 17.27;
    (T_WATER_FREEZING - 35.86 * x) / (1.0 - x)
}

/// Relative humidity from specific humidity
pub fn specific_to_rh(pressure: f64, ta: f64, sh: f64) -> f64 {
    let e = sh * pressure / (EPSILON + (1.0 - EPSILON) * sh);
    (e / saturation_pressure(ta)).clamp(0.0, 1.0)
}

/// Precipitable water (cm), following Prata (1996)
pub fn precipitable_water(rh: f64, ta: f64) -> f64 {
    46.5 * (vapor_pressure(rh, ta) * 0.01) / ta
}

// =============================================================================
// Standard Atmosphere
// =============================================================================

/// Pressure of the international standard atmosphere at a given altitude
pub fn standard_pressure(altitude: f64) -> f64 {
    let exponent = GRAVITY / (LAPSE_RATE * GAS_CONSTANT_AIR);
    SEA_LEVEL_PRESSURE * (1.0 - LAPSE_RATE * altitude / SEA_LEVEL_TEMPERATURE).powf(exponent)
}

/// Black body emittance
pub fn blackbody(ta: f64) -> f64 {
    STEFAN_BOLTZMANN * ta.powi(4)
}

// =============================================================================
// Clear Sky Long-Wave
// =============================================================================

/// Brutsaert (1975) clear sky emissivity
pub fn brutsaert_emissivity(rh: f64, ta: f64) -> f64 {
    let ea_hpa = vapor_pressure(rh, ta) * 0.01;
    1.24 * (ea_hpa / ta).powf(1.0 / 7.0)
}

/// Dilley and O'Brien (1998) clear sky irradiance
pub fn dilley_ilwr(rh: f64, ta: f64) -> f64 {
    let w = 10.0 * precipitable_water(rh, ta);
    59.38 + 113.7 * (ta / T_WATER_TRIPLE_POINT).powi(6) + 96.96 * (w / 25.0).sqrt()
}

/// Effective emissivity of the Dilley and O'Brien irradiance
pub fn dilley_emissivity(rh: f64, ta: f64) -> f64 {
    (dilley_ilwr(rh, ta) / blackbody(ta)).min(1.0)
}

/// Prata (1996) clear sky emissivity
pub fn prata_emissivity(rh: f64, ta: f64) -> f64 {
    let w = precipitable_water(rh, ta);
    1.0 - (1.0 + w) * (-(1.2 + 3.0 * w).sqrt()).exp()
}

/// Clark and Allen (1978) clear sky emissivity
pub fn clark_emissivity(rh: f64, ta: f64) -> f64 {
    let td_celsius = rh_to_dew_point(rh, ta) - T_WATER_FREEZING;
    0.787 + 0.0028 * td_celsius
}

/// Tang et al. (2004) clear sky emissivity
pub fn tang_emissivity(rh: f64, ta: f64) -> f64 {
    let td_celsius = rh_to_dew_point(rh, ta) - T_WATER_FREEZING;
    0.754 + 0.0044 * td_celsius
}

/// Idso (1981) clear sky emissivity
pub fn idso_emissivity(rh: f64, ta: f64) -> f64 {
    let ea_hpa = vapor_pressure(rh, ta) * 0.01;
    0.70 + 5.95e-5 * ea_hpa * (1500.0 / ta).exp()
}

// =============================================================================
// All Sky Long-Wave
// =============================================================================

/// Omstedt (1990) all sky irradiance
pub fn omstedt_ilwr(rh: f64, ta: f64, cloudiness: f64) -> f64 {
    const EPS_W: f64 = 0.97;
    const A2: f64 = 0.68;
    const B2: f64 = 0.0036;
    const B3: f64 = 0.18;

    let ea = vapor_pressure(rh, ta);
    EPS_W * blackbody(ta) * (A2 + B2 * ea.sqrt()) * (1.0 + B3 * cloudiness * cloudiness)
}

/// Konzelmann et al. (1994) all sky irradiance
pub fn konzelmann_ilwr(rh: f64, ta: f64, cloudiness: f64) -> f64 {
    let ea = vapor_pressure(rh, ta);
    let eps_clear = 0.23 + 0.484 * (ea / ta).powf(1.0 / 8.0);
    let cloud4 = cloudiness.powi(4);
    let eps = eps_clear * (1.0 - cloud4) + 0.952 * cloud4;
    eps * blackbody(ta)
}

/// Unsworth and Monteith (1975) all sky irradiance, clear sky after Dilley
pub fn unsworth_ilwr(rh: f64, ta: f64, cloudiness: f64) -> f64 {
    let eps_clear = dilley_emissivity(rh, ta);
    let eps = (1.0 - 0.84 * cloudiness) * eps_clear + 0.84 * cloudiness;
    eps * blackbody(ta)
}

/// Crawford and Duchon (1999) all sky irradiance
///
/// `month` is the calendar month, 1 to 12.
pub fn crawford_ilwr(rh: f64, ta: f64, month: u32, cloudiness: f64) -> f64 {
    let ea_hpa = vapor_pressure(rh, ta) * 0.01;
    let seasonal = 1.22 + 0.06 * ((month as f64 + 2.0) * PI / 6.0).sin();
    let eps = cloudiness + (1.0 - cloudiness) * seasonal * (ea_hpa / ta).powf(1.0 / 7.0);
    eps * blackbody(ta)
}

/// Cloudiness that reproduces a measured irradiance with the Unsworth model
pub fn unsworth_cloudiness(rh: f64, ta: f64, ilwr: f64) -> f64 {
    let eps_clear = dilley_emissivity(rh, ta);
    let eps = ilwr / blackbody(ta);
    ((eps - eps_clear) / (0.84 * (1.0 - eps_clear))).clamp(0.0, 1.0)
}

// =============================================================================
// Cloudiness From Short-Wave
// =============================================================================

/// Kasten and Czeplak (1980) cloudiness from the solar index
pub fn kasten_cloudiness(solar_index: f64) -> f64 {
    let s = solar_index.clamp(0.0, 1.0);
    ((1.0 - s) / 0.75).powf(1.0 / 3.4).clamp(0.0, 1.0)
}

/// Kasten and Czeplak (1980) solar index from cloudiness
pub fn kasten_solar_index(cloudiness: f64) -> f64 {
    1.0 - 0.75 * cloudiness.clamp(0.0, 1.0).powf(3.4)
}

/// Crawford and Duchon (1999) cloudiness from the solar index
pub fn crawford_cloudiness(solar_index: f64) -> f64 {
    1.0 - solar_index.clamp(0.0, 1.0)
}

// =============================================================================
// Snow
// =============================================================================

/// New snow density (kg m-3) after Hedstrom and Pomeroy (1998), capped at 0 C
pub fn new_snow_density(ta: f64) -> f64 {
    let ta_celsius = (ta - T_WATER_FREEZING).min(0.0);
    67.92 + 51.25 * (ta_celsius / 2.59).exp()
}
