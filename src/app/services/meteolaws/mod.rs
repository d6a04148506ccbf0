//! Meteorological laws used by the generators
//!
//! - [`atmosphere`] - humidity conversions, standard atmosphere, long-wave
//!   emissivity parametrizations and cloudiness laws
//! - [`sun`] - the ephemeris service consumed by the radiation generators,
//!   with a compact default implementation

pub mod atmosphere;
pub mod sun;

pub use sun::{AtmosphericState, SolarEphemeris, SolarGeometry, SunState};
