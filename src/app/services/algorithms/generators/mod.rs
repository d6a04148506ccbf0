//! Data generators
//!
//! Once the data has been filtered, some samples may still be missing, either
//! because a sensor failed or because a parameter was never measured. The
//! generators fill them, relying on a parametrization from other parameters of
//! the same sample or on plain synthetic data.
//!
//! Generators never overwrite present data. When several generators are
//! declared for a parameter, only the samples the first one could not fill
//! are handed to the second one, and so on:
//!
//! ```text
//! [Generators]
//! RH::generators   = RELHUM CST
//! RH::CST          = 0.7
//! P::generators    = STD_PRESS
//! ILWR::generators = ALLSKY_LW CLEARSKY_LW
//! ILWR::ALLSKY_LW  = UNSWORTH
//! ILWR::CLEARSKY_LW = DILLEY
//! ```

pub mod longwave;
pub mod shortwave;
pub mod simple;
pub mod snow;

pub use longwave::{
    AllSkyLwGenerator, AllSkyModel, ClearSkyLwGenerator, ClearSkyModel, CloudinessEstimate,
    CloudinessMethod,
};
pub use shortwave::PotRadGenerator;
pub use simple::{ConstGenerator, RhGenerator, SinGenerator, SinPeriod, StandardPressureGenerator};
pub use snow::HsSweGenerator;
