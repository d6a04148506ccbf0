//! Bounding filters
//!
//! Filters never manufacture data: samples holding the nodata sentinel are
//! left untouched. Out-of-range values are either replaced by a soft value
//! (soft mode) or turned into nodata (hard mode), which makes them eligible
//! for the generators declared later in the chain.

use super::arguments::{convert_numbers, take_soft_flag};
use super::factory::FromArguments;
use super::{Algorithm, AlgorithmKind};
use crate::app::models::{MeteoData, Parameter};
use crate::constants::NODATA;
use crate::{Error, Result};

/// Apply one bound to a present value, returning whether it stays usable
fn apply_bound(value: &mut f64, out_of_range: bool, soft: bool, soft_value: f64) -> bool {
    if out_of_range {
        *value = if soft { soft_value } else { NODATA };
    }
    *value != NODATA
}

// =============================================================================
// Maximum Value Filter
// =============================================================================

/// Reject or clip values above a maximum
///
/// Arguments: `[soft] max [soft_value]`. In soft mode, values above `max` are
/// replaced by `soft_value`, which defaults to `max`.
///
/// ```text
/// TA::filters = MAX
/// TA::MAX     = soft 330 320
/// ```
#[derive(Debug, Clone)]
pub struct MaxFilter {
    name: String,
    max: f64,
    soft_value: f64,
    soft: bool,
}

impl MaxFilter {
    /// Upper bound
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Replacement used in soft mode
    pub fn soft_value(&self) -> f64 {
        self.soft_value
    }

    /// Whether out-of-range values are clipped instead of rejected
    pub fn is_soft(&self) -> bool {
        self.soft
    }
}

impl FromArguments for MaxFilter {
    fn from_arguments(args: &[String], name: &str) -> Result<Self> {
        let (soft, rest) = take_soft_flag(args);
        let values = convert_numbers(name, rest, 1, 2)?;
        let max = values[0];

        Ok(Self {
            name: name.to_string(),
            max,
            soft_value: values.get(1).copied().unwrap_or(max),
            soft,
        })
    }
}

impl Algorithm for MaxFilter {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::Filter
    }

    fn process_one(&mut self, param: Parameter, md: &mut MeteoData) -> bool {
        let value = &mut md[param];
        if *value == NODATA {
            return false;
        }
        let out_of_range = *value > self.max;
        apply_bound(value, out_of_range, self.soft, self.soft_value)
    }
}

// =============================================================================
// Minimum Value Filter
// =============================================================================

/// Reject or clip values below a minimum
///
/// Arguments: `[soft] min [soft_value]`, mirroring [`MaxFilter`].
#[derive(Debug, Clone)]
pub struct MinFilter {
    name: String,
    min: f64,
    soft_value: f64,
    soft: bool,
}

impl FromArguments for MinFilter {
    fn from_arguments(args: &[String], name: &str) -> Result<Self> {
        let (soft, rest) = take_soft_flag(args);
        let values = convert_numbers(name, rest, 1, 2)?;
        let min = values[0];

        Ok(Self {
            name: name.to_string(),
            min,
            soft_value: values.get(1).copied().unwrap_or(min),
            soft,
        })
    }
}

impl Algorithm for MinFilter {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::Filter
    }

    fn process_one(&mut self, param: Parameter, md: &mut MeteoData) -> bool {
        let value = &mut md[param];
        if *value == NODATA {
            return false;
        }
        let out_of_range = *value < self.min;
        apply_bound(value, out_of_range, self.soft, self.soft_value)
    }
}

// =============================================================================
// Range Filter
// =============================================================================

/// Reject or clip values outside `[min, max]`
///
/// Arguments: `[soft] min max [soft_min soft_max]`.
#[derive(Debug, Clone)]
pub struct MinMaxFilter {
    name: String,
    min: f64,
    max: f64,
    soft_min: f64,
    soft_max: f64,
    soft: bool,
}

impl FromArguments for MinMaxFilter {
    fn from_arguments(args: &[String], name: &str) -> Result<Self> {
        let (soft, rest) = take_soft_flag(args);
        let values = convert_numbers(name, rest, 2, 4)?;
        if values.len() == 3 {
            return Err(Error::invalid_argument(
                name,
                "soft replacement values must be given for both bounds",
            ));
        }

        let (min, max) = (values[0], values[1]);
        if min > max {
            return Err(Error::invalid_argument(
                name,
                format!("minimum {min} is greater than maximum {max}"),
            ));
        }

        let (soft_min, soft_max) = if values.len() == 4 {
            (values[2], values[3])
        } else {
            (min, max)
        };

        Ok(Self {
            name: name.to_string(),
            min,
            max,
            soft_min,
            soft_max,
            soft,
        })
    }
}

impl Algorithm for MinMaxFilter {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::Filter
    }

    fn process_one(&mut self, param: Parameter, md: &mut MeteoData) -> bool {
        let value = &mut md[param];
        if *value == NODATA {
            return false;
        }
        if *value < self.min {
            apply_bound(value, true, self.soft, self.soft_min)
        } else {
            let out_of_range = *value > self.max;
            apply_bound(value, out_of_range, self.soft, self.soft_max)
        }
    }
}
