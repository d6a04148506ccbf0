//! Filter and generator algorithms
//!
//! Every algorithm implements the [`Algorithm`] trait and is created by name
//! through the [`factory`]. Two kinds exist:
//!
//! - **Filters** re-check every present value and clip it or turn it into
//!   the nodata sentinel when it is out of bounds. They never manufacture data.
//! - **Generators** only act on missing values and synthesize a plausible
//!   replacement, either from their configuration or from other parameters of
//!   the same sample.
//!
//! # Architecture
//!
//! - [`arguments`] - shared parsing of the whitespace separated argument tokens
//! - [`factory`] - case-insensitive name lookup in a static constructor table
//! - [`filters`] - bounding filters (MAX, MIN, MIN_MAX)
//! - [`generators`] - constant, sinusoidal, pressure, humidity, radiation and
//!   snow generators
//!
//! # Example Usage
//!
//! ```rust
//! use meteo_gapfill::app::services::algorithms::create_algorithm;
//!
//! # fn example() -> meteo_gapfill::Result<()> {
//! let args = vec!["soft".to_string(), "300".to_string()];
//! let filter = create_algorithm("max", &args)?;
//! assert_eq!(filter.name(), "MAX");
//! # Ok(())
//! # }
//! ```

pub mod arguments;
pub mod factory;
pub mod filters;
pub mod generators;

#[cfg(test)]
pub mod tests;

use crate::app::models::{MeteoData, Parameter};
use std::fmt;

pub use factory::{AlgorithmInfo, available_algorithms, create_algorithm};

/// Kind of an algorithm, which decides how it treats present data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlgorithmKind {
    /// Bounds-checks present values
    Filter,
    /// Fills missing values
    Generator,
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlgorithmKind::Filter => write!(f, "filter"),
            AlgorithmKind::Generator => write!(f, "generator"),
        }
    }
}

/// Shared contract of every filter and generator
///
/// Instances own their parsed arguments and any private state (such as the
/// cloudiness cache of the all sky long-wave generator). Methods take
/// `&mut self`, so one instance must not be shared between station
/// processing contexts running concurrently: build one instance per worker.
pub trait Algorithm: fmt::Debug + Send {
    /// Name the algorithm was registered under
    fn name(&self) -> &str;

    /// Filter or generator
    fn kind(&self) -> AlgorithmKind;

    /// Resolve or adjust `param` on one sample, in place
    ///
    /// Returns whether the sample now holds a usable value for `param`.
    fn process_one(&mut self, param: Parameter, md: &mut MeteoData) -> bool;

    /// Apply the algorithm to the time ordered series of one station
    ///
    /// Returns whether at least one sample holds a usable value afterwards.
    fn process_series(&mut self, param: Parameter, series: &mut [MeteoData]) -> bool {
        let mut any_resolved = false;
        for md in series.iter_mut() {
            any_resolved |= self.process_one(param, md);
        }
        any_resolved
    }
}
