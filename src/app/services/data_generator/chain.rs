//! Ordered chain of filters and generators for one parameter

use crate::Result;
use crate::app::models::{MeteoData, Parameter};
use crate::app::services::algorithms::{Algorithm, AlgorithmKind, create_algorithm};
use crate::config::ParameterConfig;
use std::fmt;
use tracing::info;

/// Filters and generators applied in declaration order to one parameter
///
/// The chain makes a single pass. Filters see every present value and may
/// turn it into nodata; generators only see samples that are still missing,
/// so the first generator able to resolve a sample wins.
#[derive(Debug)]
pub struct ProcessingChain {
    parameter: Parameter,
    algorithms: Vec<Box<dyn Algorithm>>,
}

impl ProcessingChain {
    /// Create an empty chain
    pub fn new(parameter: Parameter) -> Self {
        Self {
            parameter,
            algorithms: Vec::new(),
        }
    }

    /// Build the chain declared for a parameter, filters first
    ///
    /// # Errors
    ///
    /// Returns the first unknown algorithm or argument error.
    pub fn from_config(parameter: Parameter, config: &ParameterConfig) -> Result<Self> {
        let mut chain = Self::new(parameter);
        for algorithm in config.algorithms() {
            chain.push(create_algorithm(&algorithm.name, &algorithm.args)?);
        }
        info!("{chain}");
        Ok(chain)
    }

    /// Append an algorithm
    pub fn push(&mut self, algorithm: Box<dyn Algorithm>) {
        self.algorithms.push(algorithm);
    }

    /// Builder-style [`ProcessingChain::push`]
    pub fn with(mut self, algorithm: Box<dyn Algorithm>) -> Self {
        self.push(algorithm);
        self
    }

    pub fn parameter(&self) -> Parameter {
        self.parameter
    }

    pub fn len(&self) -> usize {
        self.algorithms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.algorithms.is_empty()
    }

    /// Names of the algorithms in application order
    pub fn algorithm_names(&self) -> Vec<&str> {
        self.algorithms.iter().map(|a| a.name()).collect()
    }

    /// Run the chain on one sample
    ///
    /// Returns whether the sample ends with a usable value.
    pub fn process_sample(&mut self, md: &mut MeteoData) -> bool {
        let param = self.parameter;
        for algorithm in self.algorithms.iter_mut() {
            let applies = match algorithm.kind() {
                AlgorithmKind::Filter => !md.is_nodata(param),
                AlgorithmKind::Generator => md.is_nodata(param),
            };
            if applies {
                algorithm.process_one(param, md);
            }
        }
        !md.is_nodata(param)
    }

    /// Run the chain on the time ordered series of one station
    ///
    /// Returns whether every sample ends with a usable value.
    pub fn process_series(&mut self, series: &mut [MeteoData]) -> bool {
        let param = self.parameter;
        for algorithm in self.algorithms.iter_mut() {
            let missing = MeteoData::count_nodata(series, param);
            let applies = match algorithm.kind() {
                AlgorithmKind::Filter => missing < series.len(),
                AlgorithmKind::Generator => missing > 0,
            };
            if applies {
                algorithm.process_series(param, series);
            }
        }
        MeteoData::count_nodata(series, param) == 0
    }
}

impl fmt::Display for ProcessingChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} chain: ", self.parameter)?;
        if self.algorithms.is_empty() {
            return write!(f, "(empty)");
        }
        write!(f, "{}", self.algorithm_names().join(" -> "))
    }
}
