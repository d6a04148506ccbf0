//! Gap filling statistics
//!
//! Counts missing values before and after the chains ran, per parameter, so
//! that the fill rate of a configuration can be reported and logged.

use crate::app::models::{MeteoData, Parameter};
use std::collections::BTreeMap;

/// Missing value counts for one parameter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParameterStats {
    /// Samples missing before the chain ran
    pub missing_before: usize,
    /// Samples missing after the chain ran
    pub missing_after: usize,
}

impl ParameterStats {
    /// Samples the chain resolved, net of the values filters rejected
    pub fn filled(&self) -> usize {
        self.missing_before.saturating_sub(self.missing_after)
    }
}

/// Statistics of one gap filling run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenerationStats {
    /// Number of samples examined
    pub samples: usize,
    /// Number of station series examined
    pub stations: usize,
    /// Counts per processed parameter
    pub parameters: BTreeMap<Parameter, ParameterStats>,
}

impl GenerationStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Count the missing values of `param` before its chain runs
    pub fn record_before(&mut self, param: Parameter, series: &[MeteoData]) {
        self.parameters.entry(param).or_default().missing_before +=
            MeteoData::count_nodata(series, param);
    }

    /// Count the missing values of `param` after its chain ran
    pub fn record_after(&mut self, param: Parameter, series: &[MeteoData]) {
        self.parameters.entry(param).or_default().missing_after +=
            MeteoData::count_nodata(series, param);
    }

    /// Add the counts of another run
    pub fn merge(&mut self, other: &GenerationStats) {
        self.samples += other.samples;
        self.stations += other.stations;
        for (param, counts) in &other.parameters {
            let entry = self.parameters.entry(*param).or_default();
            entry.missing_before += counts.missing_before;
            entry.missing_after += counts.missing_after;
        }
    }

    /// Missing values over all parameters before processing
    pub fn missing_before(&self) -> usize {
        self.parameters.values().map(|p| p.missing_before).sum()
    }

    /// Missing values over all parameters after processing
    pub fn missing_after(&self) -> usize {
        self.parameters.values().map(|p| p.missing_after).sum()
    }

    /// Percentage of the initially missing values that were filled
    pub fn fill_rate(&self) -> f64 {
        let before = self.missing_before();
        if before == 0 {
            100.0
        } else {
            let filled: usize = self.parameters.values().map(ParameterStats::filled).sum();
            (filled as f64 / before as f64) * 100.0
        }
    }

    /// Check whether no processed parameter has missing values left
    pub fn is_complete(&self) -> bool {
        self.missing_after() == 0
    }

    /// Get summary string for logging
    pub fn summary(&self) -> String {
        let per_parameter: Vec<String> = self
            .parameters
            .iter()
            .map(|(param, counts)| {
                format!("{param} {}->{}", counts.missing_before, counts.missing_after)
            })
            .collect();

        format!(
            "Gap filling: {} samples from {} stations | missing {} -> {} ({:.1}% filled) | {}",
            self.samples,
            self.stations,
            self.missing_before(),
            self.missing_after(),
            self.fill_rate(),
            if per_parameter.is_empty() {
                "no parameter configured".to_string()
            } else {
                per_parameter.join(", ")
            }
        )
    }
}
