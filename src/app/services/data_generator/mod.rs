//! Gap filling orchestration
//!
//! A [`ProcessingChain`] holds the filters and generators declared for one
//! parameter. The [`DataGenerator`] owns one chain per configured parameter
//! and runs them in parameter order over single samples, station series or
//! whole sets of stations, reporting [`GenerationStats`].
//!
//! # Architecture
//!
//! - [`chain`] - single pass application of one parameter's algorithms
//! - [`generator`] - DataGenerator built from a [`crate::GapFillConfig`]
//! - [`stats`] - missing value counts and fill rates

pub mod chain;
pub mod generator;
pub mod stats;

#[cfg(test)]
pub mod tests;

pub use chain::ProcessingChain;
pub use generator::DataGenerator;
pub use stats::{GenerationStats, ParameterStats};
