//! Meteorological Gap Filling Library
//!
//! A Rust library that bounds-checks and fills gaps in meteorological station
//! time series by applying ordered chains of named algorithms per parameter.
//!
//! This library provides tools for:
//! - Clipping or nullifying out-of-range samples with bounding filters
//! - Generating missing values from constants, sinusoids or other parameters
//! - Parametrizing incoming long-wave and short-wave radiation, including a
//!   per-station cloudiness estimate derived from measured short-wave radiation
//! - Building per-parameter processing chains from a declarative configuration
//! - Comprehensive error handling for invalid configurations

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod algorithms;
        pub mod data_generator;
        pub mod meteolaws;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{Coordinates, MeteoData, Parameter, StationData};
pub use app::services::algorithms::{Algorithm, AlgorithmKind, create_algorithm};
pub use app::services::data_generator::{DataGenerator, ProcessingChain};
pub use config::GapFillConfig;
pub use constants::NODATA;

/// Result type alias for the gap filling framework
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for algorithm construction and configuration
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Invalid arguments given to an algorithm
    #[error("Invalid argument for algorithm '{algorithm}': {message}")]
    InvalidArgument { algorithm: String, message: String },

    /// Algorithm name not present in the registry
    #[error("Unknown algorithm: {name}")]
    UnknownAlgorithm { name: String },

    /// Meteorological parameter name not recognized
    #[error("Unknown meteorological parameter: {name}")]
    UnknownParameter { name: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Data validation error
    #[error("Data validation error: {message}")]
    DataValidation { message: String },

    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Create an invalid argument error for the named algorithm
    pub fn invalid_argument(algorithm: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            algorithm: algorithm.into(),
            message: message.into(),
        }
    }

    /// Create an unknown algorithm error
    pub fn unknown_algorithm(name: impl Into<String>) -> Self {
        Self::UnknownAlgorithm { name: name.into() }
    }

    /// Create an unknown parameter error
    pub fn unknown_parameter(name: impl Into<String>) -> Self {
        Self::UnknownParameter { name: name.into() }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a data validation error
    pub fn data_validation(message: impl Into<String>) -> Self {
        Self::DataValidation {
            message: message.into(),
        }
    }

    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Name of the algorithm this error refers to, if any
    pub fn algorithm(&self) -> Option<&str> {
        match self {
            Self::InvalidArgument { algorithm, .. } => Some(algorithm),
            Self::UnknownAlgorithm { name } => Some(name),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}
