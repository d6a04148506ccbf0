//! Command-line argument definitions for the gap filling tool
//!
//! This module defines the complete CLI interface using the clap derive API.

use crate::app::models::Coordinates;
use crate::constants::{DEFAULT_SYNTH_STEP_MINUTES, MAX_SYNTH_STEP_MINUTES, NODATA};
use crate::{Error, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the meteorological gap filling tool
///
/// Checks measured values against bounds and fills the gaps of station time
/// series with chains of generators declared in an INI configuration.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "meteo-gapfill",
    version,
    about = "Bounds checking and gap filling for meteorological station data",
    long_about = "Applies chains of filters and generators, declared per parameter in an \
                  INI configuration, to meteorological station time series. Filters check \
                  present values against bounds; generators fill the remaining gaps from \
                  parametrizations (pressure, humidity, long-wave and short-wave radiation, \
                  snow water equivalent) or synthetic data."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        global = true,
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// List the registered filters and generators
    Algorithms(AlgorithmsArgs),
    /// Parse a configuration and construct every algorithm it declares
    Check(CheckArgs),
    /// Fill an empty series for a synthetic station and print it as CSV
    Synth(SynthArgs),
}

/// Which algorithms to list
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindFilter {
    Filters,
    Generators,
}

/// Arguments for the algorithms command
#[derive(Debug, Clone, Parser)]
pub struct AlgorithmsArgs {
    /// Only list one kind of algorithm
    #[arg(long = "kind", value_enum)]
    pub kind: Option<KindFilter>,
}

/// Arguments for the check command
#[derive(Debug, Clone, Parser)]
pub struct CheckArgs {
    /// INI configuration declaring the filters and generators
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,
}

/// Arguments for the synth command
#[derive(Debug, Clone, Parser)]
pub struct SynthArgs {
    /// INI configuration declaring the filters and generators
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Station latitude in decimal degrees
    #[arg(long = "lat", allow_hyphen_values = true)]
    pub latitude: f64,

    /// Station longitude in decimal degrees
    #[arg(long = "lon", allow_hyphen_values = true)]
    pub longitude: f64,

    /// Station altitude in meters, unknown when omitted
    #[arg(long = "alt", allow_hyphen_values = true)]
    pub altitude: Option<f64>,

    /// Station identifier
    #[arg(long = "station", default_value = "SYNTH")]
    pub station_id: String,

    /// First timestamp (UTC), e.g. 2024-01-01 or 2024-01-01T06:00
    #[arg(long = "start")]
    pub start: String,

    /// Length of the series in hours
    #[arg(long = "hours", default_value_t = 24)]
    pub hours: u32,

    /// Time step in minutes
    #[arg(long = "step", default_value_t = DEFAULT_SYNTH_STEP_MINUTES)]
    pub step_minutes: i64,
}

impl Args {
    /// Get the command to execute, defaulting to listing the algorithms
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or(Commands::Algorithms(AlgorithmsArgs { kind: None }))
    }

    /// Get log level based on verbosity settings
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if we should show progress bars (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}

impl SynthArgs {
    /// Validated station position
    pub fn coordinates(&self) -> Result<Coordinates> {
        Coordinates::new(
            self.latitude,
            self.longitude,
            self.altitude.unwrap_or(NODATA),
        )
    }

    /// Parse the start timestamp, as RFC 3339, date and time, or date only
    pub fn start_date(&self) -> Result<DateTime<Utc>> {
        let text = self.start.trim();
        if let Ok(date) = DateTime::parse_from_rfc3339(text) {
            return Ok(date.with_timezone(&Utc));
        }
        for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M"] {
            if let Ok(date) = NaiveDateTime::parse_from_str(text, format) {
                return Ok(date.and_utc());
            }
        }
        NaiveDate::parse_from_str(text, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|date| date.and_utc())
            .ok_or_else(|| {
                Error::configuration(format!(
                    "Invalid start '{text}': expected YYYY-MM-DD or YYYY-MM-DDTHH:MM"
                ))
            })
    }

    /// Validate the series layout
    pub fn validate(&self) -> Result<()> {
        if self.step_minutes <= 0 || self.step_minutes > MAX_SYNTH_STEP_MINUTES {
            return Err(Error::configuration(format!(
                "Time step must be between 1 and {MAX_SYNTH_STEP_MINUTES} minutes, got {}",
                self.step_minutes
            )));
        }
        if self.hours == 0 {
            return Err(Error::configuration("Series length must be at least one hour"));
        }
        Ok(())
    }

    /// Number of samples in the series
    pub fn sample_count(&self) -> usize {
        (i64::from(self.hours) * 60 / self.step_minutes.max(1)).max(1) as usize
    }
}
