//! Command implementations for the gap filling CLI
//!
//! Each command is implemented in its own module:
//! - `algorithms`: registry listing
//! - `check`: configuration validation
//! - `synth`: synthetic series generation printed as CSV

pub mod algorithms;
pub mod check;
pub mod shared;
pub mod synth;

use crate::cli::args::{Args, Commands};
use anyhow::Result;

/// Main command runner
///
/// Sets up logging from the global verbosity flags and dispatches to the
/// subcommand handler.
pub fn run(args: Args) -> Result<()> {
    shared::setup_logging(&args)?;

    match args.get_command() {
        Commands::Algorithms(algorithms_args) => algorithms::run_algorithms(&algorithms_args),
        Commands::Check(check_args) => check::run_check(&check_args),
        Commands::Synth(synth_args) => synth::run_synth(&synth_args, args.show_progress()),
    }
}
