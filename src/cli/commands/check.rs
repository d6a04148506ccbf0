//! Check command: construct every configured chain and report errors

use super::shared::load_configuration;
use crate::app::models::Parameter;
use crate::app::services::data_generator::ProcessingChain;
use crate::cli::args::CheckArgs;
use crate::config::GapFillConfig;
use anyhow::{Result, bail};
use colored::*;

/// Outcome of building one parameter's chain
#[derive(Debug)]
pub struct ChainReport {
    pub parameter: Parameter,
    pub result: crate::Result<ProcessingChain>,
}

/// Build every chain of a configuration, collecting all errors
pub fn check_configuration(config: &GapFillConfig) -> Vec<ChainReport> {
    config
        .parameters
        .iter()
        .map(|(param, chain_config)| ChainReport {
            parameter: *param,
            result: ProcessingChain::from_config(*param, chain_config),
        })
        .collect()
}

/// Validate a configuration file
pub fn run_check(args: &CheckArgs) -> Result<()> {
    let config = load_configuration(&args.config)?;
    let reports = check_configuration(&config);

    println!(
        "{} {} ({} parameters)",
        "Checking".bright_green().bold(),
        args.config.display(),
        reports.len()
    );

    let mut failures = 0;
    for report in &reports {
        match &report.result {
            Ok(chain) => println!("  {} {}", "ok".green(), chain),
            Err(e) => {
                failures += 1;
                println!("  {} {}: {}", "error".bright_red().bold(), report.parameter, e);
            }
        }
    }

    if failures > 0 {
        bail!("{failures} of {} chains could not be built", reports.len());
    }
    println!("{}", "Configuration is valid".bright_green());
    Ok(())
}
