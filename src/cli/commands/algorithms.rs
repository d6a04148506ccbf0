//! Algorithms command: list the registry

use crate::app::services::algorithms::{AlgorithmInfo, AlgorithmKind, available_algorithms};
use crate::cli::args::{AlgorithmsArgs, KindFilter};
use anyhow::Result;
use colored::*;

/// Registry entries matching the requested kind
pub fn select_algorithms(kind: Option<KindFilter>) -> Vec<&'static AlgorithmInfo> {
    available_algorithms()
        .iter()
        .filter(|info| match kind {
            None => true,
            Some(KindFilter::Filters) => info.kind == AlgorithmKind::Filter,
            Some(KindFilter::Generators) => info.kind == AlgorithmKind::Generator,
        })
        .collect()
}

/// Print the registered algorithms with their usage
pub fn run_algorithms(args: &AlgorithmsArgs) -> Result<()> {
    println!("{}", "Available algorithms".bright_green().bold());

    for info in select_algorithms(args.kind) {
        println!(
            "  {:<14} {:<10} {}",
            info.name.bright_white().bold(),
            info.kind.to_string().cyan(),
            info.description
        );
        if !info.usage.is_empty() {
            println!("  {:<14} {:<10} args: {}", "", "", info.usage.dimmed());
        }
    }
    Ok(())
}
