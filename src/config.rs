//! Gap filling configuration
//!
//! The algorithm chains are read from INI-style text. Filters are declared in
//! the `[Filters]` section and generators in the `[Generators]` section, with
//! the arguments of each algorithm under `PARAM::ALGO`:
//!
//! ```text
//! [Filters]
//! TA::filters = MIN_MAX
//! TA::MIN_MAX = 230 330
//!
//! [Generators]
//! TA::generators = SIN
//! TA::SIN        = yearly 268.26 285.56 0.0833
//! ```
//!
//! Section names and keys are case-insensitive, `#` and `;` start comments and
//! any other section is ignored.

use crate::app::models::Parameter;
use crate::app::services::algorithms::AlgorithmKind;
use crate::{Error, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, warn};

/// One configured algorithm with its argument tokens
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlgorithmConfig {
    /// Algorithm name, upper case
    pub name: String,

    /// Whitespace separated argument tokens
    pub args: Vec<String>,
}

impl AlgorithmConfig {
    /// Create an algorithm entry
    pub fn new(name: impl Into<String>, args: &[&str]) -> Self {
        Self {
            name: name.into().trim().to_ascii_uppercase(),
            args: args.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Filters and generators declared for one parameter
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterConfig {
    /// Filters, in declaration order
    pub filters: Vec<AlgorithmConfig>,

    /// Generators, in declaration order
    pub generators: Vec<AlgorithmConfig>,
}

impl ParameterConfig {
    /// Filters followed by generators, the order in which they are applied
    pub fn algorithms(&self) -> impl Iterator<Item = &AlgorithmConfig> {
        self.filters.iter().chain(self.generators.iter())
    }

    /// Check whether nothing is declared
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty() && self.generators.is_empty()
    }
}

/// Algorithm chains of every configured parameter
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GapFillConfig {
    /// Per-parameter chains, in parameter processing order
    pub parameters: BTreeMap<Parameter, ParameterConfig>,
}

impl GapFillConfig {
    /// Create an empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a filter to a parameter's chain
    pub fn with_filter(mut self, param: Parameter, name: &str, args: &[&str]) -> Self {
        self.parameters
            .entry(param)
            .or_default()
            .filters
            .push(AlgorithmConfig::new(name, args));
        self
    }

    /// Append a generator to a parameter's chain
    pub fn with_generator(mut self, param: Parameter, name: &str, args: &[&str]) -> Self {
        self.parameters
            .entry(param)
            .or_default()
            .generators
            .push(AlgorithmConfig::new(name, args));
        self
    }

    /// Chain declared for a parameter
    pub fn parameter(&self, param: Parameter) -> Option<&ParameterConfig> {
        self.parameters.get(&param)
    }

    /// Number of algorithms over all parameters
    pub fn algorithm_count(&self) -> usize {
        self.parameters
            .values()
            .map(|chain| chain.filters.len() + chain.generators.len())
            .sum()
    }

    /// Load a configuration file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            Error::io(
                format!("Failed to read configuration {}", path.display()),
                e,
            )
        })?;
        debug!("Parsing configuration {}", path.display());
        text.parse()
    }
}

// =============================================================================
// INI Parsing
// =============================================================================

/// Line patterns of the INI syntax
struct LinePatterns {
    section: Regex,
    key: Regex,
}

impl LinePatterns {
    fn new() -> Result<Self> {
        let compile = |pattern: &str| {
            Regex::new(pattern)
                .map_err(|e| Error::configuration(format!("invalid line pattern: {e}")))
        };
        Ok(Self {
            section: compile(r"^\[\s*([^\]]*?)\s*\]$")?,
            key: compile(r"^([A-Za-z][A-Za-z0-9_]*)::([A-Za-z][A-Za-z0-9_]*)$")?,
        })
    }
}

/// Strip a comment starting with `#` or `;`
fn strip_comment(line: &str) -> &str {
    match line.find(['#', ';']) {
        Some(pos) => &line[..pos],
        None => line,
    }
}

/// Raw content of one algorithm section
#[derive(Debug, Default)]
struct SectionEntries {
    /// Declared algorithm names per parameter
    chains: BTreeMap<Parameter, Vec<String>>,
    /// Argument tokens per (parameter, algorithm)
    arguments: HashMap<(Parameter, String), Vec<String>>,
}

impl SectionEntries {
    fn into_algorithms(mut self, kind: AlgorithmKind) -> BTreeMap<Parameter, Vec<AlgorithmConfig>> {
        let mut result = BTreeMap::new();
        for (param, names) in self.chains {
            let algorithms = names
                .into_iter()
                .map(|name| {
                    let args = self
                        .arguments
                        .get(&(param, name.clone()))
                        .cloned()
                        .unwrap_or_default();
                    AlgorithmConfig { name, args }
                })
                .collect();
            result.insert(param, algorithms);
        }

        let declared: Vec<(Parameter, String)> = result
            .iter()
            .flat_map(|(param, algorithms): (&Parameter, &Vec<AlgorithmConfig>)| {
                algorithms.iter().map(move |a| (*param, a.name.clone()))
            })
            .collect();
        self.arguments.retain(|key, _| !declared.contains(key));
        for (param, name) in self.arguments.keys() {
            warn!("Arguments given for {param}::{name} but {name} is not a declared {kind}");
        }
        result
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Filters,
    Generators,
    Other,
}

impl FromStr for GapFillConfig {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self> {
        let patterns = LinePatterns::new()?;
        let mut section = Section::Other;
        let mut filters = SectionEntries::default();
        let mut generators = SectionEntries::default();

        for (index, raw_line) in text.lines().enumerate() {
            let line_number = index + 1;
            let line = strip_comment(raw_line).trim();
            if line.is_empty() {
                continue;
            }

            if let Some(caps) = patterns.section.captures(line) {
                section = match caps[1].to_ascii_lowercase().as_str() {
                    "filters" => Section::Filters,
                    "generators" => Section::Generators,
                    _ => Section::Other,
                };
                continue;
            }

            if section == Section::Other {
                continue;
            }

            let Some((key, value)) = line.split_once('=') else {
                return Err(Error::configuration(format!(
                    "line {line_number}: expected 'KEY = VALUE', got '{line}'"
                )));
            };

            let key = key.trim();
            let Some(caps) = patterns.key.captures(key) else {
                return Err(Error::configuration(format!(
                    "line {line_number}: malformed key '{key}', expected PARAM::NAME"
                )));
            };

            let param: Parameter = caps[1].parse().map_err(|e: Error| {
                Error::configuration(format!("line {line_number}: {e}"))
            })?;
            let name = caps[2].to_ascii_uppercase();
            let tokens: Vec<String> = value.split_whitespace().map(str::to_string).collect();

            let (entries, list_key, other_key) = match section {
                Section::Filters => (&mut filters, "FILTERS", "GENERATORS"),
                _ => (&mut generators, "GENERATORS", "FILTERS"),
            };

            if name == other_key {
                return Err(Error::configuration(format!(
                    "line {line_number}: {key} does not belong to this section"
                )));
            }

            if name == list_key {
                if entries.chains.contains_key(&param) {
                    return Err(Error::configuration(format!(
                        "line {line_number}: duplicated key {key}"
                    )));
                }
                let names = tokens.iter().map(|t| t.to_ascii_uppercase()).collect();
                entries.chains.insert(param, names);
            } else if entries.arguments.insert((param, name), tokens).is_some() {
                return Err(Error::configuration(format!(
                    "line {line_number}: duplicated key {key}"
                )));
            }
        }

        let mut config = GapFillConfig::new();
        for (param, algorithms) in filters.into_algorithms(AlgorithmKind::Filter) {
            config.parameters.entry(param).or_default().filters = algorithms;
        }
        for (param, algorithms) in generators.into_algorithms(AlgorithmKind::Generator) {
            config.parameters.entry(param).or_default().generators = algorithms;
        }
        config.parameters.retain(|_, chain| !chain.is_empty());

        debug!(
            "Parsed {} algorithms for {} parameters",
            config.algorithm_count(),
            config.parameters.len()
        );
        Ok(config)
    }
}
