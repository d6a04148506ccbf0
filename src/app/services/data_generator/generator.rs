//! Data generator owning the chains of every configured parameter

use crate::Result;
use crate::app::models::{MeteoData, Parameter};
use crate::config::GapFillConfig;
use indicatif::ProgressBar;
use tracing::{debug, info};

use super::{chain::ProcessingChain, stats::GenerationStats};

/// Applies the configured chains to samples, series and stations
///
/// Parameters are processed in their index order, so a value generated for
/// an early parameter (e.g. ISWR) is visible to the generators of a later one
/// (e.g. ILWR). The chains keep their algorithms, and therefore the per
/// station caches, for the lifetime of the generator: build one generator per
/// worker when processing stations concurrently.
///
/// # Example
///
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use meteo_gapfill::{Coordinates, DataGenerator, GapFillConfig, MeteoData, Parameter, StationData};
///
/// # fn example() -> meteo_gapfill::Result<()> {
/// let config = GapFillConfig::new().with_generator(Parameter::P, "STD_PRESS", &[]);
/// let mut generator = DataGenerator::new(&config)?;
///
/// let station = StationData::new("WFJ", "Weissfluhjoch", Coordinates::new(46.83, 9.81, 2540.0)?);
/// let mut md = MeteoData::new(station, Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
/// let stats = generator.fill_sample(&mut md);
///
/// assert!(!md.is_nodata(Parameter::P));
/// assert!(stats.is_complete());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct DataGenerator {
    chains: Vec<ProcessingChain>,
}

impl DataGenerator {
    /// Build every chain declared in the configuration
    ///
    /// # Errors
    ///
    /// Returns the first unknown algorithm or argument error.
    pub fn new(config: &GapFillConfig) -> Result<Self> {
        let mut chains = Vec::with_capacity(config.parameters.len());
        for (param, chain_config) in &config.parameters {
            chains.push(ProcessingChain::from_config(*param, chain_config)?);
        }

        info!(
            "Data generator ready: {} algorithms over {} parameters",
            config.algorithm_count(),
            chains.len()
        );
        Ok(Self { chains })
    }

    /// Build a generator from chains assembled by hand
    ///
    /// Chains are sorted into parameter order.
    pub fn from_chains(mut chains: Vec<ProcessingChain>) -> Self {
        chains.sort_by_key(ProcessingChain::parameter);
        Self { chains }
    }

    /// Chains in processing order
    pub fn chains(&self) -> &[ProcessingChain] {
        &self.chains
    }

    /// Chain of one parameter
    pub fn chain(&self, param: Parameter) -> Option<&ProcessingChain> {
        self.chains.iter().find(|chain| chain.parameter() == param)
    }

    /// Fill one sample
    pub fn fill_sample(&mut self, md: &mut MeteoData) -> GenerationStats {
        let mut stats = GenerationStats::new();
        stats.samples = 1;
        stats.stations = 1;

        for chain in self.chains.iter_mut() {
            let param = chain.parameter();
            stats.record_before(param, std::slice::from_ref(md));
            chain.process_sample(md);
            stats.record_after(param, std::slice::from_ref(md));
        }
        stats
    }

    /// Fill the time ordered series of one station
    pub fn fill_series(&mut self, series: &mut [MeteoData]) -> GenerationStats {
        let mut stats = GenerationStats::new();
        stats.samples = series.len();
        stats.stations = usize::from(!series.is_empty());

        for chain in self.chains.iter_mut() {
            let param = chain.parameter();
            stats.record_before(param, series);
            let complete = chain.process_series(series);
            stats.record_after(param, series);

            if !complete {
                debug!(
                    "{} of {} samples still missing {} after its chain",
                    MeteoData::count_nodata(series, param),
                    series.len(),
                    param
                );
            }
        }

        if let Some(first) = series.first() {
            debug!("Station {}: {}", first.station.id, stats.summary());
        }
        stats
    }

    /// Fill the series of several stations, one after the other
    pub fn fill_stations(
        &mut self,
        stations: &mut [Vec<MeteoData>],
        progress: Option<&ProgressBar>,
    ) -> GenerationStats {
        let mut stats = GenerationStats::new();

        for series in stations.iter_mut() {
            stats.merge(&self.fill_series(series));
            if let Some(pb) = progress {
                pb.inc(1);
            }
        }

        if let Some(pb) = progress {
            pb.finish_with_message(format!(
                "Gap filling complete: {} stations",
                stats.stations
            ));
        }

        info!("{}", stats.summary());
        stats
    }
}
