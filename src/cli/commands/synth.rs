//! Synth command: fill an empty series for one synthetic station

use super::shared::{create_progress_bar, format_value, load_configuration};
use crate::app::models::{MeteoData, Parameter, StationData};
use crate::app::services::data_generator::DataGenerator;
use crate::cli::args::SynthArgs;
use anyhow::{Context, Result};
use chrono::{DateTime, Duration, Utc};
use colored::*;
use tracing::info;

/// Empty series of `count` samples, `step_minutes` apart
///
/// Fails when the series would run past the representable dates.
pub fn empty_series(
    station: &StationData,
    start: DateTime<Utc>,
    step_minutes: i64,
    count: usize,
) -> Result<Vec<MeteoData>> {
    (0..count)
        .map(|i| {
            let date = i64::try_from(i)
                .ok()
                .and_then(|i| step_minutes.checked_mul(i))
                .and_then(Duration::try_minutes)
                .and_then(|offset| start.checked_add_signed(offset))
                .with_context(|| format!("Sample {i} is out of the supported date range"))?;
            Ok(MeteoData::new(station.clone(), date))
        })
        .collect()
}

/// Render a series as CSV with one column per parameter
pub fn render_csv(series: &[MeteoData], params: &[Parameter]) -> String {
    let mut out = String::from("timestamp");
    for param in params {
        out.push(',');
        out.push_str(param.as_str());
    }
    out.push('\n');

    for md in series {
        out.push_str(&md.date.format("%Y-%m-%dT%H:%M:%SZ").to_string());
        for param in params {
            out.push(',');
            out.push_str(&format_value(md[*param]));
        }
        out.push('\n');
    }
    out
}

/// Generate the series and print it on stdout
pub fn run_synth(args: &SynthArgs, show_progress: bool) -> Result<()> {
    args.validate()?;
    let position = args.coordinates()?;
    let start = args.start_date()?;

    let config = load_configuration(&args.config)?;
    let mut generator =
        DataGenerator::new(&config).context("Failed to build the algorithm chains")?;

    let station = StationData::new(args.station_id.clone(), args.station_id.clone(), position);
    let mut stations = vec![empty_series(
        &station,
        start,
        args.step_minutes,
        args.sample_count(),
    )?];
    info!(
        "Generating {} samples for station {} from {}",
        stations[0].len(),
        station.id,
        start
    );

    let progress = show_progress.then(|| create_progress_bar(stations.len() as u64, "Gap filling"));
    let stats = generator.fill_stations(&mut stations, progress.as_ref());

    let params: Vec<Parameter> = config.parameters.keys().copied().collect();
    print!("{}", render_csv(&stations[0], &params));

    if show_progress {
        let status = if stats.is_complete() {
            "complete".bright_green().bold()
        } else {
            "incomplete".yellow().bold()
        };
        eprintln!("{} {}", status, stats.summary());
    }
    Ok(())
}
