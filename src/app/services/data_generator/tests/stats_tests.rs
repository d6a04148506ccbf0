//! Tests for gap filling statistics

use super::*;
use crate::app::models::Parameter;
use crate::app::services::data_generator::{GenerationStats, ParameterStats};

#[test]
fn test_record_and_rates() {
    let mut series = create_empty_series("DAV", 1560.0, 4);
    let mut stats = GenerationStats::new();
    stats.samples = series.len();

    stats.record_before(Parameter::TA, &series);
    for md in series.iter_mut().take(3) {
        md.set(Parameter::TA, 270.0);
    }
    stats.record_after(Parameter::TA, &series);

    assert_eq!(
        stats.parameters[&Parameter::TA],
        ParameterStats {
            missing_before: 4,
            missing_after: 1
        }
    );
    assert_eq!(stats.fill_rate(), 75.0);
    assert!(!stats.is_complete());
}

#[test]
fn test_filled_ignores_rejections() {
    let counts = ParameterStats {
        missing_before: 1,
        missing_after: 3,
    };
    assert_eq!(counts.filled(), 0);
}

#[test]
fn test_merge() {
    let mut total = GenerationStats::new();
    let mut one = GenerationStats::new();
    one.samples = 10;
    one.stations = 1;
    one.parameters.insert(
        Parameter::RH,
        ParameterStats {
            missing_before: 4,
            missing_after: 0,
        },
    );

    total.merge(&one);
    total.merge(&one);

    assert_eq!(total.samples, 20);
    assert_eq!(total.stations, 2);
    assert_eq!(total.missing_before(), 8);
    assert!(total.is_complete());
}

#[test]
fn test_summary() {
    let empty = GenerationStats::new();
    assert!(empty.summary().contains("no parameter configured"));

    let mut stats = GenerationStats::new();
    stats.samples = 24;
    stats.stations = 1;
    stats.parameters.insert(
        Parameter::ILWR,
        ParameterStats {
            missing_before: 24,
            missing_after: 6,
        },
    );
    let summary = stats.summary();
    assert!(summary.contains("24 samples from 1 stations"));
    assert!(summary.contains("75.0% filled"));
    assert!(summary.contains("ILWR 24->6"));
}
