//! Tests for the single pass chain semantics

use super::*;
use crate::app::models::Parameter;
use crate::app::services::data_generator::ProcessingChain;
use crate::config::GapFillConfig;
use crate::constants::NODATA;
use crate::Error;

#[test]
fn test_first_generator_wins() {
    let mut cst_first = ProcessingChain::new(Parameter::TA)
        .with(algorithm("CST", &["273.15"]))
        .with(algorithm("SIN", &["daily", "260", "280", "0"]));
    let mut sin_first = ProcessingChain::new(Parameter::TA)
        .with(algorithm("SIN", &["daily", "260", "280", "0"]))
        .with(algorithm("CST", &["273.15"]));

    let mut a = create_empty_series("DAV", 1560.0, 1).remove(0);
    let mut b = a.clone();

    assert!(cst_first.process_sample(&mut a));
    assert!(sin_first.process_sample(&mut b));
    assert_eq!(a[Parameter::TA], 273.15);
    // midnight is the phase of the sinusoid, hence its minimum
    assert!((b[Parameter::TA] - 260.0).abs() < 1e-9);
}

#[test]
fn test_unresolvable_sample_stays_missing() {
    let mut chain = ProcessingChain::new(Parameter::RH)
        .with(algorithm("RELHUM", &[]))
        .with(algorithm("CLEARSKY_LW", &["DILLEY"]));
    let mut md = create_empty_series("DAV", NODATA, 1).remove(0);

    assert!(!chain.process_sample(&mut md));
    assert_eq!(md[Parameter::RH], NODATA);
}

#[test]
fn test_filter_rejection_is_filled_by_later_generator() {
    let mut chain = ProcessingChain::new(Parameter::TA)
        .with(algorithm("MAX", &["320"]))
        .with(algorithm("CST", &["273.15"]));

    let mut md = create_empty_series("DAV", 1560.0, 1)
        .remove(0)
        .with(Parameter::TA, 350.0);
    assert!(chain.process_sample(&mut md));
    assert_eq!(md[Parameter::TA], 273.15);
}

#[test]
fn test_generated_values_are_not_filtered_again() {
    // single pass: the earlier filter never sees the generated value
    let mut chain = ProcessingChain::new(Parameter::TA)
        .with(algorithm("MAX", &["300"]))
        .with(algorithm("CST", &["400"]));
    let mut md = create_empty_series("DAV", 1560.0, 1).remove(0);

    assert!(chain.process_sample(&mut md));
    assert_eq!(md[Parameter::TA], 400.0);
}

#[test]
fn test_generators_never_overwrite_present_data() {
    let mut chain = ProcessingChain::new(Parameter::P).with(algorithm("STD_PRESS", &[]));
    let mut series = create_empty_series("DAV", 1560.0, 3);
    series[1].set(Parameter::P, 84_000.0);

    assert!(chain.process_series(&mut series));
    assert_eq!(series[1][Parameter::P], 84_000.0);
    assert_eq!(series[0][Parameter::P], series[2][Parameter::P]);
    assert_ne!(series[0][Parameter::P], 84_000.0);
}

#[test]
fn test_series_reports_incomplete_chains() {
    let mut chain = ProcessingChain::new(Parameter::SWE).with(algorithm("HS_SWE", &[]));
    let mut series = create_empty_series("DAV", 1560.0, 2);
    series[0].set(Parameter::HS, 0.0);

    assert!(!chain.process_series(&mut series));
    assert_eq!(series[0][Parameter::SWE], 0.0);
    assert!(series[1].is_nodata(Parameter::SWE));
}

#[test]
fn test_from_config_orders_filters_before_generators() {
    let config = GapFillConfig::new()
        .with_generator(Parameter::TA, "CST", &["273.15"])
        .with_filter(Parameter::TA, "min_max", &["230", "330"]);
    let chain = ProcessingChain::from_config(
        Parameter::TA,
        config.parameter(Parameter::TA).unwrap(),
    )
    .unwrap();

    assert_eq!(chain.algorithm_names(), vec!["MIN_MAX", "CST"]);
    assert_eq!(chain.to_string(), "TA chain: MIN_MAX -> CST");
}

#[test]
fn test_from_config_propagates_construction_errors() {
    let config = GapFillConfig::new().with_filter(Parameter::TA, "MAX", &["1", "2", "3"]);
    let err = ProcessingChain::from_config(Parameter::TA, config.parameter(Parameter::TA).unwrap())
        .unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { .. }));
}

#[test]
fn test_empty_chain() {
    let mut chain = ProcessingChain::new(Parameter::HS);
    assert!(chain.is_empty());
    assert_eq!(chain.to_string(), "HS chain: (empty)");

    let mut md = create_empty_series("DAV", 1560.0, 1).remove(0);
    assert!(!chain.process_sample(&mut md));
}
