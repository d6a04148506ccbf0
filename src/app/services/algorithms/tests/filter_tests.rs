//! Tests for the bounding filters

use super::*;
use crate::app::models::Parameter;
use crate::app::services::algorithms::factory::FromArguments;
use crate::app::services::algorithms::filters::{MaxFilter, MinFilter, MinMaxFilter};
use crate::app::services::algorithms::{Algorithm, create_algorithm};
use crate::constants::NODATA;
use crate::Error;

fn sample_with_ta(ta: f64) -> MeteoData {
    create_test_sample("WFJ", test_date(2024, 1, 10, 12)).with(Parameter::TA, ta)
}

#[test]
fn test_max_hard_rejects_values_above_bound() {
    let mut filter = create_algorithm("MAX", &tokens(&["300"])).unwrap();
    let mut md = sample_with_ta(305.0);

    assert!(!filter.process_one(Parameter::TA, &mut md));
    assert_eq!(md[Parameter::TA], NODATA);
}

#[test]
fn test_max_keeps_values_at_or_below_bound() {
    let mut filter = create_algorithm("MAX", &tokens(&["300"])).unwrap();

    let mut at_bound = sample_with_ta(300.0);
    assert!(filter.process_one(Parameter::TA, &mut at_bound));
    assert_eq!(at_bound[Parameter::TA], 300.0);

    let mut below = sample_with_ta(290.0);
    assert!(filter.process_one(Parameter::TA, &mut below));
    assert_eq!(below[Parameter::TA], 290.0);
}

#[test]
fn test_max_soft_replaces_with_soft_value() {
    let mut filter = create_algorithm("MAX", &tokens(&["soft", "300", "295"])).unwrap();
    let mut md = sample_with_ta(305.0);

    assert!(filter.process_one(Parameter::TA, &mut md));
    assert_eq!(md[Parameter::TA], 295.0);
}

#[test]
fn test_max_soft_defaults_to_bound() {
    let filter = MaxFilter::from_arguments(&tokens(&["SOFT", "300"]), "MAX").unwrap();
    assert!(filter.is_soft());
    assert_eq!(filter.max(), 300.0);
    assert_eq!(filter.soft_value(), 300.0);

    let mut filter = filter;
    let mut md = sample_with_ta(330.0);
    assert!(filter.process_one(Parameter::TA, &mut md));
    assert_eq!(md[Parameter::TA], 300.0);
}

#[test]
fn test_filters_leave_missing_samples_untouched() {
    let mut max = create_algorithm("MAX", &tokens(&["soft", "300", "295"])).unwrap();
    let mut min = create_algorithm("MIN", &tokens(&["soft", "200", "210"])).unwrap();
    let mut md = create_test_sample("WFJ", test_date(2024, 1, 10, 12));

    assert!(!max.process_one(Parameter::TA, &mut md));
    assert!(!min.process_one(Parameter::TA, &mut md));
    assert_eq!(md[Parameter::TA], NODATA);
}

#[test]
fn test_max_argument_errors() {
    let cases: &[&[&str]] = &[&[], &["1", "2", "3"], &["abc"], &["soft"], &["nan"]];

    for args in cases {
        let err = create_algorithm("MAX", &tokens(args)).unwrap_err();
        assert!(
            matches!(err, Error::InvalidArgument { ref algorithm, .. } if algorithm == "MAX"),
            "arguments {args:?} should be rejected, got {err}"
        );
    }
}

#[test]
fn test_min_mirrors_max() {
    let mut hard = create_algorithm("MIN", &tokens(&["0"])).unwrap();
    let mut md = create_test_sample("WFJ", test_date(2024, 1, 10, 12)).with(Parameter::HS, -0.05);
    assert!(!hard.process_one(Parameter::HS, &mut md));
    assert_eq!(md[Parameter::HS], NODATA);

    let mut soft = MinFilter::from_arguments(&tokens(&["soft", "0"]), "MIN").unwrap();
    let mut md = create_test_sample("WFJ", test_date(2024, 1, 10, 12)).with(Parameter::HS, -0.05);
    assert!(soft.process_one(Parameter::HS, &mut md));
    assert_eq!(md[Parameter::HS], 0.0);
}

#[test]
fn test_min_max_applies_both_bounds() {
    let mut filter = create_algorithm("MIN_MAX", &tokens(&["soft", "0", "1", "0", "1"])).unwrap();

    let mut low = create_test_sample("WFJ", test_date(2024, 1, 10, 12)).with(Parameter::RH, -0.2);
    assert!(filter.process_one(Parameter::RH, &mut low));
    assert_eq!(low[Parameter::RH], 0.0);

    let mut high = create_test_sample("WFJ", test_date(2024, 1, 10, 12)).with(Parameter::RH, 1.05);
    assert!(filter.process_one(Parameter::RH, &mut high));
    assert_eq!(high[Parameter::RH], 1.0);

    let mut inside = create_test_sample("WFJ", test_date(2024, 1, 10, 12)).with(Parameter::RH, 0.5);
    assert!(filter.process_one(Parameter::RH, &mut inside));
    assert_eq!(inside[Parameter::RH], 0.5);
}

#[test]
fn test_min_max_hard_mode() {
    let mut filter = MinMaxFilter::from_arguments(&tokens(&["230", "330"]), "MIN_MAX").unwrap();
    let mut md = sample_with_ta(200.0);

    assert!(!filter.process_one(Parameter::TA, &mut md));
    assert!(md.is_nodata(Parameter::TA));
}

#[test]
fn test_min_max_argument_errors() {
    assert!(create_algorithm("MIN_MAX", &tokens(&["1"])).is_err());
    assert!(create_algorithm("MIN_MAX", &tokens(&["soft", "0", "1", "0"])).is_err());
    assert!(create_algorithm("MIN_MAX", &tokens(&["1", "0"])).is_err());
}

#[test]
fn test_filter_series_reports_usable_samples() {
    let mut filter = create_algorithm("MAX", &tokens(&["300"])).unwrap();
    let mut series = vec![sample_with_ta(310.0), sample_with_ta(320.0)];
    assert!(!filter.process_series(Parameter::TA, &mut series));

    series.push(sample_with_ta(280.0));
    assert!(filter.process_series(Parameter::TA, &mut series));
    assert_eq!(MeteoData::count_nodata(&series, Parameter::TA), 2);
}
