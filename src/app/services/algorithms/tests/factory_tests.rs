//! Tests for the algorithm registry

use super::*;
use crate::app::models::Parameter;
use crate::app::services::algorithms::factory::find_algorithm;
use crate::app::services::algorithms::{AlgorithmKind, available_algorithms, create_algorithm};
use crate::Error;

#[test]
fn test_registry_contents() {
    let names: Vec<&str> = available_algorithms().iter().map(|info| info.name).collect();
    assert_eq!(
        names,
        vec![
            "MAX",
            "MIN",
            "MIN_MAX",
            "CST",
            "SIN",
            "STD_PRESS",
            "RELHUM",
            "CLEARSKY_LW",
            "ALLSKY_LW",
            "POT_RADIATION",
            "HS_SWE",
        ]
    );

    let filters = available_algorithms()
        .iter()
        .filter(|info| info.kind == AlgorithmKind::Filter)
        .count();
    assert_eq!(filters, 3);
}

#[test]
fn test_lookup_is_case_insensitive() {
    for name in ["max", "Max", "MAX", " max "] {
        let algorithm = create_algorithm(name, &tokens(&["300"])).unwrap();
        assert_eq!(algorithm.name(), "MAX");
        assert_eq!(algorithm.kind(), AlgorithmKind::Filter);
    }
    assert_eq!(find_algorithm("pot_radiation").map(|info| info.name), Some("POT_RADIATION"));
}

#[test]
fn test_unknown_algorithm() {
    let err = create_algorithm("KALMAN", &[]).unwrap_err();
    assert!(matches!(err, Error::UnknownAlgorithm { ref name } if name == "KALMAN"));
    assert!(find_algorithm("").is_none());
}

#[test]
fn test_constructor_errors_propagate() {
    let err = create_algorithm("max", &tokens(&["1", "2", "3"])).unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { ref algorithm, .. } if algorithm == "MAX"));
}

#[test]
fn test_every_call_returns_a_fresh_instance() {
    let mut first = create_algorithm("ALLSKY_LW", &tokens(&["UNSWORTH"])).unwrap();
    let mut second = create_algorithm("ALLSKY_LW", &tokens(&["UNSWORTH"])).unwrap();

    let mut md = create_test_sample("WFJ", test_date(2024, 1, 10, 12))
        .with(Parameter::TA, 270.0)
        .with(Parameter::RH, 0.7);
    let mut copy = md.clone();

    assert!(first.process_one(Parameter::ILWR, &mut md));
    assert!(second.process_one(Parameter::ILWR, &mut copy));
    assert_eq!(md[Parameter::ILWR], copy[Parameter::ILWR]);
}
