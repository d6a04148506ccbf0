//! Tests for the constant, sinusoidal, pressure and humidity generators

use super::*;
use crate::app::models::Parameter;
use crate::app::services::algorithms::factory::FromArguments;
use crate::app::services::algorithms::generators::{SinGenerator, SinPeriod};
use crate::app::services::algorithms::create_algorithm;
use crate::app::services::meteolaws::atmosphere;
use crate::constants::NODATA;
use chrono::Duration;

#[test]
fn test_cst_fills_missing_only() {
    let mut generator = create_algorithm("cst", &tokens(&["0.7"])).unwrap();

    let mut missing = create_test_sample("WFJ", test_date(2024, 1, 10, 12));
    assert!(generator.process_one(Parameter::RH, &mut missing));
    assert_eq!(missing[Parameter::RH], 0.7);

    let mut present = create_test_sample("WFJ", test_date(2024, 1, 10, 12)).with(Parameter::RH, 0.4);
    assert!(generator.process_one(Parameter::RH, &mut present));
    assert_eq!(present[Parameter::RH], 0.4);
}

#[test]
fn test_cst_requires_one_number() {
    assert!(create_algorithm("CST", &[]).is_err());
    assert!(create_algorithm("CST", &tokens(&["1", "2"])).is_err());
    assert!(create_algorithm("CST", &tokens(&["warm"])).is_err());
}

#[test]
fn test_sin_period_position() {
    assert_eq!(SinPeriod::Yearly.position(test_date(2023, 1, 1, 0)), 0.0);
    assert_close(SinPeriod::Daily.position(test_date(2023, 5, 5, 18)), 0.75, 1e-12);
    // 2024 is a leap year: July 2nd is ordinal day 183 of 366
    assert_close(SinPeriod::Yearly.position(test_date(2024, 7, 2, 0)), 0.5, 1e-12);
}

#[test]
fn test_sin_reaches_minimum_at_phase() {
    let generator =
        SinGenerator::from_arguments(&tokens(&["daily", "270", "290", "0.25"]), "SIN").unwrap();

    assert_close(generator.value_at(test_date(2024, 3, 1, 6)), 270.0, 1e-9);
    assert_close(generator.value_at(test_date(2024, 3, 1, 18)), 290.0, 1e-9);
    assert_close(generator.value_at(test_date(2024, 3, 1, 12)), 280.0, 1e-9);
}

#[test]
fn test_sin_fills_missing_samples() {
    let mut generator =
        create_algorithm("SIN", &tokens(&["yearly", "268.26", "285.56", "0"])).unwrap();
    let mut md = create_test_sample("WFJ", test_date(2023, 1, 1, 0));

    assert!(generator.process_one(Parameter::TA, &mut md));
    assert_close(md[Parameter::TA], 268.26, 1e-9);
}

#[test]
fn test_sin_yearly_temperature_cycle() {
    let generator =
        SinGenerator::from_arguments(&tokens(&["yearly", "268.26", "285.56", "0.0833"]), "SIN")
            .unwrap();

    // 0.0833 of a 365 day year after January 1st
    let phase = test_date(2023, 1, 1, 0) + Duration::milliseconds(2_626_948_800);
    assert_close(generator.value_at(phase), 268.26, 1e-6);
    assert_close(generator.value_at(phase + Duration::days(182)), 285.56, 1e-2);

    // same calendar time in two non-leap years
    let spring = Utc.with_ymd_and_hms(2022, 5, 17, 13, 30, 0).unwrap();
    let next_spring = Utc.with_ymd_and_hms(2023, 5, 17, 13, 30, 0).unwrap();
    assert_close(generator.value_at(spring), generator.value_at(next_spring), 1e-9);

    // continuous across the new year
    let before = Utc.with_ymd_and_hms(2023, 12, 31, 23, 59, 59).unwrap();
    let after = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    assert_close(generator.value_at(before), generator.value_at(after), 1e-3);
}

#[test]
fn test_sin_argument_errors() {
    assert!(create_algorithm("SIN", &tokens(&["weekly", "0", "1", "0"])).is_err());
    assert!(create_algorithm("SIN", &tokens(&["daily", "2", "1", "0"])).is_err());
    assert!(create_algorithm("SIN", &tokens(&["daily", "0", "1", "1.5"])).is_err());
    assert!(create_algorithm("SIN", &tokens(&["daily", "0", "1"])).is_err());
}

#[test]
fn test_std_press_at_sea_level() {
    let mut generator = create_algorithm("STD_PRESS", &[]).unwrap();
    let mut md = create_test_sample("WFJ", test_date(2024, 1, 10, 12));
    md.station.position.altitude = 0.0;

    assert!(generator.process_one(Parameter::P, &mut md));
    assert_close(md[Parameter::P], 101_325.0, 1e-6);
}

#[test]
fn test_std_press_decreases_with_altitude() {
    let mut generator = create_algorithm("STD_PRESS", &[]).unwrap();
    let mut md = create_test_sample("WFJ", test_date(2024, 1, 10, 12));

    assert!(generator.process_one(Parameter::P, &mut md));
    assert!(md[Parameter::P] > 70_000.0 && md[Parameter::P] < 80_000.0);
}

#[test]
fn test_std_press_without_altitude_is_unresolved() {
    let mut generator = create_algorithm("STD_PRESS", &[]).unwrap();
    let mut md = create_test_sample("WFJ", test_date(2024, 1, 10, 12));
    md.station.position.altitude = NODATA;

    assert!(!generator.process_one(Parameter::P, &mut md));
    assert!(md.is_nodata(Parameter::P));
}

#[test]
fn test_std_press_rejects_arguments() {
    assert!(create_algorithm("STD_PRESS", &tokens(&["1000"])).is_err());
}

#[test]
fn test_relhum_from_dew_point_at_saturation() {
    let mut generator = create_algorithm("RELHUM", &[]).unwrap();
    let mut md = create_test_sample("WFJ", test_date(2024, 1, 10, 12))
        .with(Parameter::TA, 280.0)
        .with(Parameter::TD, 280.0);

    assert!(generator.process_one(Parameter::RH, &mut md));
    assert_close(md[Parameter::RH], 1.0, 1e-9);
}

#[test]
fn test_relhum_from_specific_humidity() {
    let mut generator = create_algorithm("RELHUM", &[]).unwrap();
    let mut md = create_test_sample("WFJ", test_date(2024, 1, 10, 12))
        .with(Parameter::TA, 283.15)
        .with(Parameter::SH, 0.005)
        .with(Parameter::P, 90_000.0);

    assert!(generator.process_one(Parameter::RH, &mut md));
    let expected = atmosphere::specific_to_rh(90_000.0, 283.15, 0.005);
    assert_close(md[Parameter::RH], expected, 1e-12);
    assert!(md[Parameter::RH] > 0.0 && md[Parameter::RH] <= 1.0);
}

#[test]
fn test_relhum_unresolved_without_inputs() {
    let mut generator = create_algorithm("RELHUM", &[]).unwrap();
    let mut md = create_test_sample("WFJ", test_date(2024, 1, 10, 12)).with(Parameter::TD, 270.0);

    assert!(!generator.process_one(Parameter::RH, &mut md));
    assert!(md.is_nodata(Parameter::RH));
}
