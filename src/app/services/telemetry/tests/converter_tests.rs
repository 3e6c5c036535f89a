//! Tests for the field value converters

use crate::app::models::FieldValue;
use crate::app::services::telemetry::converters::{ConversionError, Converter};
use chrono::{NaiveDate, NaiveTime};

#[test]
fn test_locale_float_parses_comma_decimal() {
    assert_eq!(
        Converter::LocaleFloat.apply("3,14").unwrap(),
        FieldValue::Float(3.14)
    );
    assert_eq!(
        Converter::LocaleFloat.apply("-12,5").unwrap(),
        FieldValue::Float(-12.5)
    );
}

#[test]
fn test_locale_float_accepts_dot_decimal_too() {
    assert_eq!(
        Converter::LocaleFloat.apply("3.14").unwrap(),
        FieldValue::Float(3.14)
    );
}

#[test]
fn test_locale_float_resolves_garbage_to_nan() {
    for raw in ["abc", "", "12,3,4", "--"] {
        match Converter::LocaleFloat.apply(raw).unwrap() {
            FieldValue::Float(v) => assert!(v.is_nan(), "expected NaN for {raw:?}"),
            other => panic!("expected Float, got {other:?}"),
        }
    }
}

#[test]
fn test_strict_float_parses() {
    assert_eq!(
        Converter::Float.apply("1450.75").unwrap(),
        FieldValue::Float(1450.75)
    );
    // Surrounding whitespace is tolerated, like the snapshot hardware emits.
    assert_eq!(
        Converter::Float.apply(" 8.25 ").unwrap(),
        FieldValue::Float(8.25)
    );
}

#[test]
fn test_strict_float_propagates_failure() {
    assert!(matches!(
        Converter::Float.apply("abc").unwrap_err(),
        ConversionError::Float { .. }
    ));
    // Comma decimals are not valid in the strict (snapshot) format.
    assert!(matches!(
        Converter::Float.apply("3,14").unwrap_err(),
        ConversionError::Float { .. }
    ));
}

#[test]
fn test_date_parses_day_month_year() {
    assert_eq!(
        Converter::Date.apply("05.07.2019").unwrap(),
        FieldValue::Date(NaiveDate::from_ymd_opt(2019, 7, 5).unwrap())
    );
}

#[test]
fn test_date_rejects_other_layouts() {
    for raw in ["2019-07-05", "5/7/2019", "32.01.2019", ""] {
        assert!(matches!(
            Converter::Date.apply(raw).unwrap_err(),
            ConversionError::Date { .. }
        ));
    }
}

#[test]
fn test_time_parses_iso_local_time() {
    assert_eq!(
        Converter::Time.apply("10:41:17").unwrap(),
        FieldValue::Time(NaiveTime::from_hms_opt(10, 41, 17).unwrap())
    );
    assert_eq!(
        Converter::Time.apply("10:41:17.250").unwrap(),
        FieldValue::Time(NaiveTime::from_hms_milli_opt(10, 41, 17, 250).unwrap())
    );
    assert_eq!(
        Converter::Time.apply("10:41").unwrap(),
        FieldValue::Time(NaiveTime::from_hms_opt(10, 41, 0).unwrap())
    );
}

#[test]
fn test_time_rejects_garbage() {
    assert!(matches!(
        Converter::Time.apply("25:00:00").unwrap_err(),
        ConversionError::Time { .. }
    ));
}

#[test]
fn test_integer_parses_base_10() {
    assert_eq!(
        Converter::Integer.apply("4711").unwrap(),
        FieldValue::Integer(4711)
    );
    assert_eq!(
        Converter::Integer.apply(" 42 ").unwrap(),
        FieldValue::Integer(42)
    );
}

#[test]
fn test_integer_propagates_failure() {
    assert!(matches!(
        Converter::Integer.apply("4711.0").unwrap_err(),
        ConversionError::Integer { .. }
    ));
}
