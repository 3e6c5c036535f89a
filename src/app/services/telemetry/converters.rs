//! Raw string to typed value conversion for telemetry fields
//!
//! Each registered field carries at most one [`Converter`]. The failure
//! policy is part of the converter variant: [`Converter::LocaleFloat`]
//! resolves unparseable input to NaN because the telemetry stream contains
//! unrecorded/blank numeric fields that must not abort an otherwise-good
//! file, while the snapshot formats use strict converters whose failures
//! surface as typed errors.

use crate::app::models::FieldValue;
use crate::constants::{LOG_DATE_FORMAT, LOG_TIME_FORMAT, LOG_TIME_FORMAT_SHORT};
use chrono::{NaiveDate, NaiveTime};
use thiserror::Error;

/// A converter failure, preserving the offending value and the underlying
/// parse error
#[derive(Debug, Error)]
pub enum ConversionError {
    #[error("invalid number '{value}'")]
    Float {
        value: String,
        #[source]
        source: std::num::ParseFloatError,
    },

    #[error("invalid integer '{value}'")]
    Integer {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("invalid date '{value}' (expected day.month.year)")]
    Date {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("invalid time of day '{value}'")]
    Time {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}

/// Pure conversion from a raw field string to a typed value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Converter {
    /// Floating point with `,` as the decimal separator. Unparseable input
    /// resolves to NaN instead of an error.
    LocaleFloat,
    /// Strict floating point with `.` as the decimal separator.
    Float,
    /// Calendar date, day.month.year.
    Date,
    /// ISO local time of day, seconds and fraction optional.
    Time,
    /// Base-10 signed integer.
    Integer,
}

impl Converter {
    /// Apply the conversion to one raw field value.
    pub fn apply(self, raw: &str) -> Result<FieldValue, ConversionError> {
        match self {
            Converter::LocaleFloat => Ok(FieldValue::Float(
                raw.replace(',', ".").trim().parse().unwrap_or(f64::NAN),
            )),
            Converter::Float => raw
                .trim()
                .parse()
                .map(FieldValue::Float)
                .map_err(|source| ConversionError::Float {
                    value: raw.to_string(),
                    source,
                }),
            Converter::Date => NaiveDate::parse_from_str(raw, LOG_DATE_FORMAT)
                .map(FieldValue::Date)
                .map_err(|source| ConversionError::Date {
                    value: raw.to_string(),
                    source,
                }),
            Converter::Time => NaiveTime::parse_from_str(raw, LOG_TIME_FORMAT)
                .or_else(|_| NaiveTime::parse_from_str(raw, LOG_TIME_FORMAT_SHORT))
                .map(FieldValue::Time)
                .map_err(|source| ConversionError::Time {
                    value: raw.to_string(),
                    source,
                }),
            Converter::Integer => raw
                .trim()
                .parse()
                .map(FieldValue::Integer)
                .map_err(|source| ConversionError::Integer {
                    value: raw.to_string(),
                    source,
                }),
        }
    }
}
