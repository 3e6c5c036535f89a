//! Core data models for LOKI telemetry records

use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

/// A typed value produced by parsing one telemetry field.
///
/// Fields without a registered converter stay raw as [`FieldValue::Text`].
/// Lenient numeric fields parse to `Float(NaN)` when the instrument left
/// them blank or wrote garbage; NaN therefore means "unrecorded", not
/// "absent from the file".
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Free text or identifier field, kept verbatim
    Text(String),
    /// Floating point measurement
    Float(f64),
    /// Integer counter (picture numbers and the like)
    Integer(i64),
    /// Calendar date
    Date(NaiveDate),
    /// Local time of day
    Time(NaiveTime),
}

impl FieldValue {
    /// Borrow the raw text of a `Text` value
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Numeric view of a `Float` or `Integer` value
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Float(v) => Some(*v),
            FieldValue::Integer(v) => Some(*v as f64),
            _ => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Float(v) => write!(f, "{}", v),
            FieldValue::Integer(v) => write!(f, "{}", v),
            FieldValue::Date(d) => write!(f, "{}", d),
            FieldValue::Time(t) => write!(f, "{}", t),
        }
    }
}

/// One parsed telemetry file: canonical field name to typed value.
///
/// A record holds at most one entry per field name. TMD and LOG files are
/// concatenations of per-line `code;value` pairs and are not validated
/// against duplicates, so a repeated code overwrites the earlier value
/// (last write wins).
pub type Record = HashMap<String, FieldValue>;
