//! Registry-driven parsing of single telemetry lines and fields
//!
//! Both record formats reduce to the same step: resolve a field key against
//! a registry, apply the field's converter, and return a `(name, value)`
//! pair. Errors are annotated with the offending line or the field's
//! canonical name at the point of detection and re-raised unchanged in kind.

use super::registry::{FieldRegistry, FieldSpec};
use crate::app::models::FieldValue;
use crate::{Error, Result};

/// Parse one `code;value` line of a TMD or LOG file.
///
/// The line is split on the first `;` only, since raw values may themselves
/// contain `;`. A trailing newline is tolerated so callers can hand over
/// lines straight from a file.
pub fn parse_coded_line(
    registry: &FieldRegistry,
    line: &str,
) -> Result<(&'static str, FieldValue)> {
    let trimmed = strip_newline(line);

    let Some((code_str, raw_value)) = trimmed.split_once(';') else {
        return Err(Error::format(line, "missing ';' separator"));
    };

    let code: u32 = code_str.trim().parse().map_err(|_| {
        Error::format(line, format!("field code '{}' is not numeric", code_str))
    })?;

    let spec = registry.lookup(code)?;
    Ok((spec.name, convert_field(spec, raw_value)?))
}

/// Parse one tab-separated field of a DAT snapshot line by its 1-based
/// column position.
///
/// Positions absent from the registry yield `Ok(None)`: the snapshot format
/// has many undocumented columns and skipping them is not an error.
pub fn parse_positional_field(
    registry: &FieldRegistry,
    position: u32,
    raw: &str,
) -> Result<Option<(&'static str, FieldValue)>> {
    let Some(spec) = registry.get(position) else {
        return Ok(None);
    };
    Ok(Some((spec.name, convert_field(spec, strip_newline(raw))?)))
}

/// Apply a field's converter, wrapping any failure with the field's
/// canonical name. Fields without a converter keep the raw string.
fn convert_field(spec: &FieldSpec, raw: &str) -> Result<FieldValue> {
    match spec.converter {
        Some(converter) => converter
            .apply(raw)
            .map_err(|source| Error::field_conversion(spec.name, source)),
        None => Ok(FieldValue::Text(raw.to_string())),
    }
}

fn strip_newline(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
