//! Whole-file readers for the LOKI record formats
//!
//! TMD and LOG files arrive in UTF-8 or, from older recorder firmware, in
//! Windows-1252. The readers decode the raw bytes against that fixed
//! attempt list; when neither encoding applies, a statistical detector is
//! consulted once so the resulting error names a likely culprit for the
//! operator. Decoding never loops and never guesses silently.
//!
//! A parse error anywhere in a file aborts the whole read. Telemetry
//! records are small and must be trusted wholesale or not at all, so no
//! partial record is ever returned.

use super::line_parser::{parse_coded_line, parse_positional_field};
use super::registry::{DAT_FIELDS, FieldRegistry, LOG_FIELDS, TMD_FIELDS};
use crate::app::models::Record;
use crate::{Error, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Byte values with no assignment in the Windows-1252 table. A strict
/// decoder rejects them; WHATWG-style decoders would map them to C1
/// controls and mask the mojibake.
const WINDOWS_1252_UNMAPPED: [u8; 5] = [0x81, 0x8D, 0x8F, 0x90, 0x9D];

/// Projection of LOG fields onto the column names expected by EcoTaxa
/// imports.
pub const LOG_TO_ECOTAXA: &[(&str, &str)] = &[
    ("sample_date", "DATE"),
    ("sample_time", "TIME"),
    ("acq_instrument_name", "DEVICE"),
    ("acq_instrument_serial", "LOKI"),
    ("sample_cruise", "CRUISE"),
    ("sample_station", "STATION"),
    ("sample_station_no", "STATION_NR"),
    ("sample_haul", "HAUL"),
    ("sample_user", "USER"),
    ("sample_vessel", "SHIP"),
    ("sample_gps_src", "GPS_SRC"),
    ("sample_latitude", "FIX_LAT"),
    ("sample_longitude", "FIX_LON"),
];

/// Read a `code;value`-per-line file into a [`Record`] using the given
/// registry.
///
/// Tries UTF-8 first, then Windows-1252. If neither decodes, the read fails
/// with [`Error::Decode`] carrying the statistical detector's best guess;
/// that failure is terminal and requires operator attention. Repeated field
/// codes overwrite earlier values (last write wins).
pub fn read_delimited_file(path: impl AsRef<Path>, registry: &FieldRegistry) -> Result<Record> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|e| Error::read_failed(path, e))?;
    let text = decode_text(path, &bytes)?;

    let mut record = Record::new();
    for line in text.lines() {
        let (name, value) = parse_coded_line(registry, line)?;
        record.insert(name.to_string(), value);
    }

    debug!(
        "parsed {} {} fields from {}",
        record.len(),
        registry.name(),
        path.display()
    );
    Ok(record)
}

/// Read a time-indexed telemetry stream (.tmd file).
pub fn read_tmd(path: impl AsRef<Path>) -> Result<Record> {
    read_delimited_file(path, &TMD_FIELDS)
}

/// Read a deployment log (.log file), optionally projecting the result
/// through a field-name remap such as [`LOG_TO_ECOTAXA`].
///
/// The remap is applied after the full record is assembled; an entry whose
/// internal key is absent from the parsed record fails with
/// [`Error::RemapKey`].
pub fn read_log(path: impl AsRef<Path>, remap: Option<&[(&str, &str)]>) -> Result<Record> {
    let record = read_delimited_file(path, &LOG_FIELDS)?;

    let Some(mapping) = remap else {
        return Ok(record);
    };

    let mut projected = Record::with_capacity(mapping.len());
    for (external, internal) in mapping {
        let value = record
            .get(*internal)
            .cloned()
            .ok_or_else(|| Error::remap_key(*external, *internal))?;
        projected.insert((*external).to_string(), value);
    }
    Ok(projected)
}

/// Read a single-line tab-delimited snapshot file into a [`Record`] using
/// the given registry.
///
/// Only the first line is honored. Some .dat files carry more than one
/// line; extra lines are silently discarded.
pub fn read_snapshot_file(path: impl AsRef<Path>, registry: &FieldRegistry) -> Result<Record> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|e| Error::read_failed(path, e))?;
    let first_line = contents.lines().next().unwrap_or("");

    let mut record = Record::new();
    for (index, raw) in first_line.split('\t').enumerate() {
        let position = (index + 1) as u32;
        if let Some((name, value)) = parse_positional_field(registry, position, raw)? {
            record.insert(name.to_string(), value);
        }
    }

    debug!(
        "parsed {} {} fields from {}",
        record.len(),
        registry.name(),
        path.display()
    );
    Ok(record)
}

/// Read a sensor snapshot (.dat file).
pub fn read_dat(path: impl AsRef<Path>) -> Result<Record> {
    read_snapshot_file(path, &DAT_FIELDS)
}

/// Decode file content, trying UTF-8 then strict Windows-1252.
fn decode_text(path: &Path, bytes: &[u8]) -> Result<String> {
    if let Ok(text) = std::str::from_utf8(bytes) {
        return Ok(text.to_owned());
    }

    debug!("{} is not UTF-8, retrying as Windows-1252", path.display());
    if let Some(text) = decode_windows_1252(bytes) {
        return Ok(text);
    }

    let mut detector = chardetng::EncodingDetector::new();
    detector.feed(bytes, true);
    let guess = detector.guess(None, true);
    Err(Error::decode(path, guess.name()))
}

fn decode_windows_1252(bytes: &[u8]) -> Option<String> {
    if bytes.iter().any(|b| WINDOWS_1252_UNMAPPED.contains(b)) {
        return None;
    }
    let (text, _, had_errors) = encoding_rs::WINDOWS_1252.decode(bytes);
    if had_errors {
        return None;
    }
    Some(text.into_owned())
}
