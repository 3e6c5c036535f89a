//! Parser for the LOKI telemetry file formats
//!
//! A LOKI deployment produces three textual record formats, each encoding a
//! numbered set of fields as delimited text:
//! - **TMD** - time-indexed telemetry stream, one `code;value` field per line
//! - **DAT** - single-line tab-delimited sensor snapshot, fields keyed by
//!   1-based column position
//! - **LOG** - deployment metadata, same line format as TMD but with its own
//!   field registry
//!
//! ## Architecture
//!
//! - [`registry`] - static field tables mapping integer codes to canonical
//!   names and converters
//! - [`converters`] - raw string to typed value conversion
//! - [`line_parser`] - single line/field parsing with error-context
//!   annotation
//! - [`reader`] - whole-file readers with multi-encoding fallback
//!
//! ## Usage
//!
//! ```no_run
//! use loki_processor::app::services::telemetry::{read_log, read_tmd, LOG_TO_ECOTAXA};
//!
//! # fn example() -> loki_processor::Result<()> {
//! let telemetry = read_tmd("Telemetrie/20190705 10000101.tmd")?;
//! let metadata = read_log("Log/LOKI_1034.log", Some(LOG_TO_ECOTAXA))?;
//!
//! println!("pressure: {:?}", telemetry.get("PRESS"));
//! println!("station: {:?}", metadata.get("sample_station"));
//! # Ok(())
//! # }
//! ```

pub mod converters;
pub mod line_parser;
pub mod reader;
pub mod registry;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use converters::{ConversionError, Converter};
pub use line_parser::{parse_coded_line, parse_positional_field};
pub use reader::{
    LOG_TO_ECOTAXA, read_dat, read_delimited_file, read_log, read_snapshot_file, read_tmd,
};
pub use registry::{DAT_FIELDS, FieldRegistry, FieldSpec, LOG_FIELDS, TMD_FIELDS};
