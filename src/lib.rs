//! LOKI Processor Library
//!
//! A Rust library for working with raw data produced by the LOKI
//! (Lightframe Onsight Keyspecies Investigation) plankton imaging system.
//!
//! This library provides tools for:
//! - Parsing the three LOKI telemetry file formats (TMD, DAT, LOG) with
//!   per-field type conversion driven by static field registries
//! - Decoding telemetry files written in UTF-8 or Windows-1252, with
//!   statistical encoding detection as a diagnostic of last resort
//! - Discovering deployment folders inside an arbitrary directory tree
//! - Loading optional per-deployment YAML sidecar metadata
//! - Compressing discovered deployment folders into zip archives

pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod deployment_scanner;
        pub mod sidecar;
        pub mod telemetry;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{FieldValue, Record};
pub use app::services::deployment_scanner::{DataRootIter, find_data_roots};
pub use app::services::sidecar::read_sidecar;
pub use app::services::telemetry::{
    ConversionError, LOG_TO_ECOTAXA, read_dat, read_delimited_file, read_log, read_snapshot_file,
    read_tmd,
};

use std::path::{Path, PathBuf};

/// Result type alias for the LOKI processor
pub type Result<T> = std::result::Result<T, Error>;

/// Comprehensive error types for LOKI processing operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// No attempted text encoding could decode the file
    #[error(
        "undecodable text in '{}': not UTF-8 or Windows-1252 (detector guessed {guess})",
        .path.display()
    )]
    Decode { path: PathBuf, guess: String },

    /// A record line does not match the expected `code;value` structure
    #[error("malformed record line '{line}': {message}")]
    Format { line: String, message: String },

    /// A numeric field code has no entry in the registry
    #[error("unknown field code {code} in {registry} registry")]
    UnknownFieldCode { registry: &'static str, code: u32 },

    /// A field's raw value failed its converter
    #[error("field {field}: conversion failed")]
    FieldConversion {
        field: &'static str,
        #[source]
        source: ConversionError,
    },

    /// A remap entry refers to a log field that was not parsed
    #[error("remap target '{external}' refers to missing log field '{internal}'")]
    RemapKey { external: String, internal: String },

    /// Directory enumeration failed during deployment discovery
    #[error("cannot scan directory '{}'", .path.display())]
    Discovery {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An ignore glob pattern could not be compiled
    #[error("invalid ignore pattern '{pattern}'")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    /// A sidecar file exists but does not hold a key-value mapping
    #[error("sidecar file '{}' is not a key-value mapping: {message}", .path.display())]
    Sidecar { path: PathBuf, message: String },

    /// Launching or running the external archiver failed
    #[error("archive step failed: {message}")]
    Archive { message: String },

    /// Configuration error
    #[error("configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a decode error carrying the detector's best guess
    pub fn decode(path: impl Into<PathBuf>, guess: impl Into<String>) -> Self {
        Self::Decode {
            path: path.into(),
            guess: guess.into(),
        }
    }

    /// Create a format error carrying the offending line
    pub fn format(line: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Format {
            line: line.into(),
            message: message.into(),
        }
    }

    /// Create an unknown field code error
    pub fn unknown_field_code(registry: &'static str, code: u32) -> Self {
        Self::UnknownFieldCode { registry, code }
    }

    /// Wrap a converter failure with the field's canonical name
    pub fn field_conversion(field: &'static str, source: ConversionError) -> Self {
        Self::FieldConversion { field, source }
    }

    /// Create a remap lookup error
    pub fn remap_key(external: impl Into<String>, internal: impl Into<String>) -> Self {
        Self::RemapKey {
            external: external.into(),
            internal: internal.into(),
        }
    }

    /// Create a discovery error for a directory that could not be read
    pub fn discovery(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Discovery {
            path: path.into(),
            source,
        }
    }

    /// Create an invalid ignore pattern error
    pub fn pattern(pattern: impl Into<String>, source: glob::PatternError) -> Self {
        Self::Pattern {
            pattern: pattern.into(),
            source,
        }
    }

    /// Create a sidecar content error
    pub fn sidecar(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Sidecar {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create an archive error
    pub fn archive(message: impl Into<String>) -> Self {
        Self::Archive {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an I/O error for a failed read of `path`
    pub fn read_failed(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            message: format!("failed to read '{}'", path.display()),
            source,
        }
    }
}
