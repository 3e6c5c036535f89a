//! Application constants for the LOKI processor
//!
//! This module contains the directory-layout conventions of a LOKI
//! deployment, file patterns, and default values used throughout the
//! application.

// =============================================================================
// Deployment Folder Layout
// =============================================================================

/// Subdirectory holding the captured plankton images
pub const PICTURES_DIR_NAME: &str = "Pictures";

/// Subdirectory holding the telemetry stream files (instrument spelling)
pub const TELEMETRY_DIR_NAME: &str = "Telemetrie";

/// Subdirectory holding the deployment log
pub const LOG_DIR_NAME: &str = "Log";

/// File pattern of the deployment log inside [`LOG_DIR_NAME`]
pub const LOG_FILE_PATTERN: &str = "LOKI*.log";

// =============================================================================
// Date and Time Formats
// =============================================================================

/// Calendar dates in LOG records (day.month.year)
pub const LOG_DATE_FORMAT: &str = "%d.%m.%Y";

/// Times of day in LOG records (ISO local time, optional fraction)
pub const LOG_TIME_FORMAT: &str = "%H:%M:%S%.f";

/// Times of day without a seconds component
pub const LOG_TIME_FORMAT_SHORT: &str = "%H:%M";

// =============================================================================
// Archiving
// =============================================================================

/// External archiver invoked per deployment folder
pub const ZIP_COMMAND: &str = "zip";

/// Extension of the produced archives
pub const ARCHIVE_EXTENSION: &str = "zip";

/// Default number of concurrent archive processes
pub const DEFAULT_PARALLEL_WORKERS: usize = 1;

/// Upper bound on `--workers` accepted by the CLI
pub const MAX_PARALLEL_WORKERS: usize = 100;
