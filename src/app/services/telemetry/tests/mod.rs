//! Test utilities for the telemetry parser
//!
//! Shared fixture helpers used across the test modules below.

use std::io::Write;
use tempfile::NamedTempFile;

// Test modules
mod converter_tests;
mod reader_tests;

/// Create a temporary file with the given text content
pub fn temp_file_with(content: &str) -> NamedTempFile {
    temp_file_with_bytes(content.as_bytes())
}

/// Create a temporary file with exact byte content
pub fn temp_file_with_bytes(bytes: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(bytes).unwrap();
    file.flush().unwrap();
    file
}
