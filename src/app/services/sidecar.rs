//! Optional per-deployment YAML sidecar metadata
//!
//! A deployment folder may carry a small YAML document with operator-curated
//! key-value metadata that is merged with the LOG-derived fields downstream.
//! An absent sidecar is an empty mapping, never an error; a sidecar that
//! exists but does not hold a mapping is.

use crate::{Error, Result};
use serde_yaml::Value;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Key-value content of a sidecar document
pub type Sidecar = HashMap<String, Value>;

/// Load the sidecar document at `path`, or an empty mapping if the file
/// does not exist.
pub fn read_sidecar(path: impl AsRef<Path>) -> Result<Sidecar> {
    let path = path.as_ref();
    if !path.is_file() {
        debug!("no sidecar at {}", path.display());
        return Ok(Sidecar::new());
    }

    let contents = fs::read_to_string(path).map_err(|e| Error::read_failed(path, e))?;
    serde_yaml::from_str(&contents).map_err(|e| Error::sidecar(path, e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_sidecar_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let sidecar = read_sidecar(temp_dir.path().join("meta.yaml")).unwrap();
        assert!(sidecar.is_empty());
    }

    #[test]
    fn test_mapping_sidecar_is_loaded() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("meta.yaml");
        fs::write(&path, "sample_station: PS122/2\nsample_haul: 7\n").unwrap();

        let sidecar = read_sidecar(&path).unwrap();
        assert_eq!(
            sidecar.get("sample_station"),
            Some(&Value::String("PS122/2".to_string()))
        );
        assert_eq!(
            sidecar.get("sample_haul"),
            Some(&Value::Number(7i64.into()))
        );
    }

    #[test]
    fn test_non_mapping_sidecar_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("meta.yaml");
        fs::write(&path, "- just\n- a\n- list\n").unwrap();

        assert!(matches!(
            read_sidecar(&path).unwrap_err(),
            Error::Sidecar { .. }
        ));
    }

    #[test]
    fn test_empty_sidecar_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("meta.yaml");
        fs::write(&path, "").unwrap();

        assert!(matches!(
            read_sidecar(&path).unwrap_err(),
            Error::Sidecar { .. }
        ));
    }
}
