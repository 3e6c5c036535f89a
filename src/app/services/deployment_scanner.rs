//! Deployment folder discovery
//!
//! A LOKI deployment folder is recognized structurally: a directory that
//! directly contains both a `Pictures` and a `Telemetrie` subdirectory.
//! Discovery walks a directory tree depth-first, yields each deployment
//! folder as soon as it is found, and never descends into one (a
//! deployment's internal structure is not searched for nested deployments).
//!
//! Ignore patterns are shell-glob patterns matched against the full
//! directory path, checked before any filesystem enumeration so ignored
//! subtrees are never read.

use crate::constants::{PICTURES_DIR_NAME, TELEMETRY_DIR_NAME};
use crate::{Error, Result};
use glob::Pattern;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Lazily search `root` for deployment folders.
///
/// The returned iterator yields each match as soon as it is found, in
/// lexicographic depth-first order. Enumeration failures (missing root,
/// permission errors) surface as `Err` items; there is no partial-failure
/// tolerance in the walk itself. Re-invoking with the same arguments on an
/// unmodified tree yields the same sequence.
pub fn find_data_roots(
    root: impl Into<PathBuf>,
    ignore_patterns: &[String],
) -> Result<DataRootIter> {
    let patterns = ignore_patterns
        .iter()
        .map(|raw| Pattern::new(raw).map_err(|e| Error::pattern(raw, e)))
        .collect::<Result<Vec<_>>>()?;

    Ok(DataRootIter {
        stack: vec![root.into()],
        patterns,
    })
}

/// Iterator over discovered deployment folders.
///
/// Holds no open directory handles between calls to `next`; each directory
/// is enumerated completely and released before any of its children is
/// visited.
#[derive(Debug)]
pub struct DataRootIter {
    stack: Vec<PathBuf>,
    patterns: Vec<Pattern>,
}

impl Iterator for DataRootIter {
    type Item = Result<PathBuf>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(dir) = self.stack.pop() {
            if self.patterns.iter().any(|p| p.matches_path(&dir)) {
                debug!("ignoring {}", dir.display());
                continue;
            }

            debug!("checking {}", dir.display());
            let mut subdirs = match list_subdirs(&dir) {
                Ok(subdirs) => subdirs,
                Err(e) => return Some(Err(e)),
            };

            if is_deployment(&subdirs) {
                return Some(Ok(dir));
            }

            // Reverse before pushing so the lexicographically smallest
            // child is popped first.
            subdirs.sort();
            for subdir in subdirs.into_iter().rev() {
                self.stack.push(subdir);
            }
        }
        None
    }
}

fn is_deployment(subdirs: &[PathBuf]) -> bool {
    let has_name =
        |name: &str| subdirs.iter().any(|p| p.file_name().is_some_and(|n| n == name));
    has_name(PICTURES_DIR_NAME) && has_name(TELEMETRY_DIR_NAME)
}

/// Enumerate the immediate subdirectories of `dir`. Files are ignored;
/// symlinked directories are followed.
fn list_subdirs(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|e| Error::discovery(dir, e))?;

    let mut subdirs = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| Error::discovery(dir, e))?;
        let path = entry.path();
        if path.is_dir() {
            subdirs.push(path);
        }
    }
    Ok(subdirs)
}
