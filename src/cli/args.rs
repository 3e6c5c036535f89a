//! Command-line argument definitions for the LOKI processor
//!
//! This module defines the complete CLI interface using the clap derive
//! API.

use crate::constants::{DEFAULT_PARALLEL_WORKERS, MAX_PARALLEL_WORKERS};
use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the LOKI data processor
///
/// Discovers LOKI deployment folders inside a directory tree and compresses
/// each one into a zip archive named after its station and haul.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "loki-processor",
    version,
    about = "Discover and archive LOKI plankton imaging deployments",
    long_about = "LOKI (Lightframe Onsight Keyspecies Investigation) deployments consist of \
                  very many small files which are slow to read on most filesystems. This tool \
                  finds deployment folders inside an arbitrary directory tree and compresses \
                  whole folders into zip archives that are quicker to transfer and to read."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the LOKI processor
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Find LOKI deployment folders and compress each into a zip archive
    Compress(CompressArgs),
    /// Find LOKI deployment folders and list them
    Scan(ScanArgs),
}

/// Arguments for the compress command (main archiving workflow)
#[derive(Debug, Clone, Parser)]
pub struct CompressArgs {
    /// Directory tree to search for deployment folders
    ///
    /// Every directory that directly contains both a Pictures and a
    /// Telemetrie subdirectory is treated as one deployment. Archives are
    /// written next to the search root as <STATION>_<HAUL>.zip.
    #[arg(value_name = "ROOT_DIR")]
    pub root_dir: PathBuf,

    /// Number of archive processes to run in parallel
    ///
    /// Pass 0 to use one worker per CPU core.
    #[arg(
        short = 'j',
        long = "workers",
        value_name = "COUNT",
        default_value_t = DEFAULT_PARALLEL_WORKERS,
        help = "Number of archive processes to run in parallel (0 = one per CPU core)"
    )]
    pub workers: usize,

    /// Skip deployment folders whose target archive already exists
    #[arg(long = "skip-existing", help = "Skip folders whose archive already exists")]
    pub skip_existing: bool,

    /// Glob pattern for directory paths to skip during discovery
    ///
    /// Matched against the full directory path before it is read, so
    /// ignored subtrees are never touched. May be given multiple times.
    #[arg(
        long = "ignore",
        value_name = "PATTERN",
        help = "Glob pattern for directories to skip (repeatable)"
    )]
    pub ignore: Vec<String>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the scan command (discovery preview)
#[derive(Debug, Clone, Parser)]
pub struct ScanArgs {
    /// Directory tree to search for deployment folders
    #[arg(value_name = "ROOT_DIR")]
    pub root_dir: PathBuf,

    /// Glob pattern for directory paths to skip during discovery
    #[arg(
        long = "ignore",
        value_name = "PATTERN",
        help = "Glob pattern for directories to skip (repeatable)"
    )]
    pub ignore: Vec<String>,

    /// Output format for the folder listing
    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format for the folder listing"
    )]
    pub format: OutputFormat,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}

/// Output format options for machine-readable results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .expect("Command should be present when get_command() is called")
    }
}

impl CompressArgs {
    /// Validate the compress command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if !self.root_dir.exists() {
            return Err(Error::configuration(format!(
                "Root directory does not exist: {}",
                self.root_dir.display()
            )));
        }

        if !self.root_dir.is_dir() {
            return Err(Error::configuration(format!(
                "Root path is not a directory: {}",
                self.root_dir.display()
            )));
        }

        if self.workers > MAX_PARALLEL_WORKERS {
            return Err(Error::configuration(format!(
                "Number of workers cannot exceed {}",
                MAX_PARALLEL_WORKERS
            )));
        }

        Ok(())
    }

    /// Number of workers to actually run with (0 means one per CPU core)
    pub fn effective_workers(&self) -> usize {
        if self.workers == 0 {
            num_cpus::get()
        } else {
            self.workers
        }
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            verbosity_level(self.verbose)
        }
    }

    /// Check if we should show progress bars (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}

impl ScanArgs {
    /// Validate the scan command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if !self.root_dir.is_dir() {
            return Err(Error::configuration(format!(
                "Root path is not a directory: {}",
                self.root_dir.display()
            )));
        }
        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        verbosity_level(self.verbose)
    }
}

fn verbosity_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn compress_args(root_dir: PathBuf) -> CompressArgs {
        CompressArgs {
            root_dir,
            workers: 1,
            skip_existing: false,
            ignore: Vec::new(),
            verbose: 0,
            quiet: false,
        }
    }

    #[test]
    fn test_compress_args_validation() {
        let temp_dir = TempDir::new().unwrap();

        let args = compress_args(temp_dir.path().to_path_buf());
        assert!(args.validate().is_ok());

        let mut invalid = args.clone();
        invalid.root_dir = PathBuf::from("/nonexistent/path");
        assert!(invalid.validate().is_err());

        let mut invalid = args.clone();
        invalid.workers = MAX_PARALLEL_WORKERS + 1;
        assert!(invalid.validate().is_err());
    }

    #[test]
    fn test_effective_workers() {
        let temp_dir = TempDir::new().unwrap();
        let mut args = compress_args(temp_dir.path().to_path_buf());

        args.workers = 4;
        assert_eq!(args.effective_workers(), 4);

        args.workers = 0;
        assert!(args.effective_workers() >= 1);
    }

    #[test]
    fn test_log_level() {
        let temp_dir = TempDir::new().unwrap();
        let mut args = compress_args(temp_dir.path().to_path_buf());

        assert_eq!(args.get_log_level(), "warn");

        args.verbose = 1;
        assert_eq!(args.get_log_level(), "info");

        args.verbose = 3;
        assert_eq!(args.get_log_level(), "trace");

        args.verbose = 0;
        args.quiet = true;
        assert_eq!(args.get_log_level(), "error");
        assert!(!args.show_progress());
    }
}
