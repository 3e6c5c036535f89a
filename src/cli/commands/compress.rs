//! The compress command: discover deployment folders and archive each one
//!
//! LOKI data consists of very many small files which are slow to read on
//! most filesystems. Compressing whole deployment folders into zip files
//! makes them quicker to transfer and to read. Archiving is delegated to
//! the external `zip` tool, with a bounded number of processes in flight.

use crate::app::services::deployment_scanner::find_data_roots;
use crate::app::services::telemetry::read_log;
use crate::cli::args::CompressArgs;
use crate::cli::commands::shared::{create_progress_bar, sample_id_from_log, setup_logging};
use crate::constants::{ARCHIVE_EXTENSION, LOG_DIR_NAME, LOG_FILE_PATTERN, ZIP_COMMAND};
use crate::{Error, Result};
use colored::Colorize;
use futures::StreamExt;
use futures::stream;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, info};

/// One scheduled archiving task
#[derive(Debug)]
struct ArchiveJob {
    data_root: PathBuf,
    archive_path: PathBuf,
    sample_id: String,
}

/// Run the compress command
pub async fn run(args: &CompressArgs) -> Result<()> {
    setup_logging(args.get_log_level());
    args.validate()?;

    // Archive paths are handed to a child process with a different working
    // directory, so anchor them before scheduling anything.
    let root_dir = std::path::absolute(&args.root_dir)
        .map_err(|e| Error::io("failed to resolve root directory", e))?;

    if !args.quiet {
        println!("Discovering deployment folders...");
    }
    let jobs = plan_jobs(&root_dir, args)?;

    if jobs.is_empty() {
        if !args.quiet {
            println!("Nothing to compress.");
        }
        return Ok(());
    }

    let workers = args.effective_workers();
    info!(
        "Compressing {} deployment folders with {} workers",
        jobs.len(),
        workers
    );

    let progress = args
        .show_progress()
        .then(|| create_progress_bar(jobs.len() as u64, "Compressing..."));

    let mut pending = stream::iter(jobs)
        .map(|job| async move {
            let outcome = compress_folder(&job).await;
            (job, outcome)
        })
        .buffer_unordered(workers);

    while let Some((job, outcome)) = pending.next().await {
        match outcome {
            Ok(()) => {
                info!("{} finished", job.sample_id);
                if let Some(pb) = &progress {
                    pb.inc(1);
                }
            }
            Err(e) => {
                if let Some(pb) = &progress {
                    pb.abandon_with_message("failed");
                }
                return Err(e);
            }
        }
    }

    if let Some(pb) = &progress {
        pb.finish_with_message("done");
    }
    if !args.quiet {
        println!("{}", "All done.".green());
    }
    Ok(())
}

/// Discover deployment folders and derive one archive job per folder.
///
/// Fails before anything is scheduled when two folders resolve to the same
/// archive name; archiving them concurrently would corrupt the target.
fn plan_jobs(root_dir: &Path, args: &CompressArgs) -> Result<Vec<ArchiveJob>> {
    let mut jobs = Vec::new();
    let mut targets = HashSet::new();

    for data_root in find_data_roots(root_dir, &args.ignore)? {
        let data_root = data_root?;

        let log_path = locate_log_file(&data_root)?;
        let log = read_log(&log_path, None)?;
        let sample_id = sample_id_from_log(&log, &log_path)?;

        let archive_path = root_dir.join(format!("{sample_id}.{ARCHIVE_EXTENSION}"));
        if !args.quiet {
            println!("{} -> {}", data_root.display(), archive_path.display());
        }

        if !targets.insert(archive_path.clone()) {
            return Err(Error::archive(format!(
                "duplicate target archive name {}",
                archive_path.display()
            )));
        }

        if args.skip_existing && archive_path.is_file() {
            if !args.quiet {
                println!("{} already exists.", archive_path.display());
            }
            continue;
        }

        jobs.push(ArchiveJob {
            data_root,
            archive_path,
            sample_id,
        });
    }

    Ok(jobs)
}

/// Find the single `Log/LOKI*.log` file of a deployment folder.
fn locate_log_file(data_root: &Path) -> Result<PathBuf> {
    let log_dir = data_root.join(LOG_DIR_NAME);
    let pattern_path = log_dir.join(LOG_FILE_PATTERN);
    let pattern = pattern_path.to_str().ok_or_else(|| {
        Error::configuration(format!("non-UTF-8 path: {}", pattern_path.display()))
    })?;

    let mut matches: Vec<PathBuf> = glob::glob(pattern)
        .map_err(|e| Error::pattern(pattern, e))?
        .filter_map(|entry| entry.ok())
        .collect();

    match matches.len() {
        1 => Ok(matches.remove(0)),
        0 => Err(Error::configuration(format!(
            "no {} file in {}",
            LOG_FILE_PATTERN,
            log_dir.display()
        ))),
        n => Err(Error::configuration(format!(
            "expected one {} file in {}, found {}",
            LOG_FILE_PATTERN,
            log_dir.display(),
            n
        ))),
    }
}

/// Archive one deployment folder with the external `zip` tool.
async fn compress_folder(job: &ArchiveJob) -> Result<()> {
    debug!(
        "compressing {} into {}",
        job.data_root.display(),
        job.archive_path.display()
    );

    let status = Command::new(ZIP_COMMAND)
        .arg("-r")
        .arg(&job.archive_path)
        .arg(".")
        .current_dir(&job.data_root)
        .stdout(Stdio::null())
        .kill_on_drop(true)
        .status()
        .await
        .map_err(|e| Error::archive(format!("failed to launch {}: {}", ZIP_COMMAND, e)))?;

    if !status.success() {
        return Err(Error::archive(format!(
            "{} exited with {} while archiving {}",
            ZIP_COMMAND,
            status,
            job.data_root.display()
        )));
    }
    Ok(())
}
