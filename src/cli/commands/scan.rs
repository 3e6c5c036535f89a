//! The scan command: list deployment folders without archiving
//!
//! A read-only preview of what `compress` would pick up.

use crate::app::services::deployment_scanner::find_data_roots;
use crate::cli::args::{OutputFormat, ScanArgs};
use crate::cli::commands::shared::setup_logging;
use crate::{Error, Result};
use colored::Colorize;
use std::path::PathBuf;

/// Run the scan command
pub async fn run(args: &ScanArgs) -> Result<()> {
    setup_logging(args.get_log_level());
    args.validate()?;

    let roots: Vec<PathBuf> =
        find_data_roots(&args.root_dir, &args.ignore)?.collect::<Result<_>>()?;

    match args.format {
        OutputFormat::Human => {
            for root in &roots {
                println!("{}", root.display());
            }
            let summary = format!("{} deployment folder(s) found", roots.len());
            println!("{}", summary.green());
        }
        OutputFormat::Json => {
            let paths: Vec<String> = roots.iter().map(|p| p.display().to_string()).collect();
            let rendered = serde_json::to_string_pretty(&paths)
                .map_err(|e| Error::configuration(format!("cannot render listing: {}", e)))?;
            println!("{}", rendered);
        }
    }

    Ok(())
}
