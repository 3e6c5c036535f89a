//! CLI command implementations

pub mod compress;
pub mod scan;
pub mod shared;

use crate::Result;
use crate::cli::args::{Args, Commands};

/// Dispatch the selected subcommand
pub async fn run(args: Args) -> Result<()> {
    match args.get_command() {
        Commands::Compress(args) => compress::run(&args).await,
        Commands::Scan(args) => scan::run(&args).await,
    }
}
