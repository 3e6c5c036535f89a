use clap::Parser;
use loki_processor::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    // Create async runtime and run the selected command
    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    match runtime.block_on(commands::run(args)) {
        Ok(()) => process::exit(0),
        Err(error) => {
            // Print the error and its cause chain to stderr
            eprintln!("Error: {}", error);
            let mut source = std::error::Error::source(&error);
            while let Some(cause) = source {
                eprintln!("  caused by: {}", cause);
                source = cause.source();
            }
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("LOKI Processor - Plankton Imaging Data Archiver");
    println!("===============================================");
    println!();
    println!("Discover LOKI deployment folders inside a directory tree and compress");
    println!("each one into a zip archive named after its station and haul.");
    println!();
    println!("USAGE:");
    println!("    loki-processor <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    compress    Find deployment folders and archive each one (main command)");
    println!("    scan        Find deployment folders and list them");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("EXAMPLES:");
    println!("    # Archive every deployment below /data/cruises, four at a time:");
    println!("    loki-processor compress /data/cruises -j 4 --skip-existing");
    println!();
    println!("    # Preview what would be archived, skipping backup folders:");
    println!("    loki-processor scan /data/cruises --ignore \"*backup*\"");
    println!();
    println!("For detailed help on any command, use:");
    println!("    loki-processor <COMMAND> --help");
}
