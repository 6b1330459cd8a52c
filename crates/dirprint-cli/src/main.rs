//! dirprint: Fingerprint a directory tree

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use dirprint_cli::OutputFormat;
use dirprint_cli::commands;
use dirprint_cli::logging::setup_logging;

#[derive(Parser)]
#[command(name = "dirprint")]
#[command(author, version, about = "Deterministic directory fingerprints", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the fingerprint of a directory
    Hash {
        /// Directory to fingerprint
        path: PathBuf,

        /// Also list the hashed files
        #[arg(long)]
        files: bool,

        /// Print a JSON object with the fingerprint and file list
        #[arg(long, conflicts_with = "files")]
        json: bool,

        /// Maximum number of files before giving up
        #[arg(long, default_value_t = dirprint_core::DEFAULT_MAX_FILES)]
        max_files: usize,

        /// Number of files read concurrently
        #[arg(long, default_value_t = dirprint_core::config::DEFAULT_MAX_CONCURRENCY)]
        concurrency: usize,
    },

    /// Compare a directory against a recorded fingerprint
    Check {
        /// Directory to fingerprint
        path: PathBuf,

        /// Previously recorded fingerprint
        expected: String,

        /// Maximum number of files before giving up
        #[arg(long, default_value_t = dirprint_core::DEFAULT_MAX_FILES)]
        max_files: usize,

        /// Number of files read concurrently
        #[arg(long, default_value_t = dirprint_core::config::DEFAULT_MAX_CONCURRENCY)]
        concurrency: usize,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match cli.command {
        Commands::Hash {
            path,
            files,
            json,
            max_files,
            concurrency,
        } => {
            let format = OutputFormat::from_flags(files, json);
            commands::hash::run(&path, format, max_files, concurrency).await?;
        }
        Commands::Check {
            path,
            expected,
            max_files,
            concurrency,
        } => {
            let config = commands::config_from(max_files, concurrency);
            if !commands::check::run(&path, &expected, &config).await? {
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
