//! # treecmp CLI - Find what a copy is missing
//!
//! Compares every file under a first directory with the file at the same
//! relative path under a second directory and reports files that are
//! missing or differ.
//!
//! ## Usage
//! ```bash
//! # Interactive: prompts for both directories and an optional log file
//! treecmp
//!
//! # Non-interactive
//! treecmp ~/photos /mnt/backup/photos --output photos.log
//! ```
//!
//! ## Exit status
//! - `0` once the summary is printed, whether or not differences were found
//! - `1` after `An unknown error occurred. Exiting...`, when the run could
//!   not finish (unreadable source tree, standard input closed at a prompt)
//! - `2` for invalid command-line arguments

use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::error;
use tracing_subscriber::EnvFilter;
use treecmp::prompt::{self, Prompter};
use treecmp::{ReportSink, Result, TreeComparisonBuilder};

/// treecmp CLI - Verify that one directory tree is faithfully copied in another
#[derive(Parser)]
#[command(name = "treecmp")]
#[command(version)]
#[command(about = "Report files under FIRST that are missing from, or differ in, SECOND")]
#[command(long_about = None)]
struct Cli {
    /// Directory whose files are checked for (prompted when omitted)
    #[arg(requires = "second", value_parser = existing_directory)]
    first: Option<PathBuf>,

    /// Directory searched for counterparts
    #[arg(value_parser = existing_directory)]
    second: Option<PathBuf>,

    /// Also write the report to this file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Do not draw the progress spinner
    #[arg(long)]
    no_progress: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn existing_directory(value: &str) -> std::result::Result<PathBuf, String> {
    let path = PathBuf::from(value);
    prompt::validate_directory(&path)
        .map(|()| path)
        .map_err(|e| e.to_string())
}

fn main() {
    let cli = Cli::parse();

    // Set up logging
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .with_writer(io::stderr)
            .init();
    }

    if let Err(e) = run(cli) {
        error!("{}", e);
        print!("An unknown error occurred. Exiting...");
        let _ = io::stdout().flush();
        std::process::exit(1);
    }
}

/// Main command runner
fn run(cli: Cli) -> Result<()> {
    let (first, second, log) = match (cli.first, cli.second) {
        (Some(first), Some(second)) => {
            let log = cli.output.as_deref().map(prompt::open_output).transpose()?;
            (first, second, log)
        }
        _ => {
            let stdin = io::stdin();
            let mut prompter = Prompter::new(stdin.lock(), io::stdout());
            let first = prompter.directory("first")?;
            let second = prompter.directory("second")?;
            let log = match cli.output {
                Some(path) => Some(prompt::open_output(&path)?),
                None => prompter.output_file()?.map(|(_path, file)| file),
            };
            (first, second, log)
        }
    };

    let comparison = TreeComparisonBuilder::new()
        .show_progress(!cli.no_progress)
        .build(first, second);
    let mut sink = ReportSink::stdout(log, comparison.shows_progress());
    comparison.run(&mut sink)?;
    Ok(())
}
