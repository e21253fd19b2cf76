//! drillcast: convert a CSV file to Parquet via embedded Apache Drill.
//!
//! Generates a CTAS script from the CSV header plus user-supplied rename
//! and cast overrides, runs it through an isolated per-run Drill install,
//! and publishes the result atomically at the requested destination.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::error;

mod logging;
mod pairs;
mod run;

#[derive(Parser, Debug)]
#[command(
    name = "drillcast",
    about = "Convert a CSV file to Parquet using embedded Apache Drill",
    version
)]
pub struct Cli {
    /// Input CSV file
    pub input: PathBuf,

    /// Output directory for the Parquet files (must not already exist)
    pub output: PathBuf,

    /// Rename columns: flat list of CSV-NAME OUTPUT-NAME pairs
    #[arg(long = "rename", num_args = 2.., value_names = ["CSV_NAME", "OUTPUT_NAME"])]
    pub renames: Vec<String>,

    /// Cast columns: flat list of CSV-NAME SQL-TYPE pairs (e.g. price DOUBLE)
    #[arg(long = "cast", num_args = 2.., value_names = ["CSV_NAME", "TYPE"])]
    pub casts: Vec<String>,

    /// CSV field delimiter (single ASCII character)
    #[arg(long, default_value_t = ',')]
    pub delimiter: char,

    /// Keep the scratch directory (generated script, Drill logs, staged output)
    #[arg(long)]
    pub save_temp: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run::execute(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("conversion failed: {err}");
            eprintln!("ERROR: {err}");
            ExitCode::from(run::exit_code(&err))
        }
    }
}
