//! Error types for the script layer.

use thiserror::Error;

/// Script layer result type.
pub type Result<T> = std::result::Result<T, ScriptError>;

/// Errors raised while reading the CSV header or building the column set.
#[derive(Error, Debug)]
pub enum ScriptError {
    /// One or more output column names cannot appear in Parquet output.
    /// Carries every offending name, not just the first.
    #[error("Invalid output column name(s): {}", .0.join(", "))]
    InvalidColumnNames(Vec<String>),

    /// IO error (opening or reading the input CSV)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parse error on the header row
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The input file contains no rows at all
    #[error("Input CSV has no header row: {0}")]
    EmptyInput(String),
}
