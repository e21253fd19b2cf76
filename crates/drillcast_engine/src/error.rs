//! Error types for the engine layer.

use std::path::PathBuf;

use thiserror::Error;

/// Engine layer result type.
pub type Result<T> = std::result::Result<T, EngineError>;

/// Errors raised while locating, isolating, or running Drill.
#[derive(Error, Debug)]
pub enum EngineError {
    /// No usable Drill installation was found
    #[error("Could not locate a Drill installation: {0}")]
    DrillNotFound(String),

    /// IO error while building the isolated install or scratch files
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// drill-embedded exited with a non-zero status
    #[error(
        "Drill run failed with {}; inspect {} and {}",
        exit_desc(.code),
        .stdout_log.display(),
        .stderr_log.display()
    )]
    EngineFailed {
        code: Option<i32>,
        stdout_log: PathBuf,
        stderr_log: PathBuf,
    },
}

fn exit_desc(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {code}"),
        None => "no exit code (killed by signal)".to_string(),
    }
}
