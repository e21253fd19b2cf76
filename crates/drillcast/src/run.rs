//! One conversion run: validate, generate, isolate, invoke, publish.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

use drillcast_engine::{DrillInstall, EngineError, IsolatedInstall, OverrideConfig};
use drillcast_script::{render_drill_script, CsvSource, ScriptError};

use crate::pairs::pairs_to_map;
use crate::Cli;

/// Staged output directory name inside the scratch area.
const STAGED_OUTPUT: &str = "parquet-out";
/// Generated script name inside the scratch area.
const SCRIPT_NAME: &str = "convert.sql";

#[derive(Error, Debug)]
pub enum RunError {
    #[error(
        "Output destination already exists: {0}\n  \
         Remove it first or choose another path; drillcast never overwrites existing output."
    )]
    DestinationExists(PathBuf),

    #[error("--rename: {0}")]
    BadRenameList(String),

    #[error("--cast: {0}")]
    BadCastList(String),

    #[error("--delimiter must be a single ASCII character")]
    BadDelimiter,

    #[error(transparent)]
    Script(#[from] ScriptError),

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Map a run error to the process exit code. Destination conflicts exit
/// with 1, engine failures with 2, everything else with the generic 1.
pub fn exit_code(err: &RunError) -> u8 {
    match err {
        RunError::DestinationExists(_) => 1,
        RunError::Engine(EngineError::EngineFailed { .. }) => 2,
        _ => 1,
    }
}

/// Execute a full conversion run.
pub fn execute(cli: &Cli) -> Result<(), RunError> {
    // Checked eagerly so nothing is spawned for a doomed run.
    if cli.output.exists() {
        return Err(RunError::DestinationExists(cli.output.clone()));
    }
    if !cli.delimiter.is_ascii() {
        return Err(RunError::BadDelimiter);
    }
    let delimiter = cli.delimiter as u8;

    let name_map =
        pairs_to_map(&cli.renames).map_err(|err| RunError::BadRenameList(err.to_string()))?;
    let type_map =
        pairs_to_map(&cli.casts).map_err(|err| RunError::BadCastList(err.to_string()))?;

    let source = CsvSource::open(&cli.input, delimiter, &name_map, &type_map)?;
    info!(
        input = %source.path().display(),
        columns = source.columns().len(),
        "read CSV header"
    );

    let scratch = tempfile::Builder::new().prefix("drillcast-").tempdir()?;
    let outcome = convert(cli, &source, delimiter, scratch.path());

    // Keep the scratch area when asked to, and always on failure so the
    // script and captured engine output stay available for diagnosis.
    if cli.save_temp || outcome.is_err() {
        let kept = scratch.into_path();
        info!(scratch = %kept.display(), "scratch directory preserved");
    }
    outcome
}

fn convert(cli: &Cli, source: &CsvSource, delimiter: u8, scratch: &Path) -> Result<(), RunError> {
    let staged = scratch.join(STAGED_OUTPUT);
    let script = render_drill_script(source.columns(), &staged, source.path(), delimiter);
    debug!(script = %script, "generated Drill script");

    let script_path = scratch.join(SCRIPT_NAME);
    fs::write(&script_path, &script)?;

    let install = DrillInstall::locate()?;
    let overrides = OverrideConfig {
        store_path: scratch.join("drill-store"),
    };
    let isolated = IsolatedInstall::create(&install, scratch, &overrides)?;

    drillcast_engine::run_script(&isolated, &script_path, scratch)?;
    drillcast_engine::publish(&staged, &cli.output)?;
    info!(output = %cli.output.display(), "conversion complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_exit_code_destination_exists() {
        let err = RunError::DestinationExists(PathBuf::from("/out"));
        assert_eq!(exit_code(&err), 1);
    }

    #[test]
    fn test_exit_code_engine_failure() {
        let err = RunError::Engine(EngineError::EngineFailed {
            code: Some(1),
            stdout_log: PathBuf::from("/scratch/drill-stdout.log"),
            stderr_log: PathBuf::from("/scratch/drill-stderr.log"),
        });
        assert_eq!(exit_code(&err), 2);
    }

    #[test]
    fn test_exit_code_other_errors_are_generic() {
        let err = RunError::Script(ScriptError::InvalidColumnNames(vec!["a.b".to_string()]));
        assert_eq!(exit_code(&err), 1);
        let err = RunError::BadDelimiter;
        assert_eq!(exit_code(&err), 1);
    }

    #[test]
    fn test_destination_exists_message_offers_guidance() {
        let err = RunError::DestinationExists(PathBuf::from("/data/out"));
        let message = err.to_string();
        assert!(message.contains("/data/out"));
        assert!(message.contains("never overwrites"));
    }
}
