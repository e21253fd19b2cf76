//! Running the engine and publishing its output.

use std::fs::File;
use std::path::Path;
use std::process::{Command, Stdio};

use tracing::{debug, info};

use crate::error::{EngineError, Result};
use crate::install::IsolatedInstall;

/// Captured engine stdout, inside the scratch directory.
pub const STDOUT_LOG: &str = "drill-stdout.log";
/// Captured engine stderr, inside the scratch directory.
pub const STDERR_LOG: &str = "drill-stderr.log";

/// Run the generated script through the isolated install.
///
/// Blocks until the engine exits; there is no timeout. stdout and stderr
/// are captured into the scratch directory for post-mortem inspection.
pub fn run_script(install: &IsolatedInstall, script_path: &Path, scratch: &Path) -> Result<()> {
    let stdout_log = scratch.join(STDOUT_LOG);
    let stderr_log = scratch.join(STDERR_LOG);
    let stdout = File::create(&stdout_log)?;
    let stderr = File::create(&stderr_log)?;

    let launcher = install.launcher();
    info!(
        launcher = %launcher.display(),
        script = %script_path.display(),
        "invoking drill-embedded"
    );
    let status = Command::new(&launcher)
        .arg(format!("--run={}", script_path.display()))
        // The launcher script resolves its own realpath, which escapes the
        // symlinked clone and would read the shared conf. Pin it to the
        // clone explicitly.
        .env("DRILL_HOME", install.root())
        .stdout(Stdio::from(stdout))
        .stderr(Stdio::from(stderr))
        .status()?;

    if !status.success() {
        return Err(EngineError::EngineFailed {
            code: status.code(),
            stdout_log,
            stderr_log,
        });
    }
    debug!("drill-embedded finished");
    Ok(())
}

/// Move the engine's staged output directory to its final destination.
///
/// A single rename keeps the all-or-nothing guarantee: the destination
/// either appears fully populated or never appears.
pub fn publish(staged_output: &Path, destination: &Path) -> Result<()> {
    std::fs::rename(staged_output, destination)?;
    info!(destination = %destination.display(), "published Parquet output");
    Ok(())
}
