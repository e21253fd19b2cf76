//! Locating Drill and building the per-run isolated installation.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{EngineError, Result};

/// Launcher script name inside a Drill install's `bin/` directory.
pub const DRILL_LAUNCHER: &str = "drill-embedded";

/// Fixed override-file template. `OverrideConfig::render` substitutes the
/// placeholder; nothing else in the file varies between runs.
const OVERRIDE_TEMPLATE: &str = r#"drill.exec: {
  sys.store.provider.local.path = "__STORE_PATH__"
}
"#;

/// Values substituted into the `drill-override.conf` template.
#[derive(Debug, Clone)]
pub struct OverrideConfig {
    /// Directory for Drill's local persistent store. Pointing this into
    /// the scratch area keeps the run from touching shared Drill state
    /// (by default every embedded run writes under /tmp/drill).
    pub store_path: PathBuf,
}

impl OverrideConfig {
    /// Render the override file contents.
    pub fn render(&self) -> String {
        OVERRIDE_TEMPLATE.replace("__STORE_PATH__", &self.store_path.display().to_string())
    }
}

/// A Drill installation present on this machine.
#[derive(Debug, Clone)]
pub struct DrillInstall {
    home: PathBuf,
}

impl DrillInstall {
    /// Locate the install: `DRILL_HOME` wins; otherwise probe `PATH` for
    /// the `drill-embedded` launcher and take its install root.
    pub fn locate() -> Result<Self> {
        if let Ok(home) = std::env::var("DRILL_HOME") {
            let home = PathBuf::from(home);
            if home.join("bin").join(DRILL_LAUNCHER).is_file() {
                return Ok(Self { home });
            }
            return Err(EngineError::DrillNotFound(format!(
                "DRILL_HOME is set to {} but {}/bin/{} does not exist",
                home.display(),
                home.display(),
                DRILL_LAUNCHER,
            )));
        }

        let path_var = std::env::var_os("PATH").unwrap_or_default();
        for dir in std::env::split_paths(&path_var) {
            let candidate = dir.join(DRILL_LAUNCHER);
            if !candidate.is_file() {
                continue;
            }
            // Package managers usually symlink the launcher from a shared
            // bin dir; resolve to the real install before taking parents.
            let launcher = candidate.canonicalize()?;
            if let Some(home) = launcher.parent().and_then(Path::parent) {
                debug!(home = %home.display(), "found Drill install via PATH");
                return Ok(Self {
                    home: home.to_path_buf(),
                });
            }
        }

        Err(EngineError::DrillNotFound(
            "drill-embedded is not on PATH and DRILL_HOME is unset".to_string(),
        ))
    }

    /// Use a known install root directly. Callers are responsible for its
    /// validity; `IsolatedInstall::create` fails on a bogus root.
    pub fn from_home(home: PathBuf) -> Self {
        Self { home }
    }

    pub fn home(&self) -> &Path {
        &self.home
    }
}

/// A per-run clone of a Drill install with its own `conf/` directory.
///
/// Every top-level entry of the real install is symlinked except `conf/`,
/// which is copied so the clone can carry a private `drill-override.conf`.
#[derive(Debug)]
pub struct IsolatedInstall {
    root: PathBuf,
}

impl IsolatedInstall {
    /// Build the clone under `{scratch}/drill-home`.
    pub fn create(
        install: &DrillInstall,
        scratch: &Path,
        overrides: &OverrideConfig,
    ) -> Result<Self> {
        let root = scratch.join("drill-home");
        fs::create_dir(&root)?;

        for entry in fs::read_dir(install.home())? {
            let entry = entry?;
            if entry.file_name() == "conf" {
                continue;
            }
            link_entry(&entry.path(), &root.join(entry.file_name()))?;
        }

        let conf_dir = root.join("conf");
        fs::create_dir(&conf_dir)?;
        let source_conf = install.home().join("conf");
        if source_conf.is_dir() {
            for entry in fs::read_dir(&source_conf)? {
                let entry = entry?;
                if entry.file_type()?.is_file() {
                    fs::copy(entry.path(), conf_dir.join(entry.file_name()))?;
                }
            }
        }

        let override_path = conf_dir.join("drill-override.conf");
        fs::write(&override_path, overrides.render())?;
        info!(root = %root.display(), "built isolated Drill install");

        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path to the clone's launcher script.
    pub fn launcher(&self) -> PathBuf {
        self.root.join("bin").join(DRILL_LAUNCHER)
    }
}

#[cfg(unix)]
fn link_entry(target: &Path, link: &Path) -> Result<()> {
    std::os::unix::fs::symlink(target, link)?;
    Ok(())
}

#[cfg(windows)]
fn link_entry(target: &Path, link: &Path) -> Result<()> {
    if target.is_dir() {
        std::os::windows::fs::symlink_dir(target, link)?;
    } else {
        std::os::windows::fs::symlink_file(target, link)?;
    }
    Ok(())
}
