//! Isolated Apache Drill invocation.
//!
//! Drill has no command-line flag to point `drill-embedded` at an alternate
//! configuration file, so running with a private `drill-override.conf`
//! means cloning the installation: symlink every top-level entry of the
//! real install except `conf/`, give the clone its own `conf/`, and run the
//! clone's launcher. This crate builds that clone inside the per-run
//! scratch directory, runs the generated script through it, and publishes
//! the staged output with a single atomic rename.

pub mod error;
pub mod install;
pub mod invoke;

pub use error::{EngineError, Result};
pub use install::{DrillInstall, IsolatedInstall, OverrideConfig};
pub use invoke::{publish, run_script, STDERR_LOG, STDOUT_LOG};
