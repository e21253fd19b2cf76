//! Drill script generation for CSV to Parquet conversion.
//!
//! Reads the header row of a CSV file, applies user-supplied rename and
//! type overrides, and renders the SQL script that embedded Apache Drill
//! executes to produce the Parquet output. Script rendering is a pure
//! function of its inputs; the engine side lives in `drillcast_engine`.

pub mod column;
pub mod error;
pub mod render;
pub mod source;

pub use column::{Column, Columns};
pub use error::{Result, ScriptError};
pub use render::{render_column_expr, render_drill_script};
pub use source::CsvSource;
