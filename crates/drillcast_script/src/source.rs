//! CSV input source: header row and derived column set.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::column::Columns;
use crate::error::{Result, ScriptError};

/// A CSV input file: canonical path, header names, and the column set
/// derived from them plus the user's override maps.
#[derive(Debug)]
pub struct CsvSource {
    path: PathBuf,
    headers: Vec<String>,
    columns: Columns,
}

impl CsvSource {
    /// Open `path`, read the header row, and build the column set.
    ///
    /// The path is canonicalized up front: a relative input like
    /// `../data.csv` confuses Drill's dfs workspace resolution once it is
    /// embedded in the generated script.
    pub fn open(
        path: &Path,
        delimiter: u8,
        name_map: &HashMap<String, String>,
        type_map: &HashMap<String, String>,
    ) -> Result<Self> {
        let path = path.canonicalize()?;

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(false)
            .from_path(&path)?;
        let first = match reader.records().next() {
            Some(record) => record?,
            None => return Err(ScriptError::EmptyInput(path.display().to_string())),
        };
        let headers: Vec<String> = first.iter().map(str::to_string).collect();
        debug!(path = %path.display(), columns = headers.len(), "read CSV header row");

        let columns = Columns::new(&headers, name_map, type_map)?;
        Ok(Self {
            path,
            headers,
            columns,
        })
    }

    /// Canonical path to the input file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Header names in file order.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn columns(&self) -> &Columns {
        &self.columns
    }
}
