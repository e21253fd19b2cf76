//! Column model: CSV header names mapped to output names and declared types.

use std::collections::HashMap;

use crate::error::{Result, ScriptError};

/// A single CSV column and how it appears in the Parquet output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// Name taken from the CSV header row.
    pub source_name: String,
    /// Name in the Parquet output. Defaults to the source name.
    pub output_name: String,
    /// Target SQL type for a CAST, if the user supplied one.
    pub declared_type: Option<String>,
}

impl Column {
    pub fn new(
        source_name: impl Into<String>,
        output_name: impl Into<String>,
        declared_type: Option<String>,
    ) -> Self {
        Self {
            source_name: source_name.into(),
            output_name: output_name.into(),
            declared_type,
        }
    }

    /// Drill rejects `.` inside Parquet column names (it reads it as a
    /// nested-field separator).
    fn output_name_is_valid(&self) -> bool {
        !self.output_name.contains('.')
    }
}

/// Ordered column set, in CSV header order.
///
/// Order is significant: it fixes both the positional references in the
/// generated SELECT list and the column order of the Parquet output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Columns {
    items: Vec<Column>,
}

impl Columns {
    /// Build the column set from the header names plus user override maps.
    ///
    /// Map entries whose key does not match a header name are silently
    /// ignored. Output-name validation is batched: every invalid name is
    /// collected and reported in one error.
    pub fn new(
        headers: &[String],
        name_map: &HashMap<String, String>,
        type_map: &HashMap<String, String>,
    ) -> Result<Self> {
        let items: Vec<Column> = headers
            .iter()
            .map(|header| {
                let output = name_map
                    .get(header)
                    .cloned()
                    .unwrap_or_else(|| header.clone());
                Column::new(header.clone(), output, type_map.get(header).cloned())
            })
            .collect();

        Self::from_items(items)
    }

    /// Build from pre-assembled columns, validating output names.
    pub fn from_items(items: Vec<Column>) -> Result<Self> {
        let invalid: Vec<String> = items
            .iter()
            .filter(|column| !column.output_name_is_valid())
            .map(|column| column.output_name.clone())
            .collect();
        if !invalid.is_empty() {
            return Err(ScriptError::InvalidColumnNames(invalid));
        }
        Ok(Self { items })
    }

    pub fn items(&self) -> &[Column] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Column> {
        self.items.iter()
    }
}

impl<'a> IntoIterator for &'a Columns {
    type Item = &'a Column;
    type IntoIter = std::slice::Iter<'a, Column>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
