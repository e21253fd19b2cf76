//! Rendering the Drill script.
//!
//! Everything in this module is a pure function of its inputs: identical
//! (columns, paths, delimiter) always yield byte-identical script text.

use std::path::Path;

use crate::column::{Column, Columns};

/// Double single quotes for use inside a SQL string literal.
fn quote_literal(value: &str) -> String {
    value.replace('\'', "''")
}

/// Textual declared types keep empty cells as empty strings; everything
/// else turns them into NULL.
fn is_textual_type(declared: &str) -> bool {
    let upper = declared.trim().to_ascii_uppercase();
    upper.starts_with("VARCHAR") || upper.starts_with("CHAR")
}

/// Render the projection expression for one column at zero-based `index`.
///
/// Untyped columns are a plain positional reference aliased to the output
/// name. Typed columns wrap the CAST in a CASE that treats a cell equal to
/// the literal source header name as NULL: Drill's text reader cannot skip
/// the first row before typing, so without the guard the header row itself
/// would fail the cast. Non-textual types additionally treat an empty cell
/// as NULL.
///
/// Known consequence of the guard: a genuine data cell that happens to
/// equal the source header name is indistinguishable from the header row
/// and is silently converted to NULL instead of raising an error.
/// Downstream consumers rely on this, so it stays.
pub fn render_column_expr(index: usize, column: &Column) -> String {
    match &column.declared_type {
        None => format!("columns[{}] as `{}`", index, column.output_name),
        Some(declared) => {
            let empty_guard = if is_textual_type(declared) {
                String::new()
            } else {
                format!(" or columns[{index}]=''")
            };
            format!(
                "CASE when columns[{index}]='{source}'{empty_guard} then CAST(NULL AS {declared}) else CAST(columns[{index}] as {declared}) end as `{output}`",
                source = quote_literal(&column.source_name),
                output = column.output_name,
            )
        }
    }
}

/// Render the full conversion script: storage-format directive, CTAS into
/// the staged output location, the projection list in column order, a text
/// source clause with the field delimiter, and a first-row skip.
pub fn render_drill_script(
    columns: &Columns,
    output_path: &Path,
    input_path: &Path,
    delimiter: u8,
) -> String {
    let exprs: Vec<String> = columns
        .iter()
        .enumerate()
        .map(|(index, column)| render_column_expr(index, column))
        .collect();

    format!(
        "alter session set `store.format`='parquet';\n\
         CREATE TABLE dfs.tmp.`{output}` AS\n\
         SELECT\n\
         {exprs}\n\
         FROM TABLE(dfs.`{input}`(type=>'text', fieldDelimiter=>'{delimiter}'))\n\
         OFFSET 1\n",
        output = output_path.display(),
        exprs = exprs.join(",\n"),
        input = input_path.display(),
        delimiter = delimiter as char,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untyped_column_is_positional_reference() {
        let column = Column::new("Open", "Open", None);
        assert_eq!(render_column_expr(1, &column), "columns[1] as `Open`");
    }

    #[test]
    fn test_untyped_column_uses_output_alias() {
        let column = Column::new("Day High", "High", None);
        assert_eq!(render_column_expr(2, &column), "columns[2] as `High`");
    }

    #[test]
    fn test_non_textual_type_nulls_header_name_and_empty_cell() {
        let column = Column::new("Split Ratio", "Split Ratio", Some("FLOAT".to_string()));
        assert_eq!(
            render_column_expr(7, &column),
            "CASE when columns[7]='Split Ratio' or columns[7]='' then \
             CAST(NULL AS FLOAT) else CAST(columns[7] as FLOAT) end as `Split Ratio`"
        );
    }

    #[test]
    fn test_textual_type_keeps_empty_cells() {
        let column = Column::new("Name", "Name", Some("VARCHAR".to_string()));
        let expr = render_column_expr(0, &column);
        assert_eq!(
            expr,
            "CASE when columns[0]='Name' then CAST(NULL AS VARCHAR) \
             else CAST(columns[0] as VARCHAR) end as `Name`"
        );
        assert!(!expr.contains("columns[0]=''"));
    }

    #[test]
    fn test_char_type_counts_as_textual() {
        let column = Column::new("Code", "Code", Some("CHAR(2)".to_string()));
        let expr = render_column_expr(3, &column);
        assert!(!expr.contains("columns[3]=''"));
    }

    #[test]
    fn test_source_name_single_quotes_are_escaped() {
        let column = Column::new("O'Brien", "OBrien", Some("INT".to_string()));
        let expr = render_column_expr(0, &column);
        assert!(expr.contains("columns[0]='O''Brien'"), "got: {expr}");
    }

    #[test]
    fn test_script_rendering_is_deterministic() {
        let columns = Columns::from_items(vec![
            Column::new("a", "a", None),
            Column::new("b", "b", Some("INT".to_string())),
        ])
        .unwrap();
        let first = render_drill_script(
            &columns,
            Path::new("/out/dir"),
            Path::new("/in/data.csv"),
            b',',
        );
        let second = render_drill_script(
            &columns,
            Path::new("/out/dir"),
            Path::new("/in/data.csv"),
            b',',
        );
        assert_eq!(first, second);
    }

    #[test]
    fn test_script_uses_configured_delimiter() {
        let columns = Columns::from_items(vec![Column::new("a", "a", None)]).unwrap();
        let script = render_drill_script(
            &columns,
            Path::new("/out"),
            Path::new("/in.csv"),
            b'|',
        );
        assert!(script.contains("fieldDelimiter=>'|'"), "got: {script}");
    }
}
