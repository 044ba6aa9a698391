//! SPDX-FileCopyrightText: 2025 `FileSwap` contributors
//!
//! SPDX-License-Identifier: MIT
//!
//! Tabular flattening - tree-shaped documents ↔ flat CSV rows
//!
//! Flattening is lossy: nested mappings are emitted as rows of their own
//! (fan-out), and parsing CSV back never rebuilds nesting.

use std::borrow::Cow;

use indexmap::IndexMap;
use serde_json::Value;

use super::ParsedDocument;
use crate::error::{Error, Result};

/// One CSV record: column name → scalar value, in column order.
pub type FlatRow = IndexMap<String, Value>;

/// Column used for text lines.
pub const CONTENT_COLUMN: &str = "content";
/// Column used for wrapped scalars and non-mapping array elements.
pub const VALUE_COLUMN: &str = "value";

// ============================================================================
// Document → rows
// ============================================================================

/// Turn a parsed document into rows ready for [`stringify_csv`].
///
/// # Errors
/// Returns [`Error::CsvOutputShapeInvalid`] if an array of mappings also
/// holds a non-mapping element.
pub fn to_rows(document: &ParsedDocument) -> Result<Vec<FlatRow>> {
    let value = match document {
        ParsedDocument::Text(text) | ParsedDocument::Data(Value::String(text)) => {
            return Ok(content_rows(text));
        }
        ParsedDocument::Data(value) => value,
    };

    match value {
        Value::Array(items) if items.first().is_some_and(Value::is_object) => items
            .iter()
            .map(|item| match item {
                Value::Object(map) => Ok(map.iter().map(|(k, v)| (k.clone(), v.clone())).collect()),
                _ => Err(Error::CsvOutputShapeInvalid),
            })
            .collect(),
        Value::Object(map) => Ok(flatten(map, "")),
        Value::Array(items) => Ok(items.iter().map(|item| single(VALUE_COLUMN, item.clone())).collect()),
        scalar => Ok(vec![single(VALUE_COLUMN, scalar.clone())]),
    }
}

/// One `{content: line}` row per non-blank, trimmed line.
#[must_use]
pub fn content_rows(text: &str) -> Vec<FlatRow> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| single(CONTENT_COLUMN, Value::String(line.to_string())))
        .collect()
}

/// Flatten a mapping into rows.
///
/// Scalars land in the mapping's own row under `prefix_key`. Every nested
/// mapping (and every mapping or array inside an array) is flattened into
/// rows of its own, which follow the owning row in encounter order:
/// `{"a":1,"b":{"c":2}}` gives `[{a:1}, {b_c:2}]`.
#[must_use]
pub fn flatten(object: &serde_json::Map<String, Value>, prefix: &str) -> Vec<FlatRow> {
    let mut rows = Vec::new();
    flatten_entries(
        object.iter().map(|(key, value)| (Cow::Borrowed(key.as_str()), value)),
        prefix,
        &mut rows,
    );
    rows
}

fn flatten_node(node: &Value, prefix: &str, rows: &mut Vec<FlatRow>) {
    match node {
        Value::Object(map) => flatten_entries(
            map.iter().map(|(key, value)| (Cow::Borrowed(key.as_str()), value)),
            prefix,
            rows,
        ),
        Value::Array(items) => flatten_entries(
            items
                .iter()
                .enumerate()
                .map(|(index, value)| (Cow::Owned(index.to_string()), value)),
            prefix,
            rows,
        ),
        _ => {}
    }
}

fn flatten_entries<'a, I>(entries: I, prefix: &str, rows: &mut Vec<FlatRow>)
where
    I: Iterator<Item = (Cow<'a, str>, &'a Value)>,
{
    let mut row = FlatRow::new();
    let mut nested = Vec::new();

    for (key, value) in entries {
        let new_key = join_key(prefix, &key);
        match value {
            Value::Null => {
                row.insert(new_key, Value::String(String::new()));
            }
            Value::Object(_) => flatten_node(value, &new_key, &mut nested),
            Value::Array(items) => {
                for (index, item) in items.iter().enumerate() {
                    let item_key = format!("{new_key}_{index}");
                    if item.is_object() || item.is_array() {
                        flatten_node(item, &item_key, &mut nested);
                    } else {
                        row.insert(item_key, item.clone());
                    }
                }
            }
            scalar => {
                row.insert(new_key, scalar.clone());
            }
        }
    }

    if !row.is_empty() {
        rows.push(row);
    }
    rows.append(&mut nested);
}

fn join_key(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix}_{key}")
    }
}

fn single(column: &str, value: Value) -> FlatRow {
    let mut row = FlatRow::with_capacity(1);
    row.insert(column.to_string(), value);
    row
}

// ============================================================================
// CSV text ↔ rows
// ============================================================================

/// Parse CSV text into rows of strings.
///
/// Lines are trimmed and blank lines dropped. The first line names the
/// columns; later lines are split on `,` and zipped positionally, with
/// missing trailing cells read as empty strings. Quoting is not interpreted.
#[must_use]
pub fn parse_csv(content: &str) -> Vec<FlatRow> {
    let mut lines = content.split('\n').map(str::trim).filter(|line| !line.is_empty());

    let Some(header_line) = lines.next() else {
        return Vec::new();
    };
    let headers: Vec<&str> = header_line.split(',').map(str::trim).collect();

    lines
        .map(|line| {
            let values: Vec<&str> = line.split(',').map(str::trim).collect();
            headers
                .iter()
                .enumerate()
                .map(|(index, header)| {
                    let cell = values.get(index).copied().unwrap_or_default();
                    ((*header).to_string(), Value::String(cell.to_string()))
                })
                .collect()
        })
        .collect()
}

/// Serialize rows as CSV text.
///
/// The header is the key set of the first row; each row supplies one cell
/// per header column. Lines are joined with `\n` without a trailing newline.
///
/// # Errors
/// Returns [`Error::CsvOutputShapeInvalid`] if `rows` is empty.
pub fn stringify_csv(rows: &[FlatRow]) -> Result<String> {
    let first = rows.first().ok_or(Error::CsvOutputShapeInvalid)?;
    let headers: Vec<&str> = first.keys().map(String::as_str).collect();

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(join_cells(headers.iter().map(|header| Cow::Borrowed(*header))));

    for row in rows {
        lines.push(join_cells(
            headers
                .iter()
                .map(|header| row.get(*header).map_or(Cow::Borrowed(""), cell_text)),
        ));
    }

    Ok(lines.join("\n"))
}

/// Rows as a JSON array of objects.
#[must_use]
pub fn rows_to_value(rows: Vec<FlatRow>) -> Value {
    Value::Array(
        rows.into_iter()
            .map(|row| Value::Object(row.into_iter().collect()))
            .collect(),
    )
}

fn join_cells<'a>(cells: impl Iterator<Item = Cow<'a, str>>) -> String {
    cells
        .map(|cell| escape_cell(&cell).into_owned())
        .collect::<Vec<_>>()
        .join(",")
}

/// Text of one cell. Nested values are written as compact JSON.
fn cell_text(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(s) => Cow::Borrowed(s),
        Value::Null => Cow::Borrowed(""),
        other => Cow::Owned(other.to_string()),
    }
}

fn escape_cell(cell: &str) -> Cow<'_, str> {
    if cell.contains(',') || cell.contains('"') {
        Cow::Owned(format!("\"{}\"", cell.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(cell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn row(cells: &[(&str, Value)]) -> FlatRow {
        cells
            .iter()
            .map(|(k, v)| ((*k).to_string(), v.clone()))
            .collect()
    }

    fn data(value: Value) -> ParsedDocument {
        ParsedDocument::Data(value)
    }

    #[test]
    fn test_nested_object_fans_out() {
        let rows = to_rows(&data(json!({"a": 1, "b": {"c": 2}}))).unwrap();
        assert_eq!(rows, vec![row(&[("a", json!(1))]), row(&[("b_c", json!(2))])]);
    }

    #[test]
    fn test_owning_row_keeps_all_scalars() {
        let rows = to_rows(&data(json!({"a": 1, "b": {"c": 2}, "d": 3}))).unwrap();
        assert_eq!(
            rows,
            vec![
                row(&[("a", json!(1)), ("d", json!(3))]),
                row(&[("b_c", json!(2))]),
            ]
        );
    }

    #[test]
    fn test_deep_nesting_flushes_every_level() {
        let rows = to_rows(&data(json!({"x": {"y": 1, "z": {"w": 2}}}))).unwrap();
        assert_eq!(
            rows,
            vec![row(&[("x_y", json!(1))]), row(&[("x_z_w", json!(2))])]
        );
    }

    #[test]
    fn test_arrays_inside_objects() {
        let rows = to_rows(&data(json!({
            "tags": ["a", "b"],
            "items": [{"id": 1}, {"id": 2}],
            "grid": [[1, 2]],
            "gone": null
        })))
        .unwrap();
        assert_eq!(
            rows,
            vec![
                row(&[("tags_0", json!("a")), ("tags_1", json!("b")), ("gone", json!(""))]),
                row(&[("items_0_id", json!(1))]),
                row(&[("items_1_id", json!(2))]),
                row(&[("grid_0_0", json!(1)), ("grid_0_1", json!(2))]),
            ]
        );
    }

    #[test]
    fn test_empty_nested_object_emits_nothing() {
        let rows = to_rows(&data(json!({"a": {}}))).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_text_becomes_content_rows() {
        let rows = to_rows(&ParsedDocument::Text("line1\nline2\n\n".to_string())).unwrap();
        assert_eq!(
            rows,
            vec![
                row(&[("content", json!("line1"))]),
                row(&[("content", json!("line2"))]),
            ]
        );

        // a JSON string scalar is treated the same way
        let rows = to_rows(&data(json!("  only line  "))).unwrap();
        assert_eq!(rows, vec![row(&[("content", json!("only line"))])]);
    }

    #[test]
    fn test_array_of_objects_passes_through() {
        let rows = to_rows(&data(json!([{"a": 1}, {"b": {"c": 2}}]))).unwrap();
        assert_eq!(
            rows,
            vec![row(&[("a", json!(1))]), row(&[("b", json!({"c": 2}))])]
        );
    }

    #[test]
    fn test_mixed_array_of_objects_is_rejected() {
        let result = to_rows(&data(json!([{"a": 1}, 5])));
        assert!(matches!(result, Err(Error::CsvOutputShapeInvalid)));
    }

    #[test]
    fn test_other_arrays_and_scalars_wrap_in_value() {
        let rows = to_rows(&data(json!([1, "two", null]))).unwrap();
        assert_eq!(
            rows,
            vec![
                row(&[("value", json!(1))]),
                row(&[("value", json!("two"))]),
                row(&[("value", Value::Null)]),
            ]
        );

        assert_eq!(to_rows(&data(json!(42))).unwrap(), vec![row(&[("value", json!(42))])]);
        assert!(to_rows(&data(json!([]))).unwrap().is_empty());
    }

    #[test]
    fn test_stringify_quotes_commas_and_quotes() {
        let csv = stringify_csv(&[row(&[("a", json!(1)), ("b", json!("x,y"))])]).unwrap();
        assert_eq!(csv, "a,b\n1,\"x,y\"");

        let csv = stringify_csv(&[row(&[("q", json!("say \"hi\""))])]).unwrap();
        assert_eq!(csv, "q\n\"say \"\"hi\"\"\"");
    }

    #[test]
    fn test_stringify_uses_first_row_header() {
        let rows = vec![
            row(&[("a", json!(1)), ("b", json!(true))]),
            row(&[("b", json!(null)), ("c", json!(3))]),
            row(&[("a", json!([1, 2]))]),
        ];
        let csv = stringify_csv(&rows).unwrap();
        assert_eq!(csv, "a,b\n1,true\n,\n\"[1,2]\",");
    }

    #[test]
    fn test_stringify_empty_rows_fails() {
        assert!(matches!(stringify_csv(&[]), Err(Error::CsvOutputShapeInvalid)));
    }

    #[test]
    fn test_parse_csv() {
        let rows = parse_csv("name, age\r\nalice,30\n\n bob \n");
        assert_eq!(
            rows,
            vec![
                row(&[("name", json!("alice")), ("age", json!("30"))]),
                row(&[("name", json!("bob")), ("age", json!(""))]),
            ]
        );
        assert!(parse_csv("").is_empty());
        assert!(parse_csv("only,headers").is_empty());
    }

    #[test]
    fn test_parse_csv_never_rebuilds_nesting() {
        let rows = parse_csv("b_c\n2");
        assert_eq!(rows_to_value(rows), json!([{"b_c": "2"}]));
    }
}
