//! SPDX-FileCopyrightText: 2025 `FileSwap` contributors
//!
//! SPDX-License-Identifier: MIT
//!
//! Structured-text conversion
//!
//! Parses JSON, YAML, CSV, Markdown and plain text into a [`ParsedDocument`]
//! and serializes it back out in any of those formats. CSV output goes
//! through the [`tabular`] flattening engine.

pub mod tabular;

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::converter::{ConvertPhase, ConvertProgress, ConvertProgressCallback};
use crate::error::{Error, Result};
use crate::formats::{FormatTag, extension_of, source_label};
use crate::utils::output_path;

use tabular::{parse_csv, rows_to_value, stringify_csv, to_rows};

/// In-memory form of a source document.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedDocument {
    /// Raw text (md/txt), kept verbatim
    Text(String),
    /// Structured data (json/yaml/csv)
    Data(Value),
}

impl ParsedDocument {
    /// The document as a string, if it is one (raw text or a string scalar).
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) | Self::Data(Value::String(text)) => Some(text),
            Self::Data(_) => None,
        }
    }

    /// The document as a JSON value; raw text becomes a string value.
    #[must_use]
    pub fn to_value(&self) -> Value {
        match self {
            Self::Text(text) => Value::String(text.clone()),
            Self::Data(value) => value.clone(),
        }
    }
}

/// Parse `content` as `format`.
///
/// # Errors
/// Returns [`Error::UnsupportedSourceFormat`] for non-text formats, or a
/// JSON/YAML error if decoding fails.
pub fn parse_document(content: &str, format: FormatTag) -> Result<ParsedDocument> {
    match format {
        FormatTag::Json => Ok(ParsedDocument::Data(serde_json::from_str(content)?)),
        FormatTag::Yaml => Ok(ParsedDocument::Data(serde_yaml::from_str::<Value>(content)?)),
        FormatTag::Csv => Ok(ParsedDocument::Data(rows_to_value(parse_csv(content)))),
        FormatTag::Md | FormatTag::Txt => Ok(ParsedDocument::Text(content.to_string())),
        other => Err(Error::UnsupportedSourceFormat(other.to_string())),
    }
}

/// Serialize `document` as `format`.
///
/// Markdown and plain-text output write strings verbatim; anything else
/// falls back to pretty-printed JSON.
///
/// # Errors
/// Returns [`Error::UnsupportedTargetFormat`] for non-text formats,
/// [`Error::CsvOutputShapeInvalid`] if the document yields no CSV rows, or a
/// JSON/YAML error if encoding fails.
pub fn serialize_document(document: &ParsedDocument, format: FormatTag) -> Result<String> {
    match format {
        FormatTag::Json => Ok(serde_json::to_string_pretty(&document.to_value())?),
        FormatTag::Yaml => Ok(serde_yaml::to_string(&document.to_value())?),
        FormatTag::Csv => {
            let rows = to_rows(document)?;
            tracing::debug!("Flattened document into {} CSV rows", rows.len());
            stringify_csv(&rows)
        }
        FormatTag::Md | FormatTag::Txt => match document.as_text() {
            Some(text) => Ok(text.to_string()),
            None => {
                tracing::warn!("Structured data written to .{format} as pretty-printed JSON");
                Ok(serde_json::to_string_pretty(&document.to_value())?)
            }
        },
        other => Err(Error::UnsupportedTargetFormat(other.to_string())),
    }
}

/// Convert a text file to `target`, writing next to the source.
///
/// Returns the output path (same directory and stem, new extension).
/// An existing file at that path is overwritten.
///
/// # Errors
/// Returns an error if either format is not a text format, or if reading,
/// parsing, serializing or writing fails.
pub fn convert_text<P: AsRef<Path>>(source: P, target: FormatTag) -> Result<PathBuf> {
    convert_text_with_progress(source, target, &|_| {})
}

/// Convert a text file to `target` with progress callback
///
/// # Errors
/// Returns an error if either format is not a text format, or if reading,
/// parsing, serializing or writing fails.
pub fn convert_text_with_progress<P: AsRef<Path>>(
    source: P,
    target: FormatTag,
    progress: ConvertProgressCallback,
) -> Result<PathBuf> {
    let source = source.as_ref();
    let source_ext = extension_of(source);
    let source_format = FormatTag::from_extension(&source_ext)
        .filter(|tag| tag.is_text())
        .ok_or_else(|| Error::UnsupportedSourceFormat(source_label(source)))?;
    if !target.is_text() {
        return Err(Error::UnsupportedTargetFormat(target.to_string()));
    }

    let dest = output_path(source, target);
    tracing::info!("Converting {source_format}→{target}: {source:?} → {dest:?}");

    progress(&ConvertProgress::with_file(
        ConvertPhase::ReadingSource,
        1,
        4,
        format!("Reading {source_format} file..."),
    ));
    let content = fs::read_to_string(source)?;

    progress(&ConvertProgress::with_file(
        ConvertPhase::Parsing,
        2,
        4,
        format!("Parsing {source_format}..."),
    ));
    let document = parse_document(&content, source_format)?;

    progress(&ConvertProgress::with_file(
        ConvertPhase::Converting,
        3,
        4,
        format!("Serializing as {target}..."),
    ));
    let output = serialize_document(&document, target)?;

    progress(&ConvertProgress::with_file(
        ConvertPhase::WritingOutput,
        4,
        4,
        format!("Writing {}...", dest.display()),
    ));
    fs::write(&dest, output)?;

    progress(&ConvertProgress::new(ConvertPhase::Complete, 4, 4));
    tracing::info!("Conversion complete");
    Ok(dest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_json_round_trip() {
        let doc = parse_document(r#"{"a":1,"b":2}"#, FormatTag::Json).unwrap();
        let text = serialize_document(&doc, FormatTag::Json).unwrap();
        assert_eq!(text, "{\n  \"a\": 1,\n  \"b\": 2\n}");
        assert_eq!(parse_document(&text, FormatTag::Json).unwrap(), doc);
    }

    #[test]
    fn test_key_order_is_preserved() {
        let doc = parse_document(r#"{"z":1,"a":2,"m":3}"#, FormatTag::Json).unwrap();
        let yaml = serialize_document(&doc, FormatTag::Yaml).unwrap();
        assert_eq!(yaml, "z: 1\na: 2\nm: 3\n");
    }

    #[test]
    fn test_yaml_to_json() {
        let doc = parse_document("name: demo\nitems:\n  - 1\n  - two\n", FormatTag::Yaml).unwrap();
        assert_eq!(doc, ParsedDocument::Data(json!({"name": "demo", "items": [1, "two"]})));
    }

    #[test]
    fn test_csv_parses_to_array_of_string_objects() {
        let doc = parse_document("a,b\n1,2\n", FormatTag::Csv).unwrap();
        assert_eq!(doc, ParsedDocument::Data(json!([{"a": "1", "b": "2"}])));
    }

    #[test]
    fn test_text_passthrough() {
        let doc = parse_document("# Title\n\nbody\n", FormatTag::Md).unwrap();
        assert_eq!(serialize_document(&doc, FormatTag::Txt).unwrap(), "# Title\n\nbody\n");
        assert_eq!(
            serialize_document(&doc, FormatTag::Json).unwrap(),
            "\"# Title\\n\\nbody\\n\""
        );
    }

    #[test]
    fn test_structured_data_to_md_falls_back_to_json() {
        let doc = ParsedDocument::Data(json!({"a": [1]}));
        assert_eq!(
            serialize_document(&doc, FormatTag::Md).unwrap(),
            "{\n  \"a\": [\n    1\n  ]\n}"
        );
    }

    #[test]
    fn test_json_object_to_csv() {
        let doc = parse_document(r#"{"a":1,"b":{"c":2}}"#, FormatTag::Json).unwrap();
        assert_eq!(serialize_document(&doc, FormatTag::Csv).unwrap(), "a\n1\n");
    }

    #[test]
    fn test_non_text_formats_are_rejected() {
        assert!(matches!(
            parse_document("", FormatTag::Png),
            Err(Error::UnsupportedSourceFormat(ext)) if ext == "png"
        ));
        let doc = ParsedDocument::Text(String::new());
        assert!(matches!(
            serialize_document(&doc, FormatTag::Ico),
            Err(Error::UnsupportedTargetFormat(ext)) if ext == "ico"
        ));
    }

    #[test]
    fn test_extensionless_source_names_the_file() {
        let err = convert_text("missing/Makefile", FormatTag::Json).unwrap_err();
        assert_eq!(err.to_string(), "unsupported source format: Makefile");
    }

    #[test]
    fn test_empty_csv_output_fails() {
        let doc = ParsedDocument::Data(json!([]));
        assert!(matches!(
            serialize_document(&doc, FormatTag::Csv),
            Err(Error::CsvOutputShapeInvalid)
        ));
    }
}
