//! SPDX-FileCopyrightText: 2025 `FileSwap` contributors
//!
//! SPDX-License-Identifier: MIT
//!
//! Format conversion
//!
//! Every request is gated by the [`resolve`] verdict, then dispatched by
//! category:
//! - Text (JSON, YAML, CSV, Markdown, TXT) - [`text`]
//! - Image (JPEG, PNG, WebP, SVG → JPEG, PNG, WebP, ICO) - [`image`]
//! - Document (DOCX → PDF) - listed, no backend

pub mod image;
pub mod text;
mod types;

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::formats::{Category, FormatTag, Verdict, extension_of, resolve, source_label};

pub use types::{
    Conversion, ConvertOptions, ConvertPhase, ConvertProgress, ConvertProgressCallback,
};

// Re-export the per-category entry points
pub use self::image::{IcoSize, transcode, transcode_with_progress};
pub use text::{ParsedDocument, convert_text, convert_text_with_progress};

/// Convert `source` to `target`, writing the result next to the source.
///
/// # Errors
/// Returns an error if the resolver rejects the pair or the conversion fails.
pub fn convert<P: AsRef<Path>>(
    source: P,
    target: &str,
    options: &ConvertOptions,
) -> Result<Conversion> {
    convert_with_progress(source, target, options, &|_| {})
}

/// Convert `source` to `target` with progress callback
///
/// # Errors
/// Returns an error if the resolver rejects the pair or the conversion fails.
pub fn convert_with_progress<P: AsRef<Path>>(
    source: P,
    target: &str,
    options: &ConvertOptions,
    progress: ConvertProgressCallback,
) -> Result<Conversion> {
    let source = source.as_ref();
    let source_ext = extension_of(source);
    let target_ext = target.trim_start_matches('.').to_ascii_lowercase();

    let verdict = resolve(&source_ext, &target_ext);
    tracing::debug!("{source_ext} → {target_ext}: {}", verdict.as_str());

    match verdict {
        Verdict::SameFormat => {
            // Matching extensions still need a known format and an existing file
            if FormatTag::from_extension(&source_ext).is_none() {
                return Err(Error::UnsupportedSourceFormat(source_label(source)));
            }
            fs::metadata(source)?;
            progress(&ConvertProgress::new(ConvertPhase::Complete, 1, 1));
            Ok(Conversion::Unchanged(source.to_path_buf()))
        }
        Verdict::UnsupportedSource => Err(Error::UnsupportedSourceFormat(source_label(source))),
        Verdict::UnsupportedTarget => Err(Error::UnsupportedTargetFormat(target_ext)),
        Verdict::Possible(category) => {
            // Every extension in the category tables is a known tag
            let target_tag = FormatTag::from_extension(&target_ext)
                .ok_or_else(|| Error::UnsupportedTargetFormat(target_ext.clone()))?;

            match category {
                Category::Image => {
                    transcode_with_progress(source, target_tag, options.ico_size, progress)
                        .map(Conversion::Written)
                }
                Category::Text => {
                    convert_text_with_progress(source, target_tag, progress).map(Conversion::Written)
                }
                Category::Document => Err(Error::NoConverterAvailable {
                    category,
                    source_format: source_ext,
                    target: target_ext,
                }),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_same_format_writes_nothing() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("data.json");
        fs::write(&source, "{}").unwrap();

        let result = convert(&source, "JSON", &ConvertOptions::default()).unwrap();
        assert_eq!(result, Conversion::Unchanged(source.clone()));
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_same_format_needs_existing_source() {
        assert!(matches!(
            convert("missing/data.json", "json", &ConvertOptions::default()),
            Err(Error::Io(_))
        ));
    }

    #[test]
    fn test_same_unknown_format_is_unsupported() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("photo.bmp");
        fs::write(&source, "BM").unwrap();

        assert!(matches!(
            convert(&source, "bmp", &ConvertOptions::default()),
            Err(Error::UnsupportedSourceFormat(ext)) if ext == "bmp"
        ));
        assert!(matches!(
            convert("README", "", &ConvertOptions::default()),
            Err(Error::UnsupportedSourceFormat(name)) if name == "README"
        ));
    }

    #[test]
    fn test_rejections_happen_before_io() {
        let options = ConvertOptions::default();
        assert!(matches!(
            convert("missing/data.xyz", "json", &options),
            Err(Error::UnsupportedSourceFormat(ext)) if ext == "xyz"
        ));
        assert!(matches!(
            convert("missing/data.json", "png", &options),
            Err(Error::UnsupportedTargetFormat(ext)) if ext == "png"
        ));
        assert!(matches!(
            convert("missing/logo.png", "ico", &options),
            Err(Error::MissingOrInvalidIcoSize(None))
        ));
    }

    #[test]
    fn test_documents_have_no_backend() {
        assert!(matches!(
            convert("missing/report.docx", "pdf", &ConvertOptions::default()),
            Err(Error::NoConverterAvailable { category: Category::Document, .. })
        ));
    }
}
