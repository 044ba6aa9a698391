//! SPDX-FileCopyrightText: 2025 `FileSwap` contributors
//!
//! SPDX-License-Identifier: MIT
//!
//! Format tags, conversion categories and the compatibility resolver
//!
//! - [`FormatTag`] - Every extension the tool knows about
//! - [`Category`] - Image, document and text conversion families
//! - [`CATEGORY_TABLES`] - Static from/to sets per category
//! - [`resolve`] - Source/target pair → [`Verdict`]

mod resolver;
mod tables;

use std::fmt;
use std::path::Path;
use std::str::FromStr;

pub use resolver::{Verdict, resolve, resolve_tags};
pub use tables::{CATEGORY_TABLES, CategoryTable, category_of};

/// A file format, identified by its (lowercase) extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatTag {
    // Text
    Json,
    Yaml,
    Csv,
    Md,
    Txt,
    // Images
    Jpg,
    Jpeg,
    Png,
    Webp,
    Svg,
    Ico,
    // Documents
    Docx,
    Pdf,
}

impl FormatTag {
    /// All known tags, text first.
    pub const ALL: [FormatTag; 13] = [
        Self::Json,
        Self::Yaml,
        Self::Csv,
        Self::Md,
        Self::Txt,
        Self::Jpg,
        Self::Jpeg,
        Self::Png,
        Self::Webp,
        Self::Svg,
        Self::Ico,
        Self::Docx,
        Self::Pdf,
    ];

    /// Lowercase extension without the leading dot.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
            Self::Csv => "csv",
            Self::Md => "md",
            Self::Txt => "txt",
            Self::Jpg => "jpg",
            Self::Jpeg => "jpeg",
            Self::Png => "png",
            Self::Webp => "webp",
            Self::Svg => "svg",
            Self::Ico => "ico",
            Self::Docx => "docx",
            Self::Pdf => "pdf",
        }
    }

    /// Parse an extension case-insensitively. Returns `None` for unknown extensions.
    #[must_use]
    pub fn from_extension(ext: &str) -> Option<Self> {
        let lower = ext.trim_start_matches('.').to_ascii_lowercase();
        Self::ALL.into_iter().find(|tag| tag.extension() == lower)
    }

    /// Read the format tag from a path's extension.
    #[must_use]
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Self> {
        path.as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    /// Whether this is one of the structured-text formats.
    #[must_use]
    pub const fn is_text(self) -> bool {
        matches!(self, Self::Json | Self::Yaml | Self::Csv | Self::Md | Self::Txt)
    }

    /// Whether this is one of the image formats.
    #[must_use]
    pub const fn is_image(self) -> bool {
        matches!(
            self,
            Self::Jpg | Self::Jpeg | Self::Png | Self::Webp | Self::Svg | Self::Ico
        )
    }
}

impl fmt::Display for FormatTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for FormatTag {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_extension(s).ok_or_else(|| crate::Error::UnsupportedTargetFormat(s.to_lowercase()))
    }
}

/// Conversion family. Each category owns a `from` set and a `to` set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Image,
    Document,
    Text,
}

impl Category {
    /// Human-readable name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Document => "document",
            Self::Text => "text",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lowercased extension of a path without the dot, or an empty string.
#[must_use]
pub fn extension_of<P: AsRef<Path>>(path: P) -> String {
    path.as_ref()
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default()
}

/// Name used for a source in format errors: its extension, or the file
/// name when there is none.
pub fn source_label<P: AsRef<Path>>(path: P) -> String {
    let path = path.as_ref();
    let ext = extension_of(path);
    if ext.is_empty() {
        path.file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string())
    } else {
        ext
    }
}
