//! Static conversion tables
//!
//! SPDX-FileCopyrightText: 2025 `FileSwap` contributors
//!
//! SPDX-License-Identifier: MIT

use super::{Category, FormatTag};

/// The `from`/`to` extension sets owned by one category.
#[derive(Debug, Clone, Copy)]
pub struct CategoryTable {
    pub category: Category,
    /// Acceptable source formats
    pub from: &'static [FormatTag],
    /// Acceptable target formats
    pub to: &'static [FormatTag],
}

impl CategoryTable {
    /// Whether `ext` (lowercase, no dot) is an accepted source.
    #[must_use]
    pub fn accepts_source(&self, ext: &str) -> bool {
        self.from.iter().any(|tag| tag.extension() == ext)
    }

    /// Whether `ext` (lowercase, no dot) is an accepted target.
    #[must_use]
    pub fn accepts_target(&self, ext: &str) -> bool {
        self.to.iter().any(|tag| tag.extension() == ext)
    }
}

/// Category tables in lookup order. Categories are disjoint on their `from` sets.
pub static CATEGORY_TABLES: [CategoryTable; 3] = [
    CategoryTable {
        category: Category::Image,
        from: &[
            FormatTag::Jpg,
            FormatTag::Jpeg,
            FormatTag::Png,
            FormatTag::Webp,
            FormatTag::Svg,
        ],
        to: &[
            FormatTag::Jpg,
            FormatTag::Jpeg,
            FormatTag::Png,
            FormatTag::Webp,
            FormatTag::Ico,
        ],
    },
    CategoryTable {
        category: Category::Document,
        from: &[FormatTag::Docx],
        to: &[FormatTag::Pdf],
    },
    CategoryTable {
        category: Category::Text,
        from: &[
            FormatTag::Txt,
            FormatTag::Md,
            FormatTag::Json,
            FormatTag::Yaml,
            FormatTag::Csv,
        ],
        to: &[
            FormatTag::Txt,
            FormatTag::Md,
            FormatTag::Json,
            FormatTag::Yaml,
            FormatTag::Csv,
        ],
    },
];

/// First category whose `from` set claims `ext`.
#[must_use]
pub fn category_of(ext: &str) -> Option<&'static CategoryTable> {
    CATEGORY_TABLES.iter().find(|table| table.accepts_source(ext))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_sets_are_disjoint() {
        for (i, a) in CATEGORY_TABLES.iter().enumerate() {
            for b in &CATEGORY_TABLES[i + 1..] {
                assert!(a.from.iter().all(|tag| !b.from.contains(tag)));
            }
        }
    }

    #[test]
    fn test_category_of() {
        assert_eq!(category_of("svg").map(|t| t.category), Some(Category::Image));
        assert_eq!(category_of("docx").map(|t| t.category), Some(Category::Document));
        assert_eq!(category_of("csv").map(|t| t.category), Some(Category::Text));
        // ico is a target only
        assert!(category_of("ico").is_none());
        assert!(category_of("pdf").is_none());
    }
}
