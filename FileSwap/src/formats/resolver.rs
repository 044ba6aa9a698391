//! Format compatibility resolver
//!
//! SPDX-FileCopyrightText: 2025 `FileSwap` contributors
//!
//! SPDX-License-Identifier: MIT

use super::{Category, FormatTag, category_of};

/// Classification of a source/target extension pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Source and target are the same extension.
    SameFormat,
    /// No category accepts the source extension.
    UnsupportedSource,
    /// The source's category cannot produce the target extension.
    UnsupportedTarget,
    /// The conversion is legal within this category.
    Possible(Category),
}

impl Verdict {
    /// Upper-case tag, matching the names used in messages and logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SameFormat => "SAME_FORMAT",
            Self::UnsupportedSource => "UNSUPPORTED_SOURCE",
            Self::UnsupportedTarget => "UNSUPPORTED_TARGET",
            Self::Possible(_) => "POSSIBLE",
        }
    }
}

/// Resolve whether `source_ext` can be converted to `target_ext`.
///
/// Extensions are compared case-insensitively and may carry a leading dot.
/// Unknown extensions are valid input; the result is always one verdict.
#[must_use]
pub fn resolve(source_ext: &str, target_ext: &str) -> Verdict {
    let source = normalize(source_ext);
    let target = normalize(target_ext);

    if source == target {
        return Verdict::SameFormat;
    }

    let Some(table) = category_of(&source) else {
        return Verdict::UnsupportedSource;
    };

    if !table.accepts_target(&target) {
        return Verdict::UnsupportedTarget;
    }

    Verdict::Possible(table.category)
}

/// [`resolve`] for already-parsed tags.
#[must_use]
pub fn resolve_tags(source: FormatTag, target: FormatTag) -> Verdict {
    resolve(source.extension(), target.extension())
}

fn normalize(ext: &str) -> String {
    ext.trim_start_matches('.').to_ascii_lowercase()
}
