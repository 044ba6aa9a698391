//! Path utilities

use std::path::{Path, PathBuf};

use crate::formats::FormatTag;

/// Output path for a conversion: same directory and stem, extension replaced by `target`.
pub fn output_path<P: AsRef<Path>>(source: P, target: FormatTag) -> PathBuf {
    source.as_ref().with_extension(target.extension())
}
