//! # FileSwap
//!
//! A pure-Rust library for converting files between formats.
//!
//! ## Supported Conversions
//!
//! - **Images** - JPEG, PNG, WebP, SVG → JPEG, PNG, WebP, ICO (16/32/48 px)
//! - **Text** - JSON, YAML, CSV, Markdown, TXT ↔ each other
//!
//! Tree-shaped data written as CSV is flattened: nested keys are joined
//! with `_`, array elements get their index appended, and nested mappings
//! become rows of their own. Reading CSV back yields flat rows only.
//!
//! ## Quick Start
//!
//! ```no_run
//! use fileswap::converter::{convert, ConvertOptions};
//!
//! // data.json → data.yaml
//! let result = convert("data.json", "yaml", &ConvertOptions::default())?;
//! println!("Wrote {}", result.path().display());
//! # Ok::<(), fileswap::Error>(())
//! ```
//!
//! ### Checking a Conversion
//!
//! ```
//! use fileswap::formats::{resolve, Category, Verdict};
//!
//! assert_eq!(resolve("png", "ico"), Verdict::Possible(Category::Image));
//! assert_eq!(resolve("json", "png"), Verdict::UnsupportedTarget);
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` - Enables the `fileswap` command-line binary

pub mod converter;
pub mod error;
pub mod formats;
pub mod utils;

// Re-exports for convenience
pub use error::{Error, Result};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::formats::{Category, FormatTag, Verdict, resolve};

    pub use crate::converter::{
        Conversion, ConvertOptions, ConvertPhase, ConvertProgress, IcoSize, ParsedDocument,
        convert, convert_text, convert_with_progress, transcode,
    };
    pub use crate::converter::text::tabular::{FlatRow, flatten, parse_csv, stringify_csv, to_rows};
    pub use crate::converter::text::{parse_document, serialize_document};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;
