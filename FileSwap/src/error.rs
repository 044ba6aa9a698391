//! Error types for `FileSwap`

use thiserror::Error;

use crate::formats::Category;

/// The error type for `FileSwap` operations.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    // ==================== IO Errors ====================
    /// IO error from reading, writing or deleting files.
    #[error("IO error")]
    Io(#[from] std::io::Error),

    // ==================== Format Errors ====================
    /// The source extension is not claimed by any conversion category.
    #[error("unsupported source format: {0}")]
    UnsupportedSourceFormat(String),

    /// The target format is not reachable from the source's category.
    #[error("unsupported target format: {0}")]
    UnsupportedTargetFormat(String),

    /// The conversion is listed in the tables but no backend implements it.
    #[error("no converter available for {category} conversions ({source_format} -> {target})")]
    NoConverterAvailable {
        /// Category that owns the source format.
        category: Category,
        /// Source extension.
        source_format: String,
        /// Target extension.
        target: String,
    },

    // ==================== Image Errors ====================
    /// ICO output was requested without a valid size class.
    #[error("ICO conversion requires a size option: -s (16x16), -m (32x32), or -l (48x48){}", invalid_suffix(.0.as_deref()))]
    MissingOrInvalidIcoSize(Option<String>),

    /// The imaging library failed to decode, resize or encode.
    #[error("failed to convert image: {0}")]
    ImageConversionFailed(String),

    // ==================== Text Errors ====================
    /// CSV output needs a non-empty sequence of mappings.
    #[error("CSV output requires an array of objects")]
    CsvOutputShapeInvalid,

    /// JSON parsing or serialization error.
    #[error("JSON error")]
    Json(#[from] serde_json::Error),

    /// YAML parsing or serialization error.
    #[error("YAML error")]
    Yaml(#[from] serde_yaml::Error),
}

fn invalid_suffix(given: Option<&str>) -> String {
    given.map(|size| format!(" (got '{size}')")).unwrap_or_default()
}

impl From<image::ImageError> for Error {
    fn from(err: image::ImageError) -> Self {
        Error::ImageConversionFailed(err.to_string())
    }
}

/// A specialized Result type for `FileSwap` operations.
pub type Result<T> = std::result::Result<T, Error>;
