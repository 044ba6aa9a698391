//! Types for conversion options, results and progress tracking
//!
//! SPDX-FileCopyrightText: 2025 `FileSwap` contributors
//!
//! SPDX-License-Identifier: MIT

use std::path::PathBuf;

use super::image::IcoSize;

// ============================================================================
// Options / Results
// ============================================================================

/// Per-invocation conversion options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Icon size, required when the target is `ico`
    pub ico_size: Option<IcoSize>,
}

impl ConvertOptions {
    /// Options with an ICO size class set
    #[must_use]
    pub fn with_ico_size(ico_size: IcoSize) -> Self {
        Self {
            ico_size: Some(ico_size),
        }
    }
}

/// Outcome of a successful [`convert`](super::convert) call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Conversion {
    /// A new file was written at this path
    Written(PathBuf),
    /// Source and target formats match; nothing was written
    Unchanged(PathBuf),
}

impl Conversion {
    /// Path of the file holding the target format
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Written(path) | Self::Unchanged(path) => path,
        }
    }
}

// ============================================================================
// Progress Types
// ============================================================================

/// Progress callback type for conversion operations
pub type ConvertProgressCallback<'a> = &'a dyn Fn(&ConvertProgress);

/// Progress information during a conversion
#[derive(Debug, Clone)]
pub struct ConvertProgress {
    /// Current operation phase
    pub phase: ConvertPhase,
    /// Current step number (1-indexed)
    pub current: usize,
    /// Total number of steps
    pub total: usize,
    /// Description of the current step (if applicable)
    pub message: Option<String>,
}

impl ConvertProgress {
    /// Create a new progress update
    #[must_use]
    pub fn new(phase: ConvertPhase, current: usize, total: usize) -> Self {
        Self {
            phase,
            current,
            total,
            message: None,
        }
    }

    /// Create a progress update with a message
    #[must_use]
    pub fn with_file(
        phase: ConvertPhase,
        current: usize,
        total: usize,
        message: impl Into<String>,
    ) -> Self {
        Self {
            phase,
            current,
            total,
            message: Some(message.into()),
        }
    }
}

/// Phase of a conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConvertPhase {
    /// Reading the source file
    ReadingSource,
    /// Decoding the source format
    Parsing,
    /// Restructuring or resizing
    Converting,
    /// Writing the output file
    WritingOutput,
    /// Operation complete
    Complete,
}
