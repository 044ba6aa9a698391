//! Utility functions

pub mod path;

pub use path::output_path;
