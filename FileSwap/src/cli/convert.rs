//! CLI interface for format conversion
use std::fs;
use std::path::Path;
use std::time::Instant;

use anyhow::Context;

use super::progress::{print_done, print_progress};
use crate::converter::{Conversion, ConvertOptions, IcoSize, convert_with_progress};

pub fn execute(
    source: &Path,
    target_format: &str,
    ico_size: Option<IcoSize>,
    delete_source: bool,
    quiet: bool,
) -> anyhow::Result<()> {
    let started = Instant::now();
    let options = ConvertOptions { ico_size };

    let report = |progress: &crate::converter::ConvertProgress| {
        if !quiet {
            print_progress(progress);
        }
    };

    let conversion = convert_with_progress(source, target_format, &options, &report)
        .with_context(|| format!("failed to convert {}", source.display()))?;

    match conversion {
        Conversion::Written(dest) => {
            // Only delete once the output exists
            if delete_source {
                fs::remove_file(source).with_context(|| {
                    format!(
                        "wrote {} but failed to delete {}",
                        dest.display(),
                        source.display()
                    )
                })?;
                tracing::info!("Deleted source {:?}", source);
            }

            if !quiet {
                print_done(started.elapsed());
            }
            println!(
                "Successfully converted {} to {}",
                source.display(),
                target_format.to_lowercase()
            );
        }
        Conversion::Unchanged(path) => {
            println!(
                "{} is already {}; nothing to convert",
                path.display(),
                target_format.to_lowercase()
            );
        }
    }

    Ok(())
}
