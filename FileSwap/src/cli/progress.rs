//! CLI progress display utilities
//!
//! Step indicators with emojis, driven by the library's progress callback.

use std::time::Duration;

use console::{Emoji, style};
use indicatif::HumanDuration;

use crate::converter::{ConvertPhase, ConvertProgress};

// =============================================================================
// Emoji Constants (with ASCII fallbacks for terminals without emoji support)
// =============================================================================

/// Magnifying glass - for reading operations
pub static LOOKING_GLASS: Emoji<'_, '_> = Emoji("🔍 ", "");
/// Document - for parsing text formats
pub static DOCUMENT: Emoji<'_, '_> = Emoji("📄 ", "");
/// Gear - for conversion operations
pub static GEAR: Emoji<'_, '_> = Emoji("⚙️  ", "");
/// Floppy disk - for writing/saving operations
pub static DISK: Emoji<'_, '_> = Emoji("💾 ", "");
/// Sparkles - for completion
pub static SPARKLE: Emoji<'_, '_> = Emoji("✨ ", "");

/// Emoji shown for a conversion phase
#[must_use]
pub fn phase_emoji(phase: ConvertPhase) -> Emoji<'static, 'static> {
    match phase {
        ConvertPhase::ReadingSource => LOOKING_GLASS,
        ConvertPhase::Parsing => DOCUMENT,
        ConvertPhase::Converting => GEAR,
        ConvertPhase::WritingOutput => DISK,
        ConvertPhase::Complete => SPARKLE,
    }
}

/// Print a step indicator: `[1/3] 🔍 Message...`
///
/// # Example
/// ```ignore
/// print_step(1, 3, LOOKING_GLASS, "Reading json file...");
/// print_step(2, 3, GEAR, "Serializing as yaml...");
/// print_step(3, 3, DISK, "Writing data.yaml...");
/// ```
pub fn print_step(current: usize, total: usize, emoji: Emoji, msg: &str) {
    println!(
        "{} {}{}",
        style(format!("[{current}/{total}]")).bold().dim(),
        emoji,
        msg
    );
}

/// Print a library progress event as a step line. Events without a message are skipped.
pub fn print_progress(progress: &ConvertProgress) {
    if let Some(msg) = &progress.message {
        print_step(progress.current, progress.total, phase_emoji(progress.phase), msg);
    }
}

/// Print completion message: `✨ Done in 2s`
pub fn print_done(elapsed: Duration) {
    println!("{} Done in {}", SPARKLE, HumanDuration(elapsed));
}
