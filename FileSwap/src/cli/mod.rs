//! FileSwap CLI - Command-line interface for file conversion

pub mod convert;
pub mod progress;

use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser};

use crate::converter::IcoSize;

const SUPPORTED_FORMATS: &str = "\
Supported Formats:

    ----- IMAGES -----
    From: JPEG, JPG, PNG, SVG, WEBP
    To:   JPEG, JPG, PNG, WEBP, ICO

    ----- TEXT -----
    From: TXT, MD, JSON, YAML, CSV
    To:   TXT, MD, JSON, YAML, CSV

Examples:
    fileswap image.jpg png         # Convert image to PNG
    fileswap logo.png ico -s       # 16x16 icon (-m 32x32, -l 48x48)
    fileswap data.json yaml        # Convert between text formats
    fileswap data.json csv         # Flatten JSON into CSV rows
    fileswap image.jpg png -d      # Delete the source afterwards";

#[derive(Parser, Debug)]
#[command(name = "fileswap", version)]
#[command(about = "FileSwap - A file conversion tool", long_about = None)]
#[command(after_help = SUPPORTED_FORMATS)]
pub struct Cli {
    /// File to convert
    pub filepath: Option<PathBuf>,

    /// Target format (output is written next to the source with this extension)
    pub target_format: Option<String>,

    /// Create 16x16 ICO (small)
    #[arg(short = 's')]
    pub small: bool,

    /// Create 32x32 ICO (medium)
    #[arg(short = 'm')]
    pub medium: bool,

    /// Create 48x48 ICO (large)
    #[arg(short = 'l')]
    pub large: bool,

    /// Delete source file after conversion
    #[arg(short, long)]
    pub delete: bool,

    /// Suppress step progress
    #[arg(short, long)]
    pub quiet: bool,

    /// Show debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// A fully parsed invocation
#[derive(Debug)]
pub struct Invocation {
    pub filepath: PathBuf,
    pub target_format: String,
    pub ico_size: Option<IcoSize>,
    pub delete: bool,
    pub quiet: bool,
    pub verbose: bool,
}

/// Parse command-line arguments.
///
/// Returns `Ok(None)` when help or version output was printed instead
/// (explicitly requested, or fewer than two positional arguments given).
///
/// # Errors
/// Returns the clap error for unknown or malformed arguments.
pub fn parse_args<I, T>(args: I) -> Result<Option<Invocation>, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let mut command = Cli::command();
    let matches = match command.try_get_matches_from_mut(args) {
        Ok(matches) => matches,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.print()?;
            return Ok(None);
        }
        Err(err) => return Err(err),
    };
    let cli = Cli::from_arg_matches(&matches)?;

    let (Some(filepath), Some(target_format)) = (cli.filepath, cli.target_format) else {
        command.print_help()?;
        return Ok(None);
    };

    Ok(Some(Invocation {
        filepath,
        target_format,
        ico_size: ico_size_from(&matches),
        delete: cli.delete,
        quiet: cli.quiet,
        verbose: cli.verbose,
    }))
}

/// First ICO size flag on the command line wins.
fn ico_size_from(matches: &ArgMatches) -> Option<IcoSize> {
    [("small", "-s"), ("medium", "-m"), ("large", "-l")]
        .into_iter()
        .filter(|(id, _)| matches.get_flag(id))
        .filter_map(|(id, flag)| matches.index_of(id).map(|index| (index, flag)))
        .min_by_key(|(index, _)| *index)
        .and_then(|(_, flag)| IcoSize::from_flag(flag).ok())
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    // Already initialized when called twice in one process
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .try_init();
}

/// Run the FileSwap CLI with the process arguments
pub fn run_cli() -> ExitCode {
    run_from(std::env::args_os())
}

/// Run the FileSwap CLI with explicit arguments (first item is the program name).
///
/// Exit code 0 on success or help, 1 on any error with a single
/// `Error: ...` line on stderr.
pub fn run_from<I, T>(args: I) -> ExitCode
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let invocation = match parse_args(args) {
        Ok(Some(invocation)) => invocation,
        Ok(None) => return ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", first_line(&err.to_string()));
            return ExitCode::FAILURE;
        }
    };

    init_logging(invocation.verbose);

    match convert::execute(
        &invocation.filepath,
        &invocation.target_format,
        invocation.ico_size,
        invocation.delete,
        invocation.quiet,
    ) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", first_line(&format!("{err:#}")));
            ExitCode::FAILURE
        }
    }
}

fn first_line(message: &str) -> &str {
    let line = message.lines().find(|line| !line.trim().is_empty()).unwrap_or_default();
    line.strip_prefix("error: ").unwrap_or(line)
}
