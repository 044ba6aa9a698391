//! `fileswap` command-line entry point

use std::process::ExitCode;

fn main() -> ExitCode {
    fileswap::cli::run_cli()
}
