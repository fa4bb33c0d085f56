//! # git-path-from-url CLI
//!
//! This is the binary entry point for the `git-path-from-url` command-line
//! tool. Installed on `PATH` it also works as `git path-from-url <url>`.
//!
//! Its responsibilities are:
//! - Parsing command-line arguments using `clap`.
//! - Running the conversion for the single URL argument.
//! - Reporting any failure as one line on stderr with exit status 1.
//!
//! The conversion itself lives in the library crate; the binary is a thin
//! wrapper around it.

mod cli;

use std::process::ExitCode;

use clap::Parser;

fn main() -> ExitCode {
    let cli = match cli::Cli::try_parse() {
        Ok(cli) => cli,
        // Argument errors exit with 1 like every other failure
        Err(err) if err.use_stderr() => {
            eprintln!("git-path-from-url: {}", cli::usage_message(&err));
            return ExitCode::FAILURE;
        }
        // --help and --version
        Err(err) => err.exit(),
    };

    match cli.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("git-path-from-url: {}", err);
            ExitCode::FAILURE
        }
    }
}
