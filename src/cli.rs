//! CLI argument parsing and command execution

use anyhow::{anyhow, Result};
use clap::Parser;

use git_path_from_url::convert;
use git_path_from_url::error::Error;
use git_path_from_url::repository::GitCli;

/// Convert a GitHub URL to a local path (base: current git repo root)
#[derive(Parser, Debug)]
#[command(name = "git-path-from-url")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// GitHub URL to convert, e.g. https://github.com/owner/repo/blob/main/src/lib.rs
    #[arg(value_name = "URL")]
    url: Option<String>,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(
        long,
        value_name = "LEVEL",
        default_value = "warn",
        env = "GIT_PATH_FROM_URL_LOG"
    )]
    log_level: String,
}

impl Cli {
    /// Execute the conversion and print the resulting path
    pub fn execute(self) -> Result<()> {
        init_logging(&self.log_level);

        let url = self.url.ok_or(Error::Usage)?;
        let cwd = std::env::current_dir()
            .map_err(|e| anyhow!("failed to read the current directory: {}", e))?;

        let path = convert(&url, &cwd, &GitCli)?;
        println!("{}", path.display());
        Ok(())
    }
}

/// One-line usage error for arguments clap rejected.
///
/// Keeps only the first line of clap's report, which names the offending
/// argument, and drops the usage block and help hint that follow it.
pub fn usage_message(err: &clap::Error) -> String {
    let rendered = err.to_string();
    let detail = rendered
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(|line| line.trim_start_matches("error:").trim())
        .unwrap_or_default();

    if detail.is_empty() {
        Error::Usage.to_string()
    } else {
        format!("{} ({})", Error::Usage, detail)
    }
}

/// Route `log` output to stderr so stdout only ever carries the path.
fn init_logging(level: &str) {
    // A second init (e.g. from tests) is harmless
    let _ = env_logger::Builder::new()
        .parse_filters(level)
        .format_timestamp(None)
        .target(env_logger::Target::Stderr)
        .try_init();
}
