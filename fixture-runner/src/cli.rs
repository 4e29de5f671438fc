use std::path::PathBuf;

use clap::Parser;

/// Check URL resolution, map composition and specifier lookups against
/// YAML fixtures.
#[derive(Parser, Debug, Clone)]
#[command(name = "fixture-runner", version)]
pub struct Cli {
    /// Fixture file or directory to walk
    #[arg(default_value = "fixtures")]
    pub path: PathBuf,

    /// Print every fixture with its issues
    #[arg(short, long)]
    pub verbose: bool,

    /// Break results down by check kind, issue class and dropped mapping
    #[arg(long)]
    pub analyze: bool,
}
