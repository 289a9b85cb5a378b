use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Tools for working with the Fantasy Premier League API.
///
/// Responses are cached in the user's cache directory; pass -r to fetch them again.
#[derive(Parser, Debug)]
#[command(name = "prem", version)]
pub struct Cli {
    /// Refresh the cache before reading it
    #[arg(short, long, global = true)]
    pub refresh: bool,

    /// Directory holding the cached API responses
    #[arg(long, global = true, env = "PREM_CACHE_DIR", value_name = "DIR")]
    pub cache_dir: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Print the next 5 fixtures for each team with their difficulty
    Next,
    /// Print the gameweeks in which some teams have no fixture
    Blanks,
    /// Print the gameweeks where one or more teams play twice, and the fixtures
    Doubles,
}
