use std::path::PathBuf;

use clap::{ArgAction, Parser};
use tracing::Level;

/// algebra evaluates integer arithmetic expressions one line at a time and
/// remembers variables assigned with `name = value`.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Text written before each input line is read. Ignored when reading a
    /// script.
    #[arg(long, default_value = "> ")]
    pub prompt: String,

    /// Input line that ends the session.
    #[arg(short, long, default_value = "q")]
    pub quit: String,

    /// Print the parsed expression tree before each result.
    #[arg(short = 't', long)]
    pub show_tree: bool,

    /// Raise log verbosity: `-v` info, `-vv` debug, `-vvv` trace.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Read input lines from this file instead of standard input.
    pub script: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::parse_from(["algebra"])
    }
}

impl Config {
    /// Maximum level of log events written to stderr.
    ///
    /// ## Example
    /// ```
    /// use algebra::config::Config;
    /// use clap::Parser;
    /// use tracing::Level;
    ///
    /// assert_eq!(Config::default().log_level(), Level::WARN);
    /// assert_eq!(Config::parse_from(["algebra", "-vv"]).log_level(), Level::DEBUG);
    /// ```
    #[must_use]
    pub const fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}
