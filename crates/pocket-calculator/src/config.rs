//! Command-line arguments and application configuration

use std::path::PathBuf;

use clap::Parser;
use serde::{Deserialize, Serialize};

/// Default log file name, created in the system temp directory
pub const LOG_FILE_NAME: &str = "pocket-calculator.log";

/// Pocket calculator for the terminal
#[derive(Parser, Debug)]
#[command(name = "pocket-calculator")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level for the log file (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log file path [default: <temp dir>/pocket-calculator.log]
    #[arg(long, value_name = "PATH", env = "POCKET_CALCULATOR_LOG")]
    pub log_file: Option<PathBuf>,

    /// Write log lines as JSON
    #[arg(long)]
    pub log_json: bool,

    /// Do not capture the mouse (keypad clicks are ignored)
    #[arg(long)]
    pub no_mouse: bool,

    /// Hide the keyboard shortcut sidebar
    #[arg(long)]
    pub no_help: bool,
}

/// Log verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Verbosity {
    /// Errors only
    Quiet,
    /// Lifecycle events
    #[default]
    Normal,
    /// Every calculator transition
    Verbose,
    /// Everything
    Debug,
}

impl Verbosity {
    /// Maps `-q` and the `-v` count to a level
    #[must_use]
    pub const fn from_flags(quiet: bool, verbose: u8) -> Self {
        if quiet {
            return Self::Quiet;
        }
        match verbose {
            0 => Self::Normal,
            1 => Self::Verbose,
            _ => Self::Debug,
        }
    }

    /// The `tracing` level name for this verbosity
    #[must_use]
    pub const fn level(self) -> &'static str {
        match self {
            Self::Quiet => "error",
            Self::Normal => "info",
            Self::Verbose => "debug",
            Self::Debug => "trace",
        }
    }

    /// `EnvFilter` directive scoped to this crate
    #[must_use]
    pub fn filter_directive(self) -> String {
        format!("{}={}", env!("CARGO_CRATE_NAME"), self.level())
    }
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Log verbosity
    pub verbosity: Verbosity,
    /// Where log lines go; the terminal belongs to the UI
    pub log_file: PathBuf,
    /// Emit JSON log lines instead of text
    pub log_json: bool,
    /// Capture the mouse for keypad clicks
    pub mouse: bool,
    /// Draw the help sidebar
    pub show_help: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            verbosity: Verbosity::Normal,
            log_file: std::env::temp_dir().join(LOG_FILE_NAME),
            log_json: false,
            mouse: true,
            show_help: true,
        }
    }
}

impl AppConfig {
    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set verbosity
    #[must_use]
    pub const fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Set the log file path
    #[must_use]
    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = path.into();
        self
    }

    /// Set JSON log output
    #[must_use]
    pub const fn with_log_json(mut self, log_json: bool) -> Self {
        self.log_json = log_json;
        self
    }

    /// Set mouse capture
    #[must_use]
    pub const fn with_mouse(mut self, mouse: bool) -> Self {
        self.mouse = mouse;
        self
    }

    /// Set help sidebar visibility
    #[must_use]
    pub const fn with_help(mut self, show_help: bool) -> Self {
        self.show_help = show_help;
        self
    }
}

impl From<&Cli> for AppConfig {
    fn from(cli: &Cli) -> Self {
        let config = Self::new()
            .with_verbosity(Verbosity::from_flags(cli.quiet, cli.verbose))
            .with_log_json(cli.log_json)
            .with_mouse(!cli.no_mouse)
            .with_help(!cli.no_help);
        match &cli.log_file {
            Some(path) => config.with_log_file(path),
            None => config,
        }
    }
}
