//! CLI - Command Line Interface for FlickTUI
//!
//! Every catalog lookup is scriptable. All output is JSON-parseable.
//!
//! # Examples
//!
//! ```bash
//! # Home page sections
//! flicktui page --window week --json
//!
//! # Search the catalog
//! flicktui search "dune" --json
//!
//! # Title detail with servers
//! flicktui info 550
//!
//! # Resolve a trailer link to its video id
//! flicktui resolve "https://youtu.be/dQw4w9WgXcQ"
//! ```

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::io::IsTerminal;
use std::path::PathBuf;

use crate::models::TimeWindow;

// =============================================================================
// Exit Codes
// =============================================================================

/// Exit codes for CLI operations (semantic for scripting)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success
    Success = 0,
    /// General error
    Error = 1,
    /// Invalid arguments
    InvalidArgs = 2,
    /// Network error
    NetworkError = 3,
    /// Content not found
    NotFound = 4,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> std::process::ExitCode {
        std::process::ExitCode::from(code as u8)
    }
}

// =============================================================================
// Main CLI Structure
// =============================================================================

/// FlickTUI - terminal front-end for a movie catalog
///
/// Run without arguments to launch the interactive TUI.
/// Use subcommands for scriptable automation.
#[derive(Parser, Debug)]
#[command(
    name = "flicktui",
    version,
    about = "Terminal front-end for browsing a movie catalog",
    long_about = "Browse trending movies, inspect titles, and pick a stream \
                  server from the terminal.\n\n\
                  Run without arguments to launch the interactive TUI.\n\
                  Use subcommands for automation and scripting.",
    after_help = "EXAMPLES:\n\
                  flicktui                          Launch interactive TUI\n\
                  flicktui page --window week       Home page sections\n\
                  flicktui search \"dune\"            Search the catalog\n\
                  flicktui info 550 --json          Title detail with servers"
)]
pub struct Cli {
    /// Output format as JSON (default for non-TTY)
    #[arg(long, short = 'j', global = true)]
    pub json: bool,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Path to config file
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run (omit for TUI mode)
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// Check if running in CLI mode (has subcommand)
    pub fn is_cli_mode(&self) -> bool {
        self.command.is_some()
    }

    /// Check if JSON output should be used
    pub fn should_json(&self) -> bool {
        self.json || !std::io::stdout().is_terminal()
    }
}

// =============================================================================
// Subcommands
// =============================================================================

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fetch the composed home page sections
    #[command(visible_alias = "p")]
    Page(PageCmd),

    /// Search the catalog
    #[command(visible_alias = "s")]
    Search(SearchCmd),

    /// Get a title's detail with its stream servers
    #[command(visible_alias = "i")]
    Info(InfoCmd),

    /// Resolve a YouTube trailer URL to its video id
    #[command(visible_alias = "r")]
    Resolve(ResolveCmd),
}

/// Fetch the home page: trending, in theaters, top rated, coming soon
#[derive(Args, Debug)]
pub struct PageCmd {
    /// Trending time window
    #[arg(long, short = 'w', value_enum, default_value = "day")]
    pub window: WindowArg,
}

/// Trending window argument
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindowArg {
    #[default]
    Day,
    Week,
}

impl From<WindowArg> for TimeWindow {
    fn from(arg: WindowArg) -> Self {
        match arg {
            WindowArg::Day => TimeWindow::Day,
            WindowArg::Week => TimeWindow::Week,
        }
    }
}

/// Search the catalog by free-text query
#[derive(Args, Debug)]
pub struct SearchCmd {
    /// Search query (title, keywords)
    #[arg(required = true)]
    pub query: String,

    /// Maximum number of results
    #[arg(long, short = 'l', default_value = "20")]
    pub limit: usize,
}

/// Get detailed information and stream servers for a title
#[derive(Args, Debug)]
pub struct InfoCmd {
    /// Catalog id of the title
    #[arg(required = true)]
    pub id: String,
}

/// Resolve a trailer URL to its 11-character YouTube video id
#[derive(Args, Debug)]
pub struct ResolveCmd {
    /// Trailer URL in any common YouTube shape
    #[arg(required = true)]
    pub url: String,

    /// Print the privacy-enhanced embed URL instead of the bare id
    #[arg(long, short = 'e')]
    pub embed: bool,
}

// =============================================================================
// Output Helpers
// =============================================================================

/// Generic JSON output wrapper with status
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonOutput<T: Serialize> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "is_zero")]
    pub exit_code: i32,
}

fn is_zero(n: &i32) -> bool {
    *n == 0
}

impl<T: Serialize> JsonOutput<T> {
    /// Create success output with data
    pub fn success(data: T) -> Self {
        Self {
            data: Some(data),
            error: None,
            exit_code: 0,
        }
    }

    /// Create error output (no data)
    pub fn error_msg(msg: impl Into<String>, code: ExitCode) -> JsonOutput<()> {
        JsonOutput::<()> {
            data: None,
            error: Some(msg.into()),
            exit_code: code.into(),
        }
    }
}

/// Output handler for consistent formatting
pub struct Output {
    pub json: bool,
    pub quiet: bool,
}

impl Output {
    pub fn new(cli: &Cli) -> Self {
        Self {
            json: cli.should_json(),
            quiet: cli.quiet,
        }
    }

    /// Print success data
    pub fn print<T: Serialize>(&self, data: T) -> anyhow::Result<()> {
        if self.json {
            let output = JsonOutput::success(data);
            println!("{}", serde_json::to_string_pretty(&output)?);
        } else {
            println!("{}", serde_json::to_string_pretty(&data)?);
        }
        Ok(())
    }

    /// Print a plain line (non-JSON mode only)
    pub fn line(&self, msg: impl std::fmt::Display) {
        if !self.json {
            println!("{}", msg);
        }
    }

    /// Print error and return exit code
    pub fn error(&self, msg: impl Into<String>, code: ExitCode) -> ExitCode {
        let msg = msg.into();
        if self.json {
            let output = JsonOutput::<()>::error_msg(&msg, code);
            if let Ok(json) = serde_json::to_string_pretty(&output) {
                eprintln!("{}", json);
            }
        } else if !self.quiet {
            eprintln!("Error: {}", msg);
        }
        code
    }

    /// Print info message (suppressed in quiet mode)
    pub fn info(&self, msg: impl std::fmt::Display) {
        if !self.quiet && !self.json {
            eprintln!("{}", msg);
        }
    }
}

// =============================================================================
// Content ID Validation
// =============================================================================

/// Validate a catalog content id (non-empty, digits only)
pub fn validate_content_id(id: &str) -> Result<&str, &'static str> {
    if !id.is_empty() && id.chars().all(|c| c.is_ascii_digit()) {
        Ok(id)
    } else {
        Err("Invalid content id (expected digits)")
    }
}

// =============================================================================
// Tests
// =============================================================================
