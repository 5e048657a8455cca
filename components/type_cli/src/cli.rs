//! Command-line argument parsing

use clap::{ArgAction, Parser, ValueEnum};

/// Which classification results to produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// `typeof` tag of every value
    Coarse,
    /// Refined type of every value
    Real,
    /// Whether all values share a `typeof` tag
    Same,
    /// Whether every value has a distinct refined type
    Unique,
    /// Refined types with their counts
    Count,
    /// Everything above
    All,
}

impl Mode {
    /// Returns true when results for `part` should be produced in this mode.
    pub fn includes(self, part: Mode) -> bool {
        self == Mode::All || self == part
    }

    /// Parses a mode name, ignoring case.
    pub fn parse(name: &str) -> Option<Mode> {
        <Mode as ValueEnum>::from_str(name, true).ok()
    }
}

/// Classify JavaScript values given as JSON literals
#[derive(Parser, Debug, Clone)]
#[command(name = "typeof-cli", version)]
pub struct Cli {
    /// JSON file holding an array of values
    #[arg(short, long, conflicts_with_all = ["eval", "repl"])]
    pub file: Option<String>,

    /// Inline JSON array of values
    #[arg(short, long, conflicts_with = "repl")]
    pub eval: Option<String>,

    /// Start the interactive REPL
    #[arg(short, long)]
    pub repl: bool,

    /// Results to print
    #[arg(short, long, value_enum, default_value_t = Mode::All)]
    pub mode: Mode,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Arguments for classifying the values in `file` with default options
    pub fn with_file(file: String) -> Self {
        Self {
            file: Some(file),
            eval: None,
            repl: false,
            mode: Mode::All,
            json: false,
            verbose: 0,
        }
    }

    /// Arguments for classifying an inline JSON array with default options
    pub fn with_eval(source: String) -> Self {
        Self {
            file: None,
            eval: Some(source),
            repl: false,
            mode: Mode::All,
            json: false,
            verbose: 0,
        }
    }

    /// Default log filter for the requested verbosity
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
