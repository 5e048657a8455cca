//! Session state for evaluating literal input
//!
//! A Session holds the output options chosen on the command line (or
//! changed in the REPL) and turns source text into a [`Report`].

use std::fs;

use crate::cli::Mode;
use crate::error::CliResult;
use crate::literal::parse_sequence;
use crate::report::Report;

/// Evaluates JSON literal sequences and renders the results
#[derive(Debug, Clone)]
pub struct Session {
    /// Results to produce
    mode: Mode,
    /// Whether to render as JSON instead of text
    json: bool,
}

impl Session {
    /// Create a new session
    ///
    /// # Example
    /// ```
    /// use type_cli::{Mode, Session};
    ///
    /// let session = Session::new(Mode::Count);
    /// let report = session.evaluate_str("[true, null, true]").unwrap();
    /// assert_eq!(session.render(&report).unwrap(), "count:\nboolean\t2\nnull\t1");
    /// ```
    pub fn new(mode: Mode) -> Self {
        Self { mode, json: false }
    }

    /// Enable JSON output
    pub fn with_json(mut self, enabled: bool) -> Self {
        self.json = enabled;
        self
    }

    /// Current mode
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Change the mode
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    /// Whether output is rendered as JSON
    pub fn is_json(&self) -> bool {
        self.json
    }

    /// Flip between text and JSON output, returning the new setting
    pub fn toggle_json(&mut self) -> bool {
        self.json = !self.json;
        self.json
    }

    /// Evaluate a JSON array given as text
    ///
    /// # Errors
    /// Returns `CliError` if the text is not a valid literal sequence
    pub fn evaluate_str(&self, source: &str) -> CliResult<Report> {
        let values = parse_sequence(source)?;
        tracing::info!(values = values.len(), mode = ?self.mode, "evaluating sequence");
        Ok(Report::build(&values, self.mode))
    }

    /// Evaluate the JSON array stored in a file
    ///
    /// # Errors
    /// Returns `CliError` if the file cannot be read or holds invalid input
    pub fn evaluate_file(&self, path: &str) -> CliResult<Report> {
        tracing::debug!(path, "reading input file");
        let source = fs::read_to_string(path)?;
        self.evaluate_str(&source)
    }

    /// Render a report in the session's output format
    pub fn render(&self, report: &Report) -> CliResult<String> {
        if self.json {
            report.to_json()
        } else {
            Ok(report.to_string())
        }
    }

    /// Start an interactive REPL session
    ///
    /// # Errors
    /// Returns `CliError::Repl` if the line editor fails
    pub fn repl(&mut self) -> CliResult<()> {
        crate::repl::run_repl(self)
    }
}
