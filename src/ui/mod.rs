//! Status output.
//!
//! This module provides:
//! - [`Severity`] and [`StatusMessage`], the unit of everything printed
//! - [`UserInterface`] trait so checks can be exercised without a terminal
//! - [`TerminalUI`] for real runs and [`MockUI`] for tests
//!
//! # Example
//!
//! ```
//! use tddcheck::ui::{MockUI, Severity, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.info("Testing Python environment...");
//! ui.warning("⚠️  No virtual environment detected");
//!
//! assert!(ui.has_warning("virtual environment"));
//! assert_eq!(ui.messages()[0].severity, Severity::Info);
//! ```

pub mod mock;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, TddTheme};

use std::fmt;

/// How a status line should be styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

impl Severity {
    /// Upper-case label, as used in logs.
    pub fn label(self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Success => "SUCCESS",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single line of status output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub severity: Severity,
}

impl StatusMessage {
    pub fn new(text: impl Into<String>, severity: Severity) -> Self {
        Self {
            text: text.into(),
            severity,
        }
    }
}

/// Sink for status output.
///
/// Implementors only need [`UserInterface::status`]; the severity helpers
/// forward to it.
pub trait UserInterface {
    /// Emit one status line.
    fn status(&mut self, message: StatusMessage);

    /// Emit an informational line.
    fn info(&mut self, msg: &str) {
        self.status(StatusMessage::new(msg, Severity::Info));
    }

    /// Emit a success line.
    fn success(&mut self, msg: &str) {
        self.status(StatusMessage::new(msg, Severity::Success));
    }

    /// Emit a warning line.
    fn warning(&mut self, msg: &str) {
        self.status(StatusMessage::new(msg, Severity::Warning));
    }

    /// Emit an error line.
    fn error(&mut self, msg: &str) {
        self.status(StatusMessage::new(msg, Severity::Error));
    }

    /// Emit an empty line for spacing.
    fn blank(&mut self) {
        self.info("");
    }
}
