//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures every status
//! line for later assertion.
//!
//! # Example
//!
//! ```
//! use tddcheck::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.success("✅ Redis connection");
//! ui.error("❌ PostgreSQL connection failed: refused");
//!
//! assert!(ui.has_success("Redis"));
//! assert!(ui.has_error("PostgreSQL"));
//! assert_eq!(ui.errors().len(), 1);
//! ```

use super::{Severity, StatusMessage, UserInterface};

/// Records status output instead of printing it.
#[derive(Debug, Default)]
pub struct MockUI {
    messages: Vec<StatusMessage>,
}

impl MockUI {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every captured line, in order.
    pub fn messages(&self) -> &[StatusMessage] {
        &self.messages
    }

    /// Captured line texts, in order.
    pub fn lines(&self) -> Vec<&str> {
        self.messages.iter().map(|m| m.text.as_str()).collect()
    }

    fn texts(&self, severity: Severity) -> Vec<&str> {
        self.messages
            .iter()
            .filter(|m| m.severity == severity)
            .map(|m| m.text.as_str())
            .collect()
    }

    pub fn infos(&self) -> Vec<&str> {
        self.texts(Severity::Info)
    }

    pub fn successes(&self) -> Vec<&str> {
        self.texts(Severity::Success)
    }

    pub fn warnings(&self) -> Vec<&str> {
        self.texts(Severity::Warning)
    }

    pub fn errors(&self) -> Vec<&str> {
        self.texts(Severity::Error)
    }

    fn has(&self, severity: Severity, needle: &str) -> bool {
        self.messages
            .iter()
            .any(|m| m.severity == severity && m.text.contains(needle))
    }

    /// Check if an info line containing `needle` was shown.
    pub fn has_info(&self, needle: &str) -> bool {
        self.has(Severity::Info, needle)
    }

    /// Check if a success line containing `needle` was shown.
    pub fn has_success(&self, needle: &str) -> bool {
        self.has(Severity::Success, needle)
    }

    /// Check if a warning line containing `needle` was shown.
    pub fn has_warning(&self, needle: &str) -> bool {
        self.has(Severity::Warning, needle)
    }

    /// Check if an error line containing `needle` was shown.
    pub fn has_error(&self, needle: &str) -> bool {
        self.has(Severity::Error, needle)
    }
}

impl UserInterface for MockUI {
    fn status(&mut self, message: StatusMessage) {
        self.messages.push(message);
    }
}
