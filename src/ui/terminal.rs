//! Terminal status output.

use console::Term;
use std::io::Write;

use super::{should_use_colors, StatusMessage, TddTheme, UserInterface};

/// Writes styled status lines to stdout.
pub struct TerminalUI {
    term: Term,
    theme: TddTheme,
}

impl TerminalUI {
    /// Create a terminal UI, picking colors from the environment.
    pub fn new() -> Self {
        let theme = if should_use_colors() {
            TddTheme::new()
        } else {
            TddTheme::plain()
        };
        Self::with_theme(theme)
    }

    /// Create a terminal UI with an explicit theme.
    pub fn with_theme(theme: TddTheme) -> Self {
        Self {
            term: Term::stdout(),
            theme,
        }
    }
}

impl Default for TerminalUI {
    fn default() -> Self {
        Self::new()
    }
}

impl UserInterface for TerminalUI {
    fn status(&mut self, message: StatusMessage) {
        tracing::trace!("[{}] {}", message.severity, message.text);
        writeln!(
            self.term,
            "{}",
            self.theme.format(&message.text, message.severity)
        )
        .ok();
    }
}
