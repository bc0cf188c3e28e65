//! Visual theme and styling.

use console::Style;

use super::Severity;

/// Severity colors: blue info, green success, bold yellow warning, red error.
#[derive(Debug, Clone)]
pub struct TddTheme {
    pub info: Style,
    pub success: Style,
    pub warning: Style,
    pub error: Style,
}

impl Default for TddTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl TddTheme {
    /// Create the colored theme.
    pub fn new() -> Self {
        Self {
            info: Style::new().blue().force_styling(true),
            success: Style::new().green().force_styling(true),
            warning: Style::new().yellow().bold().force_styling(true),
            error: Style::new().red().force_styling(true),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            info: Style::new(),
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
        }
    }

    /// Style used for a severity.
    fn style(&self, severity: Severity) -> &Style {
        match severity {
            Severity::Info => &self.info,
            Severity::Success => &self.success,
            Severity::Warning => &self.warning,
            Severity::Error => &self.error,
        }
    }

    /// Render a status line.
    pub fn format(&self, text: &str, severity: Severity) -> String {
        if text.is_empty() {
            return String::new();
        }
        self.style(severity).apply_to(text).to_string()
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // https://no-color.org/
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    console::Term::stdout().is_term()
}
