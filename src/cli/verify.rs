//! The verification command.

use std::path::PathBuf;

use crate::checks::{default_checks, CheckContext};
use crate::config::load_settings;
use crate::error::Result;
use crate::host::SystemHost;
use crate::runner;
use crate::ui::UserInterface;

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a result from a process exit code.
    pub fn from_exit_code(exit_code: i32) -> Self {
        Self {
            success: exit_code == 0,
            exit_code,
        }
    }
}

/// Loads settings and runs the default suite against the real machine.
pub struct VerifyCommand {
    project_root: PathBuf,
    config: Option<PathBuf>,
}

impl VerifyCommand {
    /// Create a verify command for the given project root.
    pub fn new(project_root: PathBuf, config: Option<PathBuf>) -> Self {
        Self {
            project_root,
            config,
        }
    }

    /// Execute the command.
    ///
    /// Only settings errors are returned; check failures are reported through
    /// `ui` and reflected in the exit code.
    pub fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let settings = load_settings(&self.project_root, self.config.as_deref())?;
        tracing::debug!("Settings: {:?}", settings);

        let host = SystemHost::new(&self.project_root, &settings.python);
        let ctx = CheckContext::new(&host, &settings, &self.project_root);
        let checks = default_checks();

        let exit_code = runner::run(&checks, &ctx, ui);
        Ok(CommandResult::from_exit_code(exit_code))
    }
}
