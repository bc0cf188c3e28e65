//! Python interpreter, virtualenv and core package check.

use super::{Check, CheckContext};
use crate::error::Result;
use crate::host::{ImportOutcome, PythonImport};
use crate::ui::UserInterface;

const DJANGO: PythonImport = PythonImport::versioned("django", "get_version()");
const PYTEST: PythonImport = PythonImport::versioned("pytest", "__version__");

/// Interpreter version and isolation are advisory; Django and pytest are required.
#[derive(Debug, Clone, Copy, Default)]
pub struct PythonEnvironmentCheck;

impl Check for PythonEnvironmentCheck {
    fn name(&self) -> &'static str {
        "python_environment"
    }

    fn title(&self) -> &'static str {
        "Testing Python environment..."
    }

    fn failure_label(&self) -> &'static str {
        "Python environment test"
    }

    fn run(&self, ctx: &CheckContext<'_>, ui: &mut dyn UserInterface) -> Result<bool> {
        let info = ctx.host.runtime_info()?;

        if info.is_recommended() {
            ui.success(&format!("✅ Python {}", info.version()));
        } else {
            ui.warning(&format!(
                "⚠️  Python {} (3.11+ recommended)",
                info.version()
            ));
        }

        if info.isolated {
            ui.success("✅ Virtual environment active");
        } else {
            ui.warning("⚠️  No virtual environment detected");
        }

        for (label, import) in [("Django", DJANGO), ("pytest", PYTEST)] {
            match ctx.host.import(&import)? {
                ImportOutcome::Imported { version } => {
                    let version = version.unwrap_or_else(|| "(unknown version)".to_string());
                    ui.success(&format!("✅ {} {}", label, version));
                }
                ImportOutcome::Failed { kind, reason } => {
                    tracing::debug!("{} import failed: {}: {}", label, kind, reason);
                    ui.error(&format!("❌ {} not installed", label));
                    return Ok(false);
                }
            }
        }

        Ok(true)
    }
}
