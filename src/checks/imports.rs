//! Project module import check.

use super::{Check, CheckContext};
use crate::error::Result;
use crate::host::{ImportOutcome, PythonImport};
use crate::ui::UserInterface;

/// Imports that must succeed with `src/` on the module path, in order.
pub const PROJECT_IMPORTS: [(PythonImport, &str); 3] = [
    (PythonImport::module("sentry.utils.assets"), ""),
    (PythonImport::module("sentry.utils.auth"), ""),
    (
        PythonImport::from("fido2.ctap2", "AuthenticatorData"),
        " (compatibility fixed)",
    ),
];

/// Imports the project's own modules and the patched `fido2` path.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProjectImportsCheck;

impl Check for ProjectImportsCheck {
    fn name(&self) -> &'static str {
        "project_imports"
    }

    fn title(&self) -> &'static str {
        "Testing Sentry imports..."
    }

    fn failure_label(&self) -> &'static str {
        "Sentry import test"
    }

    fn run(&self, ctx: &CheckContext<'_>, ui: &mut dyn UserInterface) -> Result<bool> {
        for (import, note) in &PROJECT_IMPORTS {
            let outcome = ctx.host.import(import)?;
            match &outcome {
                ImportOutcome::Imported { .. } => {
                    ui.success(&format!("✅ {}{}", import.display_name(), note));
                }
                ImportOutcome::Failed { reason, .. } if outcome.is_import_error() => {
                    ui.error(&format!("❌ Sentry import failed: {}", reason));
                    ui.info("💡 Ensure PYTHONPATH includes src/ directory");
                    return Ok(false);
                }
                ImportOutcome::Failed { kind, reason } => {
                    ui.error(&format!("❌ Sentry import test failed: {}: {}", kind, reason));
                    return Ok(false);
                }
            }
        }

        Ok(true)
    }
}
