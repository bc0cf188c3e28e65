//! pre-commit and ESLint check.

use super::{Check, CheckContext};
use crate::error::Result;
use crate::ui::UserInterface;

/// pre-commit is required; a broken lint script only warns.
#[derive(Debug, Clone, Copy, Default)]
pub struct CodeQualityCheck;

impl Check for CodeQualityCheck {
    fn name(&self) -> &'static str {
        "code_quality_tools"
    }

    fn title(&self) -> &'static str {
        "Testing code quality tools..."
    }

    fn failure_label(&self) -> &'static str {
        "Code quality tools test"
    }

    fn run(&self, ctx: &CheckContext<'_>, ui: &mut dyn UserInterface) -> Result<bool> {
        let settings = ctx.settings;

        match ctx.host.run(&settings.pre_commit, &["--version"], None) {
            Ok(result) if result.success => {
                ui.success(&format!("✅ pre-commit {}", result.stdout_trimmed()));
            }
            Ok(_) | Err(_) => {
                ui.error("❌ pre-commit not found");
                return Ok(false);
            }
        }

        let lint = ctx.host.run(
            &settings.package_manager,
            &["run", "lint:js", "--help"],
            Some(ctx.project_root),
        )?;
        if lint.success {
            ui.success("✅ ESLint configured");
        } else {
            ui.warning("⚠️  ESLint configuration issue");
        }

        Ok(true)
    }
}
