//! pytest and Jest test discovery check.

use super::{Check, CheckContext};
use crate::error::Result;
use crate::ui::UserInterface;

/// Asks both test runners to list tests without running them.
///
/// Discovery problems only warn. A runner that cannot be started at all is
/// an error for the caller to contain.
#[derive(Debug, Clone, Copy, Default)]
pub struct TestDiscoveryCheck;

impl Check for TestDiscoveryCheck {
    fn name(&self) -> &'static str {
        "test_discovery"
    }

    fn title(&self) -> &'static str {
        "Testing TDD commands..."
    }

    fn failure_label(&self) -> &'static str {
        "TDD commands test"
    }

    fn run(&self, ctx: &CheckContext<'_>, ui: &mut dyn UserInterface) -> Result<bool> {
        let settings = ctx.settings;

        let pytest = ctx.host.run(
            &settings.python,
            &["-m", "pytest", "--collect-only", "-q"],
            Some(ctx.project_root),
        )?;
        if pytest.success {
            ui.success("✅ pytest test discovery");
        } else {
            ui.warning("⚠️  pytest test discovery issues");
        }

        let jest = ctx.host.run(
            &settings.package_manager,
            &["test", "--listTests"],
            Some(ctx.project_root),
        )?;
        if jest.success {
            ui.success("✅ Jest test discovery");
        } else {
            ui.warning("⚠️  Jest test discovery issues");
        }

        Ok(true)
    }
}
