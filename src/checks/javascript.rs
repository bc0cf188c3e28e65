//! Node.js and pnpm check.

use super::{Check, CheckContext};
use crate::error::Result;
use crate::ui::UserInterface;

/// Node.js and pnpm must answer `--version`; installed dependencies are advisory.
#[derive(Debug, Clone, Copy, Default)]
pub struct JavaScriptCheck;

impl JavaScriptCheck {
    /// Version string of `program`, or `None` if it is missing or fails.
    fn version_of(ctx: &CheckContext<'_>, program: &str) -> Option<String> {
        match ctx.host.run(program, &["--version"], None) {
            Ok(result) if result.success => Some(result.stdout_trimmed().to_string()),
            Ok(result) => {
                tracing::debug!("{} --version exited with {:?}", program, result.exit_code);
                None
            }
            Err(e) => {
                tracing::debug!("{}", e);
                None
            }
        }
    }
}

impl Check for JavaScriptCheck {
    fn name(&self) -> &'static str {
        "javascript_environment"
    }

    fn title(&self) -> &'static str {
        "Testing JavaScript environment..."
    }

    fn failure_label(&self) -> &'static str {
        "JavaScript environment test"
    }

    fn run(&self, ctx: &CheckContext<'_>, ui: &mut dyn UserInterface) -> Result<bool> {
        let settings = ctx.settings;

        match Self::version_of(ctx, &settings.node) {
            Some(version) => ui.success(&format!("✅ Node.js {}", version)),
            None => {
                ui.error("❌ Node.js not found");
                return Ok(false);
            }
        }

        match Self::version_of(ctx, &settings.package_manager) {
            Some(version) => ui.success(&format!("✅ {} {}", settings.package_manager, version)),
            None => {
                ui.error(&format!("❌ {} not found", settings.package_manager));
                return Ok(false);
            }
        }

        let cache = ctx.project_root.join(&settings.dependency_cache);
        if ctx.host.path_exists(&cache) {
            ui.success("✅ Node.js dependencies installed");
        } else {
            ui.warning("⚠️  Node.js dependencies not found");
            ui.info(&format!("💡 Run: {} install", settings.package_manager));
        }

        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::host::fake::exit;
    use crate::host::FakeHost;
    use crate::ui::MockUI;
    use std::path::Path;

    fn run(host: &FakeHost) -> (bool, MockUI) {
        let settings = Settings::default();
        let ctx = CheckContext::new(host, &settings, Path::new("/project"));
        let mut ui = MockUI::new();
        let passed = JavaScriptCheck.run(&ctx, &mut ui).unwrap();
        (passed, ui)
    }

    #[test]
    fn reports_versions() {
        let host = FakeHost::healthy(&Settings::default());
        let (passed, ui) = run(&host);

        assert!(passed);
        assert!(ui.has_success("Node.js v20.11.1"));
        assert!(ui.has_success("pnpm 8.15.4"));
        assert!(ui.has_success("Node.js dependencies installed"));
    }

    #[test]
    fn missing_node_fails() {
        let host = FakeHost::healthy(&Settings::default()).without_command("node", &["--version"]);
        let (passed, ui) = run(&host);

        assert!(!passed);
        assert!(ui.has_error("Node.js not found"));
        assert!(!host.calls().contains(&"run pnpm --version".to_string()));
    }

    #[test]
    fn failing_pnpm_fails() {
        let host = FakeHost::healthy(&Settings::default()).with_command(
            "pnpm",
            &["--version"],
            exit(1, "ERR_PNPM_BAD"),
        );
        let (passed, ui) = run(&host);

        assert!(!passed);
        assert!(ui.has_success("Node.js"));
        assert!(ui.has_error("pnpm not found"));
    }

    #[test]
    fn missing_dependencies_only_warn() {
        let host = FakeHost::healthy(&Settings::default()).without_paths();
        let (passed, ui) = run(&host);

        assert!(passed);
        assert!(ui.has_warning("Node.js dependencies not found"));
        assert!(ui.has_info("Run: pnpm install"));
    }

    #[test]
    fn dependency_cache_is_resolved_against_project_root() {
        let host = FakeHost::healthy(&Settings::default())
            .without_paths()
            .with_path("/project/node_modules");
        let (passed, ui) = run(&host);

        assert!(passed);
        assert!(ui.warnings().is_empty());
    }
}
