//! Header and closing summary.

use crate::ui::UserInterface;

/// Print the banner shown before any check runs.
pub fn print_header(ui: &mut dyn UserInterface, project_name: &str) {
    ui.info(&format!("🔍 {} TDD Setup Verification", project_name));
    ui.info(&"=".repeat(40));
}

/// Print next steps after all checks have run.
pub fn print_summary(ui: &mut dyn UserInterface, all_passed: bool) {
    ui.info(&format!("\n{}", "=".repeat(50)));

    if all_passed {
        ui.success("🎉 TDD SETUP VERIFICATION PASSED!");
        ui.success("\nYour environment is ready for test-driven development!");

        ui.info("\n📋 Quick Start Commands:");
        ui.info("  Python TDD:");
        ui.info("    source .venv/bin/activate && source .env.tdd");
        ui.info("    pytest tests/sentry/utils/test_assets.py -v");

        ui.info("\n  JavaScript TDD:");
        ui.info("    pnpm test --watch");

        ui.info("\n  Code Quality:");
        ui.info("    pre-commit run --files src/sentry/path/to/file.py");
        ui.info("    pnpm run lint:js");

        ui.info("\n📚 Documentation:");
        ui.info("    docs/TDD_SETUP.md - Complete TDD guide");
        ui.info("    CLAUDE.md - Development patterns");
    } else {
        ui.error("❌ TDD SETUP VERIFICATION FAILED");
        ui.error("\nSome components need attention. See errors above.");

        ui.info("\n💡 Common fixes:");
        ui.info("  1. Run: ./scripts/setup-tdd.sh");
        ui.info("  2. Ensure Docker services are running");
        ui.info("  3. Check that .venv is activated");
        ui.info("  4. Set PYTHONPATH: export PYTHONPATH=$PWD/src:$PYTHONPATH");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;

    #[test]
    fn header_names_project() {
        let mut ui = MockUI::new();
        print_header(&mut ui, "Sentry");
        let rule = "=".repeat(40);
        assert_eq!(
            ui.infos(),
            vec!["🔍 Sentry TDD Setup Verification", rule.as_str()]
        );
    }

    #[test]
    fn passing_summary_has_quick_start() {
        let mut ui = MockUI::new();
        print_summary(&mut ui, true);

        assert!(ui.has_success("TDD SETUP VERIFICATION PASSED"));
        assert!(ui.has_info("Quick Start Commands"));
        assert!(ui.has_info("Python TDD"));
        assert!(ui.has_info("JavaScript TDD"));
        assert!(ui.has_info("Code Quality"));
        assert!(ui.has_info("Documentation"));
        assert!(ui.errors().is_empty());
    }

    #[test]
    fn failing_summary_lists_fixes_in_order() {
        let mut ui = MockUI::new();
        print_summary(&mut ui, false);

        assert!(ui.has_error("TDD SETUP VERIFICATION FAILED"));
        let fixes: Vec<&str> = ui
            .infos()
            .into_iter()
            .filter(|l| l.trim_start().starts_with(char::is_numeric))
            .collect();
        assert_eq!(fixes.len(), 4);
        assert!(fixes[0].contains("setup-tdd.sh"));
        assert!(fixes[3].contains("PYTHONPATH"));
        assert!(!ui.has_info("Quick Start"));
    }
}
