//! Runs the checks in order and contains their failures.

use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};

use super::summary::{print_header, print_summary};
use crate::checks::{Check, CheckContext};
use crate::error::{Result, TddCheckError};
use crate::ui::UserInterface;

/// Outcome of every check, in the order the checks ran.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunResult {
    results: Vec<bool>,
}

impl RunResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, passed: bool) {
        self.results.push(passed);
    }

    pub fn results(&self) -> &[bool] {
        &self.results
    }

    /// True when no check failed (including when none ran).
    pub fn all_passed(&self) -> bool {
        self.results.iter().all(|passed| *passed)
    }

    /// 0 when every check passed, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        if self.all_passed() {
            0
        } else {
            1
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

/// Run one check, turning a returned error or a panic into `Err`.
fn run_isolated(
    check: &dyn Check,
    ctx: &CheckContext<'_>,
    ui: &mut dyn UserInterface,
) -> Result<bool> {
    match catch_unwind(AssertUnwindSafe(|| check.run(ctx, ui))) {
        Ok(result) => result,
        Err(payload) => Err(TddCheckError::CheckPanicked {
            message: panic_message(payload.as_ref()),
        }),
    }
}

/// Run every check in order, never stopping early.
///
/// Each check is introduced by its title and followed by a blank line. A
/// check that errors or panics is reported and recorded as failed.
pub fn run_checks(
    checks: &[Box<dyn Check>],
    ctx: &CheckContext<'_>,
    ui: &mut dyn UserInterface,
) -> RunResult {
    let mut run = RunResult::new();

    for check in checks {
        tracing::debug!("Running check '{}'", check.name());
        ui.info(check.title());

        let passed = match run_isolated(check.as_ref(), ctx, ui) {
            Ok(passed) => passed,
            Err(e) => {
                tracing::warn!("Check '{}' failed unexpectedly: {}", check.name(), e);
                ui.error(&format!("❌ {} failed: {}", check.failure_label(), e));
                false
            }
        };

        tracing::debug!("Check '{}' passed: {}", check.name(), passed);
        run.push(passed);
        ui.blank();
    }

    run
}

/// Full verification: header, checks, summary. Returns the process exit code.
pub fn run(
    checks: &[Box<dyn Check>],
    ctx: &CheckContext<'_>,
    ui: &mut dyn UserInterface,
) -> i32 {
    print_header(ui, &ctx.settings.project_name);
    let result = run_checks(checks, ctx, ui);
    print_summary(ui, result.all_passed());
    result.exit_code()
}
