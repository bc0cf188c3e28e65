//! The verification checks.
//!
//! Each check probes one area of the environment through a [`Host`],
//! reports what it finds to a [`UserInterface`], and returns whether the
//! area is usable. Expected problems (a missing tool, a stopped service) are
//! reported and yield `Ok(false)`; soft concerns are reported as warnings
//! and do not fail the check. Anything else is returned as an error for the
//! runner to contain.
//!
//! # Modules
//!
//! - [`python`] - Interpreter version, virtualenv and core packages
//! - [`imports`] - Project module imports
//! - [`javascript`] - Node.js and pnpm
//! - [`databases`] - Redis and PostgreSQL connectivity
//! - [`quality`] - pre-commit and ESLint
//! - [`discovery`] - pytest and Jest test discovery

pub mod databases;
pub mod discovery;
pub mod imports;
pub mod javascript;
pub mod python;
pub mod quality;

pub use databases::DatabaseCheck;
pub use discovery::TestDiscoveryCheck;
pub use imports::ProjectImportsCheck;
pub use javascript::JavaScriptCheck;
pub use python::PythonEnvironmentCheck;
pub use quality::CodeQualityCheck;

use std::path::Path;

use crate::config::Settings;
use crate::error::Result;
use crate::host::Host;
use crate::ui::UserInterface;

/// What a check may consult while it runs.
#[derive(Clone, Copy)]
pub struct CheckContext<'a> {
    pub host: &'a dyn Host,
    pub settings: &'a Settings,
    pub project_root: &'a Path,
}

impl<'a> CheckContext<'a> {
    pub fn new(host: &'a dyn Host, settings: &'a Settings, project_root: &'a Path) -> Self {
        Self {
            host,
            settings,
            project_root,
        }
    }
}

/// One independent probe-and-report step.
pub trait Check {
    /// Stable identifier, used in logs.
    fn name(&self) -> &'static str;

    /// Line printed before the check runs, e.g. "Testing Python environment...".
    fn title(&self) -> &'static str;

    /// Subject used when the check fails unexpectedly, e.g. "Python environment test".
    fn failure_label(&self) -> &'static str;

    /// Probe, report, and return whether the area passed.
    fn run(&self, ctx: &CheckContext<'_>, ui: &mut dyn UserInterface) -> Result<bool>;
}

/// The standard suite, in reporting order.
pub fn default_checks() -> Vec<Box<dyn Check>> {
    vec![
        Box::new(PythonEnvironmentCheck),
        Box::new(ProjectImportsCheck),
        Box::new(JavaScriptCheck),
        Box::new(DatabaseCheck),
        Box::new(CodeQualityCheck),
        Box::new(TestDiscoveryCheck),
    ]
}
