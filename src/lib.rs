//! tddcheck - verify a development environment is ready for test-driven development.
//!
//! tddcheck runs a fixed sequence of independent checks (interpreter and
//! packages, project imports, JavaScript tooling, datastores, code quality
//! tools, test discovery), prints a colored status line for everything it
//! finds, and exits 0 only if every check passed.
//!
//! # Modules
//!
//! - [`checks`] - The individual checks and the [`checks::Check`] trait
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Settings loading
//! - [`error`] - Error types and result aliases
//! - [`host`] - Capability queries against the machine being verified
//! - [`runner`] - Ordered execution, failure containment and summary
//! - [`shell`] - External command execution
//! - [`ui`] - Status output
//!
//! # Example
//!
//! ```
//! use std::path::Path;
//! use tddcheck::checks::{default_checks, CheckContext};
//! use tddcheck::config::Settings;
//! use tddcheck::host::FakeHost;
//! use tddcheck::runner;
//! use tddcheck::ui::MockUI;
//!
//! let settings = Settings::default();
//! let host = FakeHost::healthy(&settings);
//! let ctx = CheckContext::new(&host, &settings, Path::new("/work/sentry"));
//! let mut ui = MockUI::new();
//!
//! let exit_code = runner::run(&default_checks(), &ctx, &mut ui);
//! assert_eq!(exit_code, 0);
//! assert!(ui.has_success("TDD SETUP VERIFICATION PASSED"));
//! ```

pub mod checks;
pub mod cli;
pub mod config;
pub mod error;
pub mod host;
pub mod runner;
pub mod shell;
pub mod ui;

pub use error::{Result, TddCheckError};
