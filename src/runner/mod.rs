//! Verification orchestration.
//!
//! - [`probe`] - Runs checks in order, containing errors and panics
//! - [`summary`] - Header and pass/fail summary output

pub mod probe;
pub mod summary;

pub use probe::{run, run_checks, RunResult};
pub use summary::{print_header, print_summary};
