//! Command-line interface for tddcheck.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`verify`] - The verification command

pub mod args;
pub mod verify;

pub use args::Cli;
pub use verify::{CommandResult, VerifyCommand};
