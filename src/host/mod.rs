//! Capability queries against the machine being verified.
//!
//! Checks never touch processes, sockets or the filesystem directly; they
//! ask a [`Host`]. [`SystemHost`] answers for real, and [`FakeHost`] answers
//! from canned data so checks can be tested deterministically.

pub mod datastore;
pub mod fake;
pub mod python;
pub mod system;

pub use fake::FakeHost;
pub use python::{ImportOutcome, PythonImport, RuntimeInfo};
pub use system::SystemHost;

use crate::config::{PostgresSettings, RedisSettings};
use crate::error::Result;
use crate::shell::CommandResult;
use std::path::Path;
use std::time::Duration;

/// Everything a check may ask of the environment.
pub trait Host {
    /// Version and isolation state of the primary interpreter.
    fn runtime_info(&self) -> Result<RuntimeInfo>;

    /// Try an import in the primary interpreter.
    ///
    /// A failed import is `Ok(ImportOutcome::Failed { .. })`; `Err` means the
    /// interpreter itself could not be run.
    fn import(&self, import: &PythonImport) -> Result<ImportOutcome>;

    /// Run an external program, optionally in `cwd`.
    ///
    /// Non-zero exits are reported in the result. `Err` means the program
    /// could not be started.
    fn run(&self, program: &str, args: &[&str], cwd: Option<&Path>) -> Result<CommandResult>;

    /// Whether a path exists.
    fn path_exists(&self, path: &Path) -> bool;

    /// Connect to the key-value store and issue a `PING`.
    fn ping_redis(&self, redis: &RedisSettings, timeout: Option<Duration>) -> Result<()>;

    /// Open and close a relational database connection.
    fn connect_postgres(&self, postgres: &PostgresSettings, timeout: Option<Duration>)
        -> Result<()>;
}
