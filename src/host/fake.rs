//! Scriptable host for tests.
//!
//! `FakeHost` answers every [`Host`] query from data configured up front and
//! records the order of queries it received.
//!
//! # Example
//!
//! ```
//! use tddcheck::config::Settings;
//! use tddcheck::host::{FakeHost, Host};
//!
//! let settings = Settings::default();
//! let host = FakeHost::healthy(&settings).with_redis_down("Connection refused");
//!
//! assert!(host.ping_redis(&settings.redis, None).is_err());
//! assert_eq!(host.calls(), vec!["redis localhost:6379".to_string()]);
//! ```

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::python::{ImportOutcome, PythonImport, RuntimeInfo};
use super::Host;
use crate::config::{PostgresSettings, RedisSettings, Settings};
use crate::error::{Result, TddCheckError};
use crate::shell::{format_command, CommandResult};

/// Host that answers from canned data.
#[derive(Debug, Default)]
pub struct FakeHost {
    runtime: Option<RuntimeInfo>,
    imports: HashMap<String, ImportOutcome>,
    commands: HashMap<String, CommandResult>,
    paths: HashSet<PathBuf>,
    any_path: bool,
    redis_error: Option<String>,
    postgres_error: Option<String>,
    calls: RefCell<Vec<String>>,
}

/// A successful command printing `stdout`.
pub fn ok(stdout: &str) -> CommandResult {
    CommandResult::success(stdout.to_string(), String::new(), Duration::ZERO)
}

/// A command exiting with `code`.
pub fn exit(code: i32, stderr: &str) -> CommandResult {
    CommandResult::failure(Some(code), String::new(), stderr.to_string(), Duration::ZERO)
}

impl FakeHost {
    /// A host with nothing installed: every query fails.
    pub fn new() -> Self {
        Self::default()
    }

    /// A host on which every check in the default suite passes.
    pub fn healthy(settings: &Settings) -> Self {
        let python = settings.python.as_str();
        let pm = settings.package_manager.as_str();
        Self::new()
            .with_runtime(3, 11, 9, true)
            .with_import("django", ImportOutcome::imported(Some("5.0.4")))
            .with_import("pytest", ImportOutcome::imported(Some("8.1.1")))
            .with_import("sentry.utils.assets", ImportOutcome::imported(None))
            .with_import("sentry.utils.auth", ImportOutcome::imported(None))
            .with_import(
                "fido2.ctap2.AuthenticatorData",
                ImportOutcome::imported(None),
            )
            .with_command(&settings.node, &["--version"], ok("v20.11.1\n"))
            .with_command(pm, &["--version"], ok("8.15.4\n"))
            .with_command(&settings.pre_commit, &["--version"], ok("pre-commit 3.7.0\n"))
            .with_command(pm, &["run", "lint:js", "--help"], ok(""))
            .with_command(
                python,
                &["-m", "pytest", "--collect-only", "-q"],
                ok("1234 tests collected\n"),
            )
            .with_command(pm, &["test", "--listTests"], ok(""))
            .with_any_path()
    }

    pub fn with_runtime(mut self, major: u32, minor: u32, patch: u32, isolated: bool) -> Self {
        self.runtime = Some(RuntimeInfo {
            major,
            minor,
            patch,
            isolated,
        });
        self
    }

    /// Make the interpreter unavailable.
    pub fn without_runtime(mut self) -> Self {
        self.runtime = None;
        self
    }

    /// Set the outcome for an import, keyed by its display name.
    pub fn with_import(mut self, name: &str, outcome: ImportOutcome) -> Self {
        self.imports.insert(name.to_string(), outcome);
        self
    }

    /// Set the result of a command.
    pub fn with_command(mut self, program: &str, args: &[&str], result: CommandResult) -> Self {
        self.commands.insert(format_command(program, args), result);
        self
    }

    /// Make a command impossible to start.
    pub fn without_command(mut self, program: &str, args: &[&str]) -> Self {
        self.commands.remove(&format_command(program, args));
        self
    }

    /// Mark a path as existing.
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.paths.insert(path.into());
        self
    }

    /// Treat every path as existing.
    fn with_any_path(mut self) -> Self {
        self.any_path = true;
        self
    }

    /// Treat only explicitly added paths as existing.
    pub fn without_paths(mut self) -> Self {
        self.any_path = false;
        self.paths.clear();
        self
    }

    pub fn with_redis_down(mut self, message: &str) -> Self {
        self.redis_error = Some(message.to_string());
        self
    }

    pub fn with_postgres_down(mut self, message: &str) -> Self {
        self.postgres_error = Some(message.to_string());
        self
    }

    /// Every query received, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }
}

impl Host for FakeHost {
    fn runtime_info(&self) -> Result<RuntimeInfo> {
        self.record("runtime".to_string());
        self.runtime.ok_or_else(|| TddCheckError::CommandNotStarted {
            command: "python3".to_string(),
            message: "No such file or directory (os error 2)".to_string(),
        })
    }

    fn import(&self, import: &PythonImport) -> Result<ImportOutcome> {
        let name = import.display_name();
        self.record(format!("import {}", name));
        Ok(self
            .imports
            .get(&name)
            .cloned()
            .unwrap_or_else(|| ImportOutcome::not_found(import.module)))
    }

    fn run(&self, program: &str, args: &[&str], _cwd: Option<&Path>) -> Result<CommandResult> {
        let command = format_command(program, args);
        self.record(format!("run {}", command));
        self.commands
            .get(&command)
            .cloned()
            .ok_or_else(|| TddCheckError::CommandNotStarted {
                command,
                message: "No such file or directory (os error 2)".to_string(),
            })
    }

    fn path_exists(&self, path: &Path) -> bool {
        self.any_path || self.paths.contains(path)
    }

    fn ping_redis(&self, redis: &RedisSettings, _timeout: Option<Duration>) -> Result<()> {
        let address = redis.address();
        self.record(format!("redis {}", address));
        match &self.redis_error {
            Some(message) => Err(TddCheckError::ServiceUnavailable {
                service: "Redis".to_string(),
                address,
                message: message.clone(),
            }),
            None => Ok(()),
        }
    }

    fn connect_postgres(
        &self,
        postgres: &PostgresSettings,
        _timeout: Option<Duration>,
    ) -> Result<()> {
        let address = postgres.address();
        self.record(format!("postgres {}", address));
        match &self.postgres_error {
            Some(message) => Err(TddCheckError::ServiceUnavailable {
                service: "PostgreSQL".to_string(),
                address,
                message: message.clone(),
            }),
            None => Ok(()),
        }
    }
}
