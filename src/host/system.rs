//! The real host: processes, sockets and the local filesystem.

use std::path::{Path, PathBuf};
use std::time::Duration;

use super::datastore;
use super::python::{self, ImportOutcome, PythonImport, RuntimeInfo, RUNTIME_INFO_PROGRAM};
use super::Host;
use crate::config::{PostgresSettings, RedisSettings};
use crate::error::Result;
use crate::shell::{execute, CommandOptions, CommandResult};

/// Answers capability queries against the running machine.
#[derive(Debug, Clone)]
pub struct SystemHost {
    project_root: PathBuf,
    python: String,
}

impl SystemHost {
    /// `python` is the interpreter used for runtime and import probes.
    pub fn new(project_root: impl Into<PathBuf>, python: impl Into<String>) -> Self {
        Self {
            project_root: project_root.into(),
            python: python.into(),
        }
    }

    /// `PYTHONPATH` with the project's `src/` directory prepended.
    fn python_path(&self) -> String {
        let src = self.project_root.join("src");
        let mut paths = vec![src];
        if let Some(existing) = std::env::var_os("PYTHONPATH") {
            paths.extend(std::env::split_paths(&existing));
        }
        std::env::join_paths(paths)
            .map(|p| p.to_string_lossy().into_owned())
            .unwrap_or_else(|_| self.project_root.join("src").to_string_lossy().into_owned())
    }

    fn run_python(&self, program: &str) -> Result<CommandResult> {
        let mut options = CommandOptions {
            cwd: Some(self.project_root.clone()),
            ..Default::default()
        };
        options
            .env
            .insert("PYTHONPATH".to_string(), self.python_path());
        execute(&self.python, &["-c", program], &options)
    }
}

impl Host for SystemHost {
    fn runtime_info(&self) -> Result<RuntimeInfo> {
        let result = self.run_python(RUNTIME_INFO_PROGRAM)?;
        python::parse_runtime_info(&self.python, &result.stdout)
    }

    fn import(&self, import: &PythonImport) -> Result<ImportOutcome> {
        let result = self.run_python(&import.program())?;
        let outcome =
            python::import_outcome(result.success, result.exit_code, &result.stdout, &result.stderr);
        tracing::debug!("import {}: {:?}", import.display_name(), outcome);
        Ok(outcome)
    }

    fn run(&self, program: &str, args: &[&str], cwd: Option<&Path>) -> Result<CommandResult> {
        let options = CommandOptions {
            cwd: cwd.map(Path::to_path_buf),
            ..Default::default()
        };
        execute(program, args, &options)
    }

    fn path_exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn ping_redis(&self, redis: &RedisSettings, timeout: Option<Duration>) -> Result<()> {
        datastore::ping_redis(redis, timeout)
    }

    fn connect_postgres(
        &self,
        postgres: &PostgresSettings,
        timeout: Option<Duration>,
    ) -> Result<()> {
        datastore::connect_postgres(postgres, timeout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TddCheckError;

    #[test]
    fn python_path_starts_with_project_src() {
        let host = SystemHost::new("/work/sentry", "python3");
        let path = host.python_path();
        let first = std::env::split_paths(&path).next().unwrap();
        assert_eq!(first, PathBuf::from("/work/sentry/src"));
    }

    #[test]
    fn missing_interpreter_is_an_error() {
        let temp = tempfile::TempDir::new().unwrap();
        let host = SystemHost::new(temp.path(), "tddcheck-no-such-python");

        let err = host.runtime_info().unwrap_err();
        assert!(matches!(err, TddCheckError::CommandNotStarted { .. }));

        let err = host
            .import(&PythonImport::module("django"))
            .unwrap_err();
        assert!(matches!(err, TddCheckError::CommandNotStarted { .. }));
    }

    #[test]
    fn path_exists_reflects_filesystem() {
        let temp = tempfile::TempDir::new().unwrap();
        let host = SystemHost::new(temp.path(), "python3");
        assert!(host.path_exists(temp.path()));
        assert!(!host.path_exists(&temp.path().join("node_modules")));
    }
}
