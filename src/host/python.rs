//! Python interpreter probes.
//!
//! The interpreter is asked questions through `python -c <program>`: one
//! program reports its version and virtualenv state as JSON, and import
//! programs print the imported module's version (if requested) and exit
//! non-zero with a traceback on failure.

use regex::Regex;
use serde::Deserialize;
use std::sync::LazyLock;

use crate::error::{Result, TddCheckError};

/// Prints a one-line JSON object describing the running interpreter.
///
/// `real_prefix` is set by the legacy `virtualenv` tool; `base_prefix`
/// differs from `prefix` inside a `venv`.
pub const RUNTIME_INFO_PROGRAM: &str = "import json, sys; \
print(json.dumps({'major': sys.version_info.major, 'minor': sys.version_info.minor, \
'micro': sys.version_info.micro, 'isolated': hasattr(sys, 'real_prefix') or \
getattr(sys, 'base_prefix', sys.prefix) != sys.prefix}))";

/// An unindented `package.Kind: message` line, as Python prints the exception
/// that ended the process.
static EXCEPTION_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z_][\w.]*): ?(.*)$").expect("EXCEPTION_LINE must compile")
});

/// Version and isolation state of an interpreter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct RuntimeInfo {
    pub major: u32,
    pub minor: u32,
    #[serde(rename = "micro")]
    pub patch: u32,
    /// Running inside a virtual environment.
    pub isolated: bool,
}

impl RuntimeInfo {
    /// 3.11 or newer within the 3.x line.
    pub fn is_recommended(&self) -> bool {
        self.major == 3 && self.minor >= 11
    }

    /// `major.minor.patch`.
    pub fn version(&self) -> String {
        format!("{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Parse the output of [`RUNTIME_INFO_PROGRAM`].
pub fn parse_runtime_info(program: &str, stdout: &str) -> Result<RuntimeInfo> {
    let line = stdout
        .lines()
        .rev()
        .find(|l| !l.trim().is_empty())
        .ok_or_else(|| TddCheckError::MalformedProbeOutput {
            program: program.to_string(),
            message: "no output".to_string(),
        })?;

    serde_json::from_str(line.trim()).map_err(|e| TddCheckError::MalformedProbeOutput {
        program: program.to_string(),
        message: e.to_string(),
    })
}

/// An import to attempt in the interpreter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PythonImport {
    /// Dotted module path.
    pub module: &'static str,
    /// Name imported from the module (`from module import name`).
    pub name: Option<&'static str>,
    /// Expression on the module that yields its version, e.g. `__version__`.
    pub version: Option<&'static str>,
}

impl PythonImport {
    /// `import module`.
    pub const fn module(module: &'static str) -> Self {
        Self {
            module,
            name: None,
            version: None,
        }
    }

    /// `from module import name`.
    pub const fn from(module: &'static str, name: &'static str) -> Self {
        Self {
            module,
            name: Some(name),
            version: None,
        }
    }

    /// `import module` and print `module.<version>`.
    pub const fn versioned(module: &'static str, version: &'static str) -> Self {
        Self {
            module,
            name: None,
            version: Some(version),
        }
    }

    /// What the user sees: the module path, plus the imported name if any.
    pub fn display_name(&self) -> String {
        match self.name {
            Some(name) => format!("{}.{}", self.module, name),
            None => self.module.to_string(),
        }
    }

    /// The program passed to `python -c`.
    pub fn program(&self) -> String {
        match (self.name, self.version) {
            (Some(name), _) => format!("from {} import {}", self.module, name),
            (None, Some(version)) => {
                format!("import {0}; print({0}.{1})", self.module, version)
            }
            (None, None) => format!("import {}", self.module),
        }
    }
}

/// Result of attempting an import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportOutcome {
    /// The import succeeded.
    Imported {
        /// Reported version, when one was requested and printed.
        version: Option<String>,
    },
    /// The import raised.
    Failed {
        /// Exception class, e.g. `ModuleNotFoundError`.
        kind: String,
        /// Exception message.
        reason: String,
    },
}

impl ImportOutcome {
    pub fn imported(version: Option<&str>) -> Self {
        Self::Imported {
            version: version.map(str::to_string),
        }
    }

    pub fn failed(kind: &str, reason: &str) -> Self {
        Self::Failed {
            kind: kind.to_string(),
            reason: reason.to_string(),
        }
    }

    /// `ModuleNotFoundError: No module named 'x'` as a convenience.
    pub fn not_found(module: &str) -> Self {
        let top = module.split('.').next().unwrap_or(module);
        Self::failed(
            "ModuleNotFoundError",
            &format!("No module named '{}'", top),
        )
    }

    /// Whether the failure is an import problem rather than an error raised
    /// while the module was executing.
    pub fn is_import_error(&self) -> bool {
        match self {
            Self::Imported { .. } => false,
            Self::Failed { kind, .. } => {
                kind.ends_with("ImportError") || kind.ends_with("ModuleNotFoundError")
            }
        }
    }
}

/// Build an [`ImportOutcome`] from a finished import program.
pub fn import_outcome(
    success: bool,
    exit_code: Option<i32>,
    stdout: &str,
    stderr: &str,
) -> ImportOutcome {
    if success {
        let version = stdout.lines().rev().map(str::trim).find(|l| !l.is_empty());
        return ImportOutcome::imported(version);
    }

    let last_line = stderr.lines().rev().find(|l| !l.trim().is_empty());

    if let Some(caps) = last_line.and_then(|l| EXCEPTION_LINE.captures(l.trim_end())) {
        let kind = caps.get(1).map_or("", |m| m.as_str());
        let reason = caps.get(2).map_or("", |m| m.as_str().trim());
        return ImportOutcome::failed(kind, reason);
    }

    let reason = last_line
        .map(|l| l.trim().to_string())
        .unwrap_or_else(|| match exit_code {
            Some(code) => format!("interpreter exited with code {}", code),
            None => "interpreter was terminated by a signal".to_string(),
        });
    ImportOutcome::failed("Error", &reason)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_runtime_info_json() {
        let info = parse_runtime_info(
            "python3",
            "{\"major\": 3, \"minor\": 12, \"micro\": 1, \"isolated\": true}\n",
        )
        .unwrap();
        assert_eq!(
            info,
            RuntimeInfo {
                major: 3,
                minor: 12,
                patch: 1,
                isolated: true
            }
        );
        assert_eq!(info.version(), "3.12.1");
    }

    #[test]
    fn runtime_info_uses_last_non_empty_line() {
        let stdout = "sitecustomize noise\n{\"major\": 3, \"minor\": 9, \"micro\": 18, \"isolated\": false}\n\n";
        let info = parse_runtime_info("python3", stdout).unwrap();
        assert_eq!(info.minor, 9);
        assert!(!info.isolated);
    }

    #[test]
    fn garbage_runtime_output_is_malformed() {
        let err = parse_runtime_info("python3", "Python 3.11.2\n").unwrap_err();
        assert!(matches!(err, TddCheckError::MalformedProbeOutput { .. }));

        let err = parse_runtime_info("python3", "").unwrap_err();
        assert!(err.to_string().contains("no output"));
    }

    #[test]
    fn recommended_versions() {
        let info = |major, minor| RuntimeInfo {
            major,
            minor,
            patch: 0,
            isolated: false,
        };
        assert!(info(3, 11).is_recommended());
        assert!(info(3, 13).is_recommended());
        assert!(!info(3, 10).is_recommended());
        assert!(!info(2, 11).is_recommended());
        assert!(!info(4, 11).is_recommended());
    }

    #[test]
    fn import_programs() {
        assert_eq!(
            PythonImport::versioned("django", "get_version()").program(),
            "import django; print(django.get_version())"
        );
        assert_eq!(
            PythonImport::module("sentry.utils.auth").program(),
            "import sentry.utils.auth"
        );
        assert_eq!(
            PythonImport::from("fido2.ctap2", "AuthenticatorData").program(),
            "from fido2.ctap2 import AuthenticatorData"
        );
        assert_eq!(
            PythonImport::from("fido2.ctap2", "AuthenticatorData").display_name(),
            "fido2.ctap2.AuthenticatorData"
        );
    }

    #[test]
    fn successful_import_reports_printed_version() {
        let outcome = import_outcome(true, Some(0), "5.0.4\n", "");
        assert_eq!(outcome, ImportOutcome::imported(Some("5.0.4")));

        let outcome = import_outcome(true, Some(0), "", "");
        assert_eq!(outcome, ImportOutcome::imported(None));
    }

    #[test]
    fn traceback_yields_exception_class_and_message() {
        let stderr = "Traceback (most recent call last):\n  File \"<string>\", line 1, in <module>\nModuleNotFoundError: No module named 'sentry'\n";
        let outcome = import_outcome(false, Some(1), "", stderr);
        assert_eq!(
            outcome,
            ImportOutcome::failed("ModuleNotFoundError", "No module named 'sentry'")
        );
        assert!(outcome.is_import_error());
    }

    #[test]
    fn chained_traceback_uses_last_exception() {
        let stderr = "Traceback (most recent call last):\nKeyError: 'x'\n\nDuring handling of the above exception, another exception occurred:\n\nTraceback (most recent call last):\nImportError: cannot import name 'AuthenticatorData' from 'fido2.ctap2'\n";
        let outcome = import_outcome(false, Some(1), "", stderr);
        match &outcome {
            ImportOutcome::Failed { kind, reason } => {
                assert_eq!(kind, "ImportError");
                assert!(reason.contains("AuthenticatorData"));
            }
            other => panic!("expected failure, got {:?}", other),
        }
        assert!(outcome.is_import_error());
    }

    #[test]
    fn chained_traceback_reports_final_exception_whatever_its_name() {
        let stderr = "Traceback (most recent call last):\n  File \"<string>\", line 1, in <module>\nKeyError: 'SENTRY_CONF'\n\nDuring handling of the above exception, another exception occurred:\n\nTraceback (most recent call last):\n  File \"<string>\", line 1, in <module>\ndjango.core.exceptions.AppRegistryNotReady: Apps aren't loaded yet.\n";
        let outcome = import_outcome(false, Some(1), "", stderr);
        assert_eq!(
            outcome,
            ImportOutcome::failed(
                "django.core.exceptions.AppRegistryNotReady",
                "Apps aren't loaded yet."
            )
        );
        assert!(!outcome.is_import_error());
    }

    #[test]
    fn indented_source_lines_are_not_exceptions() {
        let stderr = "Traceback (most recent call last):\n  File \"<string>\", line 1, in <module>\n    raise SystemExit\nSystemExit\n";
        let outcome = import_outcome(false, Some(1), "", stderr);
        assert_eq!(outcome, ImportOutcome::failed("Error", "SystemExit"));
    }

    #[test]
    fn runtime_error_during_import_is_not_an_import_error() {
        let stderr = "Traceback (most recent call last):\ndjango.core.exceptions.ImproperlyConfigured: settings missing\nRuntimeError: boom\n";
        let outcome = import_outcome(false, Some(1), "", stderr);
        assert_eq!(outcome, ImportOutcome::failed("RuntimeError", "boom"));
        assert!(!outcome.is_import_error());
    }

    #[test]
    fn unrecognised_stderr_falls_back_to_last_line() {
        let outcome = import_outcome(false, Some(139), "", "Segmentation fault\n");
        assert_eq!(outcome, ImportOutcome::failed("Error", "Segmentation fault"));

        let outcome = import_outcome(false, Some(2), "", "");
        match outcome {
            ImportOutcome::Failed { reason, .. } => assert!(reason.ends_with("code 2")),
            other => panic!("expected failure, got {:?}", other),
        }
    }

    #[test]
    fn not_found_names_top_level_package() {
        assert_eq!(
            ImportOutcome::not_found("sentry.utils.assets"),
            ImportOutcome::failed("ModuleNotFoundError", "No module named 'sentry'")
        );
    }
}
