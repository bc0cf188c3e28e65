//! Settings file discovery and loading.

use crate::config::settings::Settings;
use crate::error::{Result, TddCheckError};
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up in the project root when no path is given.
pub const SETTINGS_FILE_NAME: &str = ".tddcheck.yml";

/// Find the project settings file at `<project_root>/.tddcheck.yml`.
pub fn find_project_settings(project_root: &Path) -> Option<PathBuf> {
    let path = project_root.join(SETTINGS_FILE_NAME);
    if path.exists() {
        Some(path)
    } else {
        None
    }
}

/// Parse a settings file.
pub fn load_settings_file(path: &Path) -> Result<Settings> {
    if !path.exists() {
        return Err(TddCheckError::SettingsNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Ok(Settings::default());
    }

    serde_yaml::from_str(&content).map_err(|e| TddCheckError::SettingsParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load settings for a run.
///
/// An explicit path must exist. Without one, the project settings file is
/// used when present, and built-in defaults otherwise.
pub fn load_settings(project_root: &Path, explicit: Option<&Path>) -> Result<Settings> {
    match explicit {
        Some(path) => load_settings_file(path),
        None => match find_project_settings(project_root) {
            Some(path) => {
                tracing::debug!("Loading settings from {}", path.display());
                load_settings_file(&path)
            }
            None => Ok(Settings::default()),
        },
    }
}
