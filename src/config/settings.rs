//! Settings schema.
//!
//! Every field has a default matching the stock Sentry development setup,
//! so an empty (or absent) settings file is valid.

use serde::Deserialize;
use std::time::Duration;

/// Top-level settings for a verification run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Project name shown in the header line.
    pub project_name: String,

    /// Primary language interpreter.
    pub python: String,

    /// Secondary language runtime.
    pub node: String,

    /// Package manager for the secondary runtime.
    pub package_manager: String,

    /// Pre-commit hook tool.
    pub pre_commit: String,

    /// Dependency cache directory, relative to the project root.
    pub dependency_cache: String,

    /// Key-value store endpoint.
    pub redis: RedisSettings,

    /// Relational database endpoint and credentials.
    pub postgres: PostgresSettings,

    /// Connect timeout for datastore probes. Absent means wait indefinitely.
    pub connect_timeout_secs: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            project_name: "Sentry".to_string(),
            python: "python3".to_string(),
            node: "node".to_string(),
            package_manager: "pnpm".to_string(),
            pre_commit: "pre-commit".to_string(),
            dependency_cache: "node_modules".to_string(),
            redis: RedisSettings::default(),
            postgres: PostgresSettings::default(),
            connect_timeout_secs: None,
        }
    }
}

impl Settings {
    /// Datastore connect timeout, if one is configured.
    pub fn connect_timeout(&self) -> Option<Duration> {
        self.connect_timeout_secs.map(Duration::from_secs)
    }
}

/// Key-value store endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RedisSettings {
    pub host: String,
    pub port: u16,
}

impl Default for RedisSettings {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 6379,
        }
    }
}

impl RedisSettings {
    /// `host:port` form used for connecting and in messages.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Relational database endpoint and credentials.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PostgresSettings {
    pub host: String,
    pub port: u16,
    pub database: String,
    pub user: String,
    pub password: String,
}

impl Default for PostgresSettings {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 5432,
            database: "sentry".to_string(),
            user: "sentry".to_string(),
            password: "sentry".to_string(),
        }
    }
}

impl PostgresSettings {
    /// `host:port` form used in messages.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
