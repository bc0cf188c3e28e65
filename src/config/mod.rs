//! Settings for a verification run.
//!
//! - Schema definitions in [`settings`]
//! - File discovery and loading in [`loader`]
//!
//! # Example
//!
//! ```
//! use tddcheck::config::load_settings;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join(".tddcheck.yml"), "redis:\n  port: 6380\n").unwrap();
//!
//! let settings = load_settings(temp.path(), None).unwrap();
//! assert_eq!(settings.redis.port, 6380);
//! assert_eq!(settings.postgres.port, 5432);
//! ```

pub mod loader;
pub mod settings;

pub use loader::{find_project_settings, load_settings, load_settings_file, SETTINGS_FILE_NAME};
pub use settings::{PostgresSettings, RedisSettings, Settings};
