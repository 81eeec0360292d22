//! # Configuration State
//!
//! Where the database and log files live.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`STOCKROOM_DB_PATH`, `STOCKROOM_LOG_PATH`)
//! 2. Platform data directory (defaults, this file)
//!
//! ## Platform-Specific Data Directory
//! - **macOS**: `~/Library/Application Support/com.stockroom.inventory/`
//! - **Windows**: `%APPDATA%\stockroom\inventory\data\`
//! - **Linux**: `~/.local/share/inventory/`
//!
//! Read-only after startup.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default database file name.
pub const DATABASE_FILE: &str = "inventory.db";

/// Default log file name.
pub const LOG_FILE: &str = "stockroom.log";

/// Configuration failures at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not determine app data directory")]
    NoDataDir,

    #[error("Could not create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// SQLite file holding products and stock logs.
    pub database_path: PathBuf,

    /// File receiving tracing output.
    pub log_path: PathBuf,

    /// Heading shown at the top of the form.
    pub title: String,
}

impl ConfigState {
    /// Resolves configuration from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `STOCKROOM_DB_PATH`: Override the database file
    /// - `STOCKROOM_LOG_PATH`: Override the log file
    pub fn from_env() -> Result<Self, ConfigError> {
        let db_override = std::env::var_os("STOCKROOM_DB_PATH").map(PathBuf::from);
        let log_override = std::env::var_os("STOCKROOM_LOG_PATH").map(PathBuf::from);

        match db_override {
            Some(db) => Ok(Self::resolve(db, log_override)),
            None => {
                let data_dir = data_dir()?;
                Ok(Self::resolve(data_dir.join(DATABASE_FILE), log_override))
            }
        }
    }

    /// Builds a configuration from a database path; the log file defaults
    /// to the database's directory.
    pub fn resolve(database_path: PathBuf, log_override: Option<PathBuf>) -> Self {
        let log_path = log_override.unwrap_or_else(|| sibling(&database_path, LOG_FILE));

        ConfigState {
            database_path,
            log_path,
            title: "Inventory System".to_string(),
        }
    }
}

fn sibling(path: &Path, file_name: &str) -> PathBuf {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.join(file_name),
        _ => PathBuf::from(file_name),
    }
}

/// Platform data directory, created if missing.
fn data_dir() -> Result<PathBuf, ConfigError> {
    let proj_dirs =
        ProjectDirs::from("com", "stockroom", "inventory").ok_or(ConfigError::NoDataDir)?;

    let dir = proj_dirs.data_dir().to_path_buf();
    std::fs::create_dir_all(&dir).map_err(|source| ConfigError::CreateDir {
        path: dir.clone(),
        source,
    })?;

    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_defaults_next_to_database() {
        let config = ConfigState::resolve(PathBuf::from("/srv/stock/inventory.db"), None);
        assert_eq!(config.database_path, PathBuf::from("/srv/stock/inventory.db"));
        assert_eq!(config.log_path, PathBuf::from("/srv/stock/stockroom.log"));
        assert_eq!(config.title, "Inventory System");
    }

    #[test]
    fn test_relative_database_path() {
        let config = ConfigState::resolve(PathBuf::from("inventory.db"), None);
        assert_eq!(config.log_path, PathBuf::from("stockroom.log"));
    }

    #[test]
    fn test_log_override_wins() {
        let config = ConfigState::resolve(
            PathBuf::from("/srv/stock/inventory.db"),
            Some(PathBuf::from("/var/log/stockroom.log")),
        );
        assert_eq!(config.log_path, PathBuf::from("/var/log/stockroom.log"));
    }
}
