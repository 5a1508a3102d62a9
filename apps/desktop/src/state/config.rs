//! # Configuration State
//!
//! Where Cosmo Stock keeps its files, resolved once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`COSMO_DB_PATH`, `COSMO_ASSETS_DIR`)
//! 2. Platform data directory (defaults, this file)
//!
//! ## Platform Data Directory
//! - **macOS**: `~/Library/Application Support/com.cosmo.stock/`
//! - **Windows**: `%APPDATA%\cosmo\stock\data\`
//! - **Linux**: `~/.local/share/stock/`
//!
//! Configuration is read-only after initialization, so no mutex needed.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::Serialize;
use thiserror::Error;

/// Environment override for the database file.
pub const DB_PATH_ENV: &str = "COSMO_DB_PATH";

/// Environment override for the image directory.
pub const ASSETS_DIR_ENV: &str = "COSMO_ASSETS_DIR";

/// Configuration failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No home directory to derive the data directory from.
    #[error("Could not determine app data directory")]
    NoDataDir,
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// SQLite database file.
    pub database_path: PathBuf,

    /// Managed image directory.
    pub assets_dir: PathBuf,
}

impl ConfigState {
    /// Default layout under `data_dir`:
    /// `stock.db` next to `assets/products/`.
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        let data_dir = data_dir.as_ref();
        ConfigState {
            database_path: data_dir.join("stock.db"),
            assets_dir: data_dir.join("assets").join("products"),
        }
    }

    /// Resolves the configuration from the platform data directory and the
    /// environment overrides.
    pub fn from_env() -> Result<Self, ConfigError> {
        let dirs = ProjectDirs::from("com", "cosmo", "stock").ok_or(ConfigError::NoDataDir)?;

        Ok(ConfigState::new(dirs.data_dir()).with_overrides(
            std::env::var(DB_PATH_ENV).ok(),
            std::env::var(ASSETS_DIR_ENV).ok(),
        ))
    }

    /// Applies explicit path overrides. Blank values are ignored.
    pub fn with_overrides(mut self, database_path: Option<String>, assets_dir: Option<String>) -> Self {
        if let Some(path) = database_path.filter(|p| !p.trim().is_empty()) {
            self.database_path = PathBuf::from(path);
        }
        if let Some(dir) = assets_dir.filter(|d| !d.trim().is_empty()) {
            self.assets_dir = PathBuf::from(dir);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout() {
        let config = ConfigState::new("/data/cosmo");

        assert_eq!(config.database_path, PathBuf::from("/data/cosmo/stock.db"));
        assert_eq!(config.assets_dir, PathBuf::from("/data/cosmo/assets/products"));
    }

    #[test]
    fn test_overrides() {
        let config = ConfigState::new("/data/cosmo")
            .with_overrides(Some("/tmp/dev.db".to_string()), None);

        assert_eq!(config.database_path, PathBuf::from("/tmp/dev.db"));
        assert_eq!(config.assets_dir, PathBuf::from("/data/cosmo/assets/products"));

        let config = ConfigState::new("/data/cosmo")
            .with_overrides(Some("  ".to_string()), Some("/tmp/images".to_string()));

        assert_eq!(config.database_path, PathBuf::from("/data/cosmo/stock.db"));
        assert_eq!(config.assets_dir, PathBuf::from("/tmp/images"));
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(ConfigState::new("/data")).unwrap();

        assert_eq!(json["databasePath"], "/data/stock.db");
        assert_eq!(json["assetsDir"], "/data/assets/products");
    }
}
