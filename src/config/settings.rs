use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::crypto::generator::{check_length, DEFAULT_LENGTH};
use crate::errors::{CredVaultError, Result};

/// Data-directory configuration, loaded from `credvault.toml`.
///
/// Every field has a default so CredVault works without any config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Key file path, relative to the data directory unless absolute.
    #[serde(default = "default_key_file")]
    pub key_file: PathBuf,

    /// SQLite database path, relative to the data directory unless absolute.
    #[serde(default = "default_database")]
    pub database: PathBuf,

    /// Length of generated passwords.
    #[serde(default = "default_password_length")]
    pub password_length: usize,
}

// ── Serde default helpers ────────────────────────────────────────────

fn default_key_file() -> PathBuf {
    PathBuf::from("key.key")
}

fn default_database() -> PathBuf {
    PathBuf::from("password_manager.db")
}

fn default_password_length() -> usize {
    DEFAULT_LENGTH
}

// ── Implementation ───────────────────────────────────────────────────

impl Default for Settings {
    fn default() -> Self {
        Self {
            key_file: default_key_file(),
            database: default_database(),
            password_length: default_password_length(),
        }
    }
}

impl Settings {
    /// Name of the config file looked up in the data directory.
    pub const FILE_NAME: &'static str = "credvault.toml";

    /// Load settings from `<data_dir>/credvault.toml`.
    ///
    /// A missing file yields defaults; an unparsable one is an error.
    pub fn load(data_dir: &Path) -> Result<Self> {
        let config_path = data_dir.join(Self::FILE_NAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)?;

        let settings: Settings = toml::from_str(&contents).map_err(|e| {
            CredVaultError::ConfigError(format!("Failed to parse {}: {e}", config_path.display()))
        })?;

        check_length(settings.password_length).map_err(|e| {
            CredVaultError::ConfigError(format!("{}: {e}", config_path.display()))
        })?;

        tracing::debug!(path = %config_path.display(), "loaded settings");
        Ok(settings)
    }

    /// Full path of the key file.
    pub fn key_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(&self.key_file)
    }

    /// Full path of the SQLite database.
    pub fn db_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(&self.database)
    }
}

// ── Tests ────────────────────────────────────────────────────────────
