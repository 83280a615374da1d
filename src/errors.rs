use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur in CredVault.
#[derive(Debug, Error)]
pub enum CredVaultError {
    // --- Key store errors ---
    #[error("Key file error at {path}: {reason}")]
    KeyIo { path: PathBuf, reason: String },

    // --- Crypto errors ---
    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    #[error("Decryption failed — wrong key or corrupted data")]
    DecryptionFailed,

    #[error("Key derivation failed: {0}")]
    KeyDerivationFailed(String),

    // --- Store errors ---
    #[error("Credential store error: {0}")]
    Store(#[from] rusqlite::Error),

    #[error("No entries stored for '{0}'")]
    EntryNotFound(String),

    // --- Validation errors ---
    #[error("All fields must be filled ({0} is empty)")]
    Validation(&'static str),

    // --- Config errors ---
    #[error("Config file error: {0}")]
    ConfigError(String),

    // --- IO errors ---
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // --- CLI errors ---
    #[error("Command failed: {0}")]
    CommandFailed(String),

    #[error("Clipboard error: {0}")]
    ClipboardError(String),
}

impl CredVaultError {
    /// Build a `KeyIo` error for the key file at `path`.
    pub(crate) fn key_io(path: &std::path::Path, reason: impl Into<String>) -> Self {
        Self::KeyIo {
            path: path.to_path_buf(),
            reason: reason.into(),
        }
    }
}

/// Convenience type alias for CredVault results.
pub type Result<T> = std::result::Result<T, CredVaultError>;
