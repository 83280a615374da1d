//! Key store: the single symmetric key persisted next to the database.
//!
//! The key file holds exactly 32 raw bytes. It is created on first run and
//! only read afterwards. Losing or replacing it makes every stored
//! password undecryptable.

use std::fs;
use std::path::Path;

use aes_gcm::aead::rand_core::RngCore;
use aes_gcm::aead::OsRng;
use zeroize::Zeroize;

use super::keys::{VaultKey, KEY_LEN};
use crate::errors::{CredVaultError, Result};

/// Load the key at `path`, or generate and persist a new one.
///
/// An existing file is never overwritten. Missing parent directories are
/// created. The file gets default permissions.
pub fn load_or_create_key(path: &Path) -> Result<VaultKey> {
    if path.exists() {
        let key = load_key(path)?;
        tracing::debug!(path = %path.display(), "loaded key file");
        return Ok(key);
    }

    let key = generate_key();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| {
                CredVaultError::key_io(path, format!("cannot create key directory: {e}"))
            })?;
        }
    }

    fs::write(path, key.as_bytes())
        .map_err(|e| CredVaultError::key_io(path, format!("failed to write key: {e}")))?;

    tracing::info!(path = %path.display(), "created new key file");
    Ok(key)
}

/// Read an existing key file and check its length.
pub fn load_key(path: &Path) -> Result<VaultKey> {
    let mut data = fs::read(path)
        .map_err(|e| CredVaultError::key_io(path, format!("failed to read key: {e}")))?;

    if data.len() != KEY_LEN {
        let len = data.len();
        data.zeroize();
        return Err(CredVaultError::key_io(
            path,
            format!("key file must be exactly {KEY_LEN} bytes, got {len}"),
        ));
    }

    let mut bytes = [0u8; KEY_LEN];
    bytes.copy_from_slice(&data);
    data.zeroize();

    let key = VaultKey::new(bytes);
    bytes.zeroize();
    Ok(key)
}

/// Generate a fresh random key from the OS CSPRNG.
pub fn generate_key() -> VaultKey {
    let mut bytes = [0u8; KEY_LEN];
    OsRng.fill_bytes(&mut bytes);

    let key = VaultKey::new(bytes);
    bytes.zeroize();
    key
}
