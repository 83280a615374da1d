//! AES-256-GCM authenticated encryption of password fields.
//!
//! Every call to `encrypt` draws a fresh random 96-bit nonce and stores it
//! in front of the ciphertext, so a single BLOB column holds everything
//! `decrypt` needs:
//!
//! ```text
//! [ 12-byte nonce | ciphertext | 16-byte auth tag ]
//! ```

use aes_gcm::aead::{Aead, KeyInit, OsRng};
use aes_gcm::{AeadCore, Aes256Gcm, Key, Nonce};

use super::keys::KEY_LEN;
use crate::errors::{CredVaultError, Result};

/// Size of the AES-256-GCM nonce in bytes.
pub const NONCE_LEN: usize = 12;

/// Size of the GCM authentication tag in bytes.
pub const TAG_LEN: usize = 16;

/// Encrypt `plaintext` under a 32-byte `key`.
///
/// Returns `nonce || ciphertext || tag`.
pub fn encrypt(key: &[u8; KEY_LEN], plaintext: &[u8]) -> Result<Vec<u8>> {
    let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key));
    let nonce = Aes256Gcm::generate_nonce(&mut OsRng);

    let sealed = cipher
        .encrypt(&nonce, plaintext)
        .map_err(|e| CredVaultError::EncryptionFailed(format!("AES-GCM seal: {e}")))?;

    let mut output = Vec::with_capacity(NONCE_LEN + sealed.len());
    output.extend_from_slice(&nonce);
    output.extend_from_slice(&sealed);
    Ok(output)
}

/// Decrypt a payload produced by `encrypt`.
///
/// Any payload that is too short, was sealed under another key, or was
/// modified after sealing fails with `DecryptionFailed`.
pub fn decrypt(key: &[u8; KEY_LEN], payload: &[u8]) -> Result<Vec<u8>> {
    if payload.len() < NONCE_LEN + TAG_LEN {
        return Err(CredVaultError::DecryptionFailed);
    }

    let (nonce_bytes, sealed) = payload.split_at(NONCE_LEN);
    let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key));

    cipher
        .decrypt(Nonce::from_slice(nonce_bytes), sealed)
        .map_err(|_| CredVaultError::DecryptionFailed)
}
