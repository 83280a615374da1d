//! In-memory key material.
//!
//! `VaultKey` holds the 32 raw bytes read from the key file. The vault
//! never encrypts with those bytes directly: it derives a dedicated
//! entry-encryption key with HKDF-SHA256 so the file key can gain other
//! uses later without reusing it as an AES key.

use base64::engine::general_purpose::STANDARD_NO_PAD as BASE64;
use base64::Engine;
use hkdf::Hkdf;
use sha2::{Digest, Sha256};
use zeroize::Zeroize;

use crate::errors::{CredVaultError, Result};

/// Length of every key in the system (256 bits, for AES-256).
pub const KEY_LEN: usize = 32;

/// HKDF context label for the password-column encryption key.
const ENTRY_KEY_INFO: &[u8] = b"credvault-entry-key";

/// Number of SHA-256 bytes shown in a key fingerprint.
const FINGERPRINT_BYTES: usize = 9;

/// A 32-byte key that zeroes its memory when dropped.
#[derive(Zeroize)]
#[zeroize(drop)]
pub struct VaultKey {
    bytes: [u8; KEY_LEN],
}

impl VaultKey {
    /// Wrap raw key bytes.
    pub fn new(bytes: [u8; KEY_LEN]) -> Self {
        Self { bytes }
    }

    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.bytes
    }

    /// Derive the key used to encrypt password fields.
    pub fn derive_entry_key(&self) -> Result<VaultKey> {
        let hk = Hkdf::<Sha256>::new(None, &self.bytes);

        let mut okm = [0u8; KEY_LEN];
        hk.expand(ENTRY_KEY_INFO, &mut okm)
            .map_err(|e| CredVaultError::KeyDerivationFailed(format!("HKDF expand: {e}")))?;

        let key = VaultKey::new(okm);
        okm.zeroize();
        Ok(key)
    }

    /// A short, non-secret identifier for this key.
    ///
    /// Two installations showing the same fingerprint share a key file.
    pub fn fingerprint(&self) -> String {
        let digest = Sha256::digest(&self.bytes);
        BASE64.encode(&digest[..FINGERPRINT_BYTES])
    }
}

impl std::fmt::Debug for VaultKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VaultKey")
            .field("fingerprint", &self.fingerprint())
            .finish()
    }
}
