//! Cryptographic primitives for CredVault.
//!
//! This module provides:
//! - AES-256-GCM encryption and decryption (`encryption`)
//! - The key store that loads or creates the key file (`keyfile`)
//! - Zeroizing key material and HKDF sub-key derivation (`keys`)
//! - Random password generation (`generator`)

pub mod encryption;
pub mod generator;
pub mod keyfile;
pub mod keys;

pub use encryption::{decrypt, encrypt};
pub use generator::generate_password;
pub use keyfile::{generate_key, load_or_create_key};
pub use keys::{VaultKey, KEY_LEN};
