//! Random password generation.
//!
//! Characters are drawn uniformly from ASCII letters, digits and `!$?`
//! using the thread-local RNG. No strength policy is enforced beyond the
//! requested length.

use rand::Rng;

use crate::errors::{CredVaultError, Result};

/// Alphabet every generated password is drawn from.
pub const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!$?";

/// Length used when the caller does not ask for one.
pub const DEFAULT_LENGTH: usize = 12;

/// Upper bound for generated password length.
pub const MAX_LENGTH: usize = 1024;

/// Check that `length` is between 1 and `MAX_LENGTH`.
pub fn check_length(length: usize) -> Result<usize> {
    if length == 0 {
        return Err(CredVaultError::CommandFailed(
            "password length must be at least 1".into(),
        ));
    }
    if length > MAX_LENGTH {
        return Err(CredVaultError::CommandFailed(format!(
            "password length cannot exceed {MAX_LENGTH}"
        )));
    }
    Ok(length)
}

/// Generate a random password of exactly `length` characters.
pub fn generate_password(length: usize) -> String {
    let mut rng = rand::rng();
    (0..length)
        .map(|_| char::from(CHARSET[rng.random_range(0..CHARSET.len())]))
        .collect()
}
