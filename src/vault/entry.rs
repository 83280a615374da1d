//! Credential entry types.
//!
//! `NewEntry` is what callers hand to the vault; `Entry` is a stored row
//! with its password decrypted. Plaintext passwords live in `Zeroizing`
//! buffers so they are wiped when the value is dropped.

use std::fmt;

use zeroize::Zeroizing;

use crate::errors::{CredVaultError, Result};

/// A credential about to be inserted.
///
/// Only constructible through `NewEntry::new`, so every value has
/// non-empty, trimmed fields.
#[derive(Clone)]
pub struct NewEntry {
    service: String,
    username: String,
    password: Zeroizing<String>,
}

impl NewEntry {
    /// Trim every field and reject the entry if any of them ends up empty.
    pub fn new(service: &str, username: &str, password: &str) -> Result<Self> {
        let service = required("service", service)?;
        let username = required("username", username)?;
        let password = required("password", password)?;

        Ok(Self {
            service: service.to_string(),
            username: username.to_string(),
            password: Zeroizing::new(password.to_string()),
        })
    }

    pub fn service(&self) -> &str {
        &self.service
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for NewEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewEntry")
            .field("service", &self.service)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// A stored credential with its password decrypted.
#[derive(Clone, PartialEq, Eq)]
pub struct Entry {
    /// Row id assigned by the store; increases with every insert.
    pub id: i64,
    pub service: String,
    pub username: String,
    pub password: Zeroizing<String>,
}

impl fmt::Debug for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entry")
            .field("id", &self.id)
            .field("service", &self.service)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

fn required<'a>(field: &'static str, value: &'a str) -> Result<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CredVaultError::Validation(field));
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_entry_trims_fields() {
        let entry = NewEntry::new("  github.com ", "alice\n", " pw ").unwrap();
        assert_eq!(entry.service(), "github.com");
        assert_eq!(entry.username(), "alice");
        assert_eq!(entry.password(), "pw");
    }

    #[test]
    fn each_empty_field_is_named() {
        let cases = [
            (("", "u", "p"), "service"),
            (("s", "  ", "p"), "username"),
            (("s", "u", ""), "password"),
        ];
        for ((service, username, password), expected) in cases {
            match NewEntry::new(service, username, password) {
                Err(CredVaultError::Validation(field)) => assert_eq!(field, expected),
                other => panic!("expected validation error, got {other:?}"),
            }
        }
    }

    #[test]
    fn debug_redacts_password() {
        let entry = NewEntry::new("s", "u", "hunter2").unwrap();
        let shown = format!("{entry:?}");
        assert!(!shown.contains("hunter2"));
        assert!(shown.contains("<redacted>"));
    }
}
