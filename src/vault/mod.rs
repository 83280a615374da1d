//! Vault module: encrypted credential storage.
//!
//! This module provides:
//! - `NewEntry` and `Entry` credential types (`entry`)
//! - `Status`, the displayable outcome of an operation (`status`)
//! - `CredentialVault`, the SQLite-backed store (`store`)

pub mod entry;
pub mod status;
pub mod store;

pub use entry::{Entry, NewEntry};
pub use status::{Status, Tone};
pub use store::CredentialVault;
