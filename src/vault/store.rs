//! High-level credential operations used by the CLI.
//!
//! `CredentialVault` owns the entry-encryption key and the SQLite
//! connection. It is built once at startup from a key path and a database
//! path and passed by reference to whatever needs it.

use std::fs;
use std::path::Path;

use rusqlite::{params, Connection, Params};
use zeroize::{Zeroize, Zeroizing};

use crate::crypto::encryption::{decrypt, encrypt};
use crate::crypto::keyfile::load_or_create_key;
use crate::crypto::keys::VaultKey;
use crate::errors::{CredVaultError, Result};

use super::entry::{Entry, NewEntry};

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS passwords (
    id       INTEGER PRIMARY KEY AUTOINCREMENT,
    service  TEXT NOT NULL,
    username TEXT NOT NULL,
    password BLOB NOT NULL
);";

/// The main vault handle.
pub struct CredentialVault {
    /// HKDF-derived key for the password column (zeroized on drop).
    entry_key: VaultKey,

    /// Fingerprint of the key file the entry key came from.
    fingerprint: String,

    conn: Connection,
}

impl CredentialVault {
    // ------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------

    /// Open the vault backed by the key file at `key_path` and the SQLite
    /// database at `db_path`.
    ///
    /// Creates the key file and the database on first run, then makes
    /// sure the schema exists.
    pub fn open(key_path: &Path, db_path: &Path) -> Result<Self> {
        let key = load_or_create_key(key_path)?;

        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(db_path)?;
        tracing::debug!(path = %db_path.display(), "opened credential store");
        Self::with_connection(&key, conn)
    }

    /// Open a vault over an in-memory database.
    pub fn open_in_memory(key: &VaultKey) -> Result<Self> {
        Self::with_connection(key, Connection::open_in_memory()?)
    }

    fn with_connection(key: &VaultKey, conn: Connection) -> Result<Self> {
        let vault = Self {
            entry_key: key.derive_entry_key()?,
            fingerprint: key.fingerprint(),
            conn,
        };
        vault.ensure_schema()?;
        Ok(vault)
    }

    /// Create the `passwords` table if it does not exist yet.
    ///
    /// Safe to call on every startup.
    pub fn ensure_schema(&self) -> Result<()> {
        self.conn.execute_batch(SCHEMA)?;
        tracing::debug!("credential schema ensured");
        Ok(())
    }

    // ------------------------------------------------------------------
    // Crypto
    // ------------------------------------------------------------------

    /// Encrypt a plaintext password under the vault key.
    pub fn encrypt(&self, plaintext: &str) -> Result<Vec<u8>> {
        encrypt(self.entry_key.as_bytes(), plaintext.as_bytes())
    }

    /// Decrypt a payload produced by `encrypt`.
    ///
    /// Fails with `DecryptionFailed` when the payload was sealed under a
    /// different key file or has been modified.
    pub fn decrypt(&self, payload: &[u8]) -> Result<Zeroizing<String>> {
        let bytes = decrypt(self.entry_key.as_bytes(), payload)?;

        String::from_utf8(bytes).map(Zeroizing::new).map_err(|e| {
            let mut bad_bytes = e.into_bytes();
            bad_bytes.zeroize();
            CredVaultError::DecryptionFailed
        })
    }

    // ------------------------------------------------------------------
    // Entry operations
    // ------------------------------------------------------------------

    /// Encrypt and append every entry.
    ///
    /// All passwords are encrypted before anything is written, and the
    /// rows go in through one transaction, so a failure writes nothing.
    pub fn insert(&mut self, entries: &[NewEntry]) -> Result<()> {
        let sealed = entries
            .iter()
            .map(|entry| self.encrypt(entry.password()))
            .collect::<Result<Vec<_>>>()?;

        let tx = self.conn.transaction()?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO passwords (service, username, password) VALUES (?1, ?2, ?3)",
            )?;
            for (entry, payload) in entries.iter().zip(&sealed) {
                stmt.execute(params![entry.service(), entry.username(), payload])?;
            }
        }
        tx.commit()?;

        tracing::debug!(count = entries.len(), "inserted credential entries");
        Ok(())
    }

    /// Validate one (service, username, password) triple and append it.
    ///
    /// An empty field fails with `Validation` and nothing is written.
    pub fn submit(&mut self, service: &str, username: &str, password: &str) -> Result<()> {
        let entry = NewEntry::new(service, username, password)?;
        self.insert(std::slice::from_ref(&entry))
    }

    /// Decrypt and return every stored entry in insertion order.
    ///
    /// If any row fails to decrypt, the whole listing fails.
    pub fn list_all(&self) -> Result<Vec<Entry>> {
        self.query_entries(
            "SELECT id, service, username, password FROM passwords ORDER BY id",
            [],
        )
    }

    /// Decrypt and return the entries stored for `service`, oldest first.
    pub fn find(&self, service: &str) -> Result<Vec<Entry>> {
        self.query_entries(
            "SELECT id, service, username, password FROM passwords
             WHERE service = ?1 ORDER BY id",
            [service.trim()],
        )
    }

    /// Number of stored entries. Nothing is decrypted.
    pub fn count(&self) -> Result<usize> {
        let n: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM passwords", [], |row| row.get(0))?;
        Ok(usize::try_from(n).unwrap_or(usize::MAX))
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// Fingerprint of the key file this vault was opened with.
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    fn query_entries<P: Params>(&self, sql: &str, params: P) -> Result<Vec<Entry>> {
        let mut stmt = self.conn.prepare(sql)?;
        let rows = stmt.query_map(params, |row| {
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, Vec<u8>>(3)?,
            ))
        })?;

        let mut entries = Vec::new();
        for row in rows {
            let (id, service, username, payload) = row?;
            let password = self.decrypt(&payload).map_err(|e| {
                tracing::warn!(id, "stored password failed to decrypt");
                e
            })?;
            entries.push(Entry {
                id,
                service,
                username,
                password,
            });
        }

        Ok(entries)
    }
}
