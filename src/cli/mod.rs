//! CLI module: Clap argument parser, output helpers, and command implementations.
//!
//! This is the presentation adapter: it collects input, calls into
//! `CredentialVault`, and renders the decrypted entries and a status line.

pub mod commands;
pub mod output;

use std::path::{Path, PathBuf};

use clap::Parser;

use crate::config::Settings;
use crate::crypto::generator::{check_length, MAX_LENGTH};
use crate::errors::{CredVaultError, Result};
use crate::vault::CredentialVault;

/// CredVault CLI: local password manager with encryption at rest.
#[derive(Parser)]
#[command(
    name = "credvault",
    about = "Store website passwords encrypted in a local database",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory holding the key file, database and config (default: .credvault)
    #[arg(long, default_value = ".credvault", global = true)]
    pub data_dir: String,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Store a new credential (prompts for missing fields)
    Add {
        /// Website or application name
        #[arg(short, long)]
        service: Option<String>,

        /// Email or username for the account
        #[arg(short, long)]
        username: Option<String>,

        /// Generate the password instead of entering it
        #[arg(short, long)]
        generate: bool,

        /// Length of the generated password
        #[arg(short, long, value_parser = parse_length, requires = "generate")]
        length: Option<usize>,
    },

    /// List all stored credentials
    List {
        /// Show passwords in clear text
        #[arg(long)]
        reveal: bool,
    },

    /// Show the credentials stored for one website
    Show {
        /// Website or application name
        service: String,

        /// Copy the most recent password to the clipboard
        #[arg(short, long)]
        copy: bool,
    },

    /// Generate a random password
    Generate {
        /// Number of characters
        #[arg(short, long, value_parser = parse_length)]
        length: Option<usize>,

        /// Copy the password to the clipboard instead of printing it
        #[arg(short, long)]
        copy: bool,
    },

    /// Show key and database locations and the key fingerprint
    Info,

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum, ignore_case = true)]
        shell: clap_complete::Shell,
    },
}

// ---------------------------------------------------------------------------
// Shared helpers used by multiple commands
// ---------------------------------------------------------------------------

/// Resolve the data directory from the CLI arguments.
///
/// Relative paths are taken from the current working directory.
pub fn data_dir(cli: &Cli) -> Result<PathBuf> {
    let cwd = std::env::current_dir()?;
    Ok(cwd.join(&cli.data_dir))
}

/// Load settings for the data directory and open the vault they describe.
pub fn open_vault(data_dir: &Path) -> Result<(Settings, CredentialVault)> {
    let settings = Settings::load(data_dir)?;
    let vault = CredentialVault::open(
        &settings.key_path(data_dir),
        &settings.db_path(data_dir),
    )?;
    Ok((settings, vault))
}

/// Put `text` on the system clipboard.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = arboard::Clipboard::new()
        .map_err(|e| CredVaultError::ClipboardError(e.to_string()))?;
    clipboard
        .set_text(text)
        .map_err(|e| CredVaultError::ClipboardError(e.to_string()))
}

/// Validate a requested password length.
///
/// Must be between 1 and `MAX_LENGTH` characters.
pub fn validate_length(length: usize) -> Result<usize> {
    check_length(length)
}

fn parse_length(raw: &str) -> std::result::Result<usize, String> {
    let length: usize = raw
        .parse()
        .map_err(|_| format!("'{raw}' is not a number"))?;
    validate_length(length).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn valid_lengths() {
        assert_eq!(validate_length(1).unwrap(), 1);
        assert_eq!(validate_length(12).unwrap(), 12);
        assert_eq!(validate_length(MAX_LENGTH).unwrap(), MAX_LENGTH);
    }

    #[test]
    fn rejects_zero_length() {
        assert!(validate_length(0).is_err());
    }

    #[test]
    fn rejects_too_long() {
        assert!(validate_length(MAX_LENGTH + 1).is_err());
    }

    #[test]
    fn parse_length_rejects_non_numbers() {
        assert!(parse_length("twelve").is_err());
        assert!(parse_length("-3").is_err());
        assert_eq!(parse_length("16").unwrap(), 16);
    }

    #[test]
    fn data_dir_keeps_absolute_paths() {
        let cli = Cli::parse_from(["credvault", "--data-dir", "/tmp/vault", "info"]);
        assert_eq!(data_dir(&cli).unwrap(), PathBuf::from("/tmp/vault"));
    }
}
