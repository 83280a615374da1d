//! `credvault add`: encrypt and store a new credential.

use std::io::{self, IsTerminal, Read};

use zeroize::Zeroizing;

use crate::cli::output;
use crate::cli::{data_dir, Cli};
use crate::config::Settings;
use crate::crypto::generate_password;
use crate::errors::{CredVaultError, Result};
use crate::vault::{CredentialVault, NewEntry, Status};

/// Execute the `add` command.
pub fn execute(
    cli: &Cli,
    service: Option<&str>,
    username: Option<&str>,
    generate: bool,
    length: Option<usize>,
) -> Result<()> {
    let dir = data_dir(cli)?;

    let service = match service {
        Some(s) => s.to_string(),
        None => prompt_field("Website")?,
    };
    let username = match username {
        Some(u) => u.to_string(),
        None => prompt_field("Email/Username")?,
    };

    let settings = Settings::load(&dir)?;

    // The password comes from one of three sources.
    let password = if generate {
        // Source 1: Generated.
        output::status(&Status::Generating);
        Zeroizing::new(generate_password(
            length.unwrap_or(settings.password_length),
        ))
    } else if !io::stdin().is_terminal() {
        // Source 2: Piped input (stdin is not a terminal).
        let mut buf = Zeroizing::new(String::new());
        io::stdin().read_to_string(&mut buf)?;
        Zeroizing::new(buf.trim_end().to_string())
    } else {
        // Source 3: Interactive secure prompt (default).
        let pw = dialoguer::Password::new()
            .with_prompt("Password")
            .allow_empty_password(true)
            .interact()
            .map_err(|e| CredVaultError::CommandFailed(format!("password prompt: {e}")))?;
        Zeroizing::new(pw)
    };

    // Validate before opening so a rejected entry leaves no key or database behind.
    let entry = NewEntry::new(&service, &username, &password)?;

    let mut vault = CredentialVault::open(&settings.key_path(&dir), &settings.db_path(&dir))?;
    vault.insert(std::slice::from_ref(&entry))?;

    output::status(&Status::Submitted);
    output::success(&format!(
        "Stored credentials for '{}' ({} total)",
        entry.service(),
        vault.count()?
    ));
    if generate {
        output::tip(&format!("Run `credvault show {}` to see the password.", entry.service()));
    }

    Ok(())
}

/// Prompt for a plain text field. Empty answers are passed through so the
/// vault's validation produces the status message.
fn prompt_field(label: &str) -> Result<String> {
    dialoguer::Input::<String>::new()
        .with_prompt(label)
        .allow_empty(true)
        .interact_text()
        .map_err(|e| CredVaultError::CommandFailed(format!("{label} prompt: {e}")))
}
