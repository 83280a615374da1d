//! `credvault show`: detail view for one website.

use crate::cli::output;
use crate::cli::{copy_to_clipboard, data_dir, open_vault, Cli};
use crate::errors::{CredVaultError, Result};
use crate::vault::Status;

/// Execute the `show` command.
pub fn execute(cli: &Cli, service: &str, copy: bool) -> Result<()> {
    let dir = data_dir(cli)?;
    let (_, vault) = open_vault(&dir)?;

    let entries = vault.find(service)?;
    let Some(latest) = entries.last() else {
        return Err(CredVaultError::EntryNotFound(service.trim().to_string()));
    };

    output::status(&Status::Viewing);

    if copy {
        copy_to_clipboard(&latest.password)?;
        output::success(&format!(
            "Copied the password for {} ({}) to the clipboard",
            latest.service, latest.username
        ));
    } else {
        output::print_entry_details(&entries);
    }

    if entries.len() > 1 {
        output::info(&format!(
            "{} entries stored for '{}'",
            entries.len(),
            latest.service
        ));
    }

    Ok(())
}
