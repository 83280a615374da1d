//! `credvault list`: decrypt and display every stored credential.

use crate::cli::output;
use crate::cli::{data_dir, open_vault, Cli};
use crate::errors::Result;
use crate::vault::Status;

/// Execute the `list` command.
pub fn execute(cli: &Cli, reveal: bool) -> Result<()> {
    let dir = data_dir(cli)?;
    let (_, vault) = open_vault(&dir)?;

    let entries = vault.list_all()?;

    output::status(&Status::Viewing);
    if reveal && !entries.is_empty() {
        output::warning("Passwords are shown in clear text.");
    }
    output::print_entries_table(&entries, reveal);

    if !reveal && !entries.is_empty() {
        output::tip("Pass --reveal to show passwords.");
    }

    Ok(())
}
