//! `credvault info`: where things live and which key is in use.

use comfy_table::{ContentArrangement, Table};

use crate::cli::output;
use crate::cli::{data_dir, open_vault, Cli};
use crate::errors::Result;
use crate::vault::Status;

/// Execute the `info` command.
pub fn execute(cli: &Cli) -> Result<()> {
    let dir = data_dir(cli)?;
    let (settings, vault) = open_vault(&dir)?;

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.add_row(vec!["Data directory".to_string(), dir.display().to_string()]);
    table.add_row(vec![
        "Key file".to_string(),
        settings.key_path(&dir).display().to_string(),
    ]);
    table.add_row(vec![
        "Database".to_string(),
        settings.db_path(&dir).display().to_string(),
    ]);
    table.add_row(vec!["Entries".to_string(), vault.count()?.to_string()]);
    table.add_row(vec![
        "Key fingerprint".to_string(),
        vault.fingerprint().to_string(),
    ]);

    output::status(&Status::Idle);
    println!("{table}");
    Ok(())
}
