//! `credvault generate`: print or copy a random password.

use zeroize::Zeroizing;

use crate::cli::output;
use crate::cli::{copy_to_clipboard, data_dir, Cli};
use crate::config::Settings;
use crate::crypto::generate_password;
use crate::errors::Result;
use crate::vault::Status;

/// Execute the `generate` command.
pub fn execute(cli: &Cli, length: Option<usize>, copy: bool) -> Result<()> {
    let length = match length {
        Some(n) => n,
        None => Settings::load(&data_dir(cli)?)?.password_length,
    };

    output::status(&Status::Generating);
    let password = Zeroizing::new(generate_password(length));

    if copy {
        copy_to_clipboard(&password)?;
        output::success(&format!("Copied a {length}-character password to the clipboard"));
    } else {
        println!("{}", password.as_str());
    }

    Ok(())
}
