//! Colored terminal output helpers.
//!
//! Decrypted data goes to stdout; status lines and messages go to stderr
//! so piping `credvault generate` or `credvault show` yields only data.

use comfy_table::{ContentArrangement, Table};
use console::style;

use crate::vault::{Entry, Status, Tone};

/// Shown in place of a password when it is not revealed.
const MASK: &str = "********";

/// Print a green success message: "check_mark {msg}"
pub fn success(msg: &str) {
    eprintln!("{} {}", style("\u{2713}").green().bold(), msg);
}

/// Print a red error message: "x_mark {msg}"
pub fn error(msg: &str) {
    eprintln!("{} {}", style("\u{2717}").red().bold(), msg);
}

/// Print a yellow warning: "warning_sign {msg}"
pub fn warning(msg: &str) {
    eprintln!("{} {}", style("\u{26a0}").yellow().bold(), msg);
}

/// Print a blue info message: "info_sign {msg}"
pub fn info(msg: &str) {
    eprintln!("{} {}", style("\u{2139}").blue().bold(), msg);
}

/// Print a dim tip/hint: "arrow {msg}"
pub fn tip(msg: &str) {
    eprintln!("{} {}", style("\u{2192}").dim(), style(msg).dim());
}

/// Print the status line for the last operation, styled by its tone.
pub fn status(status: &Status) {
    let text = status.to_string();
    let styled = match status.tone() {
        Tone::Neutral => style(text).dim(),
        Tone::Info => style(text).cyan(),
        Tone::Success => style(text).green().bold(),
        Tone::Primary => style(text).blue().bold(),
        Tone::Danger => style(text).red().bold(),
    };
    if status.is_failure() {
        eprintln!("{} {styled}", style("\u{2717}").red().bold());
    } else {
        eprintln!("{styled}");
    }
}

/// Print stored entries as a table (#, Website, Email/Username, Password).
pub fn print_entries_table(entries: &[Entry], reveal: bool) {
    if entries.is_empty() {
        info("No credentials stored yet.");
        tip("Run `credvault add` to store your first password.");
        return;
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Website", "Email/Username", "Password"]);

    for e in entries {
        let password = if reveal { e.password.as_str() } else { MASK };
        table.add_row(vec![
            e.id.to_string(),
            e.service.clone(),
            e.username.clone(),
            password.to_string(),
        ]);
    }

    println!("{table}");
}

/// Print the detail view of the entries stored for one service.
pub fn print_entry_details(entries: &[Entry]) {
    for e in entries {
        println!("{}", style(&e.service).bold());
        println!("  {} {}", style(format!("{:<16}", "Email/Username")).dim(), e.username);
        println!("  {} {}", style(format!("{:<16}", "Password")).dim(), e.password.as_str());
    }
}
