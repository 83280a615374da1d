use clap::Parser;
use tracing_subscriber::EnvFilter;

use credvault::cli::{Cli, Commands};
use credvault::vault::Status;

fn main() {
    // RUST_LOG=credvault=debug for verbose output. Secrets are never logged.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("credvault=warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Add {
            ref service,
            ref username,
            generate,
            length,
        } => credvault::cli::commands::add::execute(
            &cli,
            service.as_deref(),
            username.as_deref(),
            generate,
            length,
        ),
        Commands::List { reveal } => credvault::cli::commands::list::execute(&cli, reveal),
        Commands::Show { ref service, copy } => {
            credvault::cli::commands::show::execute(&cli, service, copy)
        }
        Commands::Generate { length, copy } => {
            credvault::cli::commands::generate::execute(&cli, length, copy)
        }
        Commands::Info => credvault::cli::commands::info::execute(&cli),
        Commands::Completions { shell } => credvault::cli::commands::completions::execute(shell),
    };

    if let Err(e) = result {
        let status = Status::from_error(&e);
        credvault::cli::output::status(&status);
        if status == Status::FieldsMissing {
            credvault::cli::output::error(&e.to_string());
        }
        std::process::exit(1);
    }
}
