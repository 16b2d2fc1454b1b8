//! `folio` - command-line front end for the Folio portfolio.
//!
//! Sends contact messages (falling back to the local mail client), checks
//! the backend's email setup, and manages the persisted 3D scene choice.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod cli;
mod commands;
mod output;

use std::process::ExitCode;

use clap::Parser;
use folio_core::ContactForm;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // Logs go to stderr so stdout stays parseable with --json
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "folio=info,folio_core=info,folio_backend=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = cli.config();
    debug!(?config, "Loaded configuration");

    match cli.command {
        Commands::Send {
            name,
            email,
            message,
            no_open,
        } => {
            let form = ContactForm::new(name, email, message);
            commands::send(&config, form, !no_open, cli.json).await
        }
        Commands::Health => commands::health(&config, cli.json).await,
        Commands::Scene { command } => {
            commands::scene(&config, &command, cli.json)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
