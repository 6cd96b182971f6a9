//! Hotseat - unified CLI

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use hotseat::{Cli, Command, LogSink, Settings, init_tracing, replay, tui};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file (RUST_LOG and friends)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = Settings::load(cli.config.as_deref())?;

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => {
            let theme = settings.theme()?;
            if !cli.no_log {
                init_tracing(settings.log_filter(), LogSink::File(settings.log_file()))?;
            }
            info!(?settings, "Settings resolved");
            tui::run(theme)
        }
        Command::Replay { moves, json } => {
            if !cli.no_log {
                init_tracing(settings.log_filter(), LogSink::Stderr)?;
            }
            replay::run(&moves, json, &mut std::io::stdout().lock())
        }
    }
}
