//! Arcade TUI/CLI client.
//!
//! Browse, search and play games from a catalog.
//!
//! - No arguments: launches interactive TUI
//! - With subcommand: runs CLI command and exits

use anyhow::Result;
use clap::Parser;

mod cli;
mod shared;
mod tui;

use cli::args::{Cli, Commands};
use shared::{config, logging};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (doesn't override existing env vars)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Config commands work without a valid config file, handle separately
    if let Some(Commands::Config(cmd)) = &cli.command {
        logging::init_stderr();
        return cli::commands::config::handle_config_command(cmd.clone());
    }

    match cli.command {
        Some(_) => logging::init_stderr(),
        None => logging::init_file(&config::config_dir()?.join("arcade.log"))?,
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        cli::output::print_warning(&format!("Failed to load config file: {:#}", e));
        None
    });

    let resolved = config::resolve_config(
        cli.profile.as_deref(),
        cli.catalog.as_deref(),
        file_config,
    )?;

    match cli.command {
        Some(cmd) => {
            // CLI mode: run command and exit
            cli::run_command(&resolved, cmd).await
        }
        None => {
            // TUI mode: launch interactive interface
            tui::run(resolved.catalog).await
        }
    }
}
