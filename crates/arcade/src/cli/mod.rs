//! Non-interactive CLI mode.

pub mod args;
pub mod commands;
pub mod output;

use anyhow::{Result, bail};
use arcade_core::catalog::{CatalogStatus, CatalogStore};
use arcade_core::source::{CatalogSource, load_catalog};

use crate::shared::config::ResolvedConfig;
use args::Commands;
use output::{print_key_value, print_warning};

/// Run a CLI command and exit.
pub async fn run_command(config: &ResolvedConfig, command: Commands) -> Result<()> {
    match command {
        Commands::Version => show_version(config),
        Commands::Games(cmd) => commands::games::handle_game_command(config, cmd).await,
        Commands::Config(_) => unreachable!("Config commands handled in main.rs"),
    }
}

/// Fetches the catalog and loads it into a fresh store.
///
/// An unavailable catalog is reported as an error here, since a CLI command
/// has nothing to show without it.
pub async fn load_store(source: &CatalogSource) -> Result<CatalogStore> {
    let mut store = CatalogStore::new();
    store.apply_load(load_catalog(source.fetcher().as_ref()).await);

    match store.status() {
        CatalogStatus::Unavailable { reason } => {
            bail!("Catalog unavailable ({}): {}", source, reason)
        }
        CatalogStatus::Ready { skipped, .. } if *skipped > 0 => {
            print_warning(&format!(
                "Skipped {} malformed catalog record(s).",
                skipped
            ));
        }
        _ => {}
    }

    Ok(store)
}

fn show_version(config: &ResolvedConfig) -> Result<()> {
    print_key_value("Version", arcade_core::VERSION);
    print_key_value("Catalog", &config.catalog.to_string());
    Ok(())
}
