//! Hands a game's URL to the system browser.
//!
//! The URL is passed through untouched; the catalog treats it as opaque.

use anyhow::{Context, Result};
use arcade_core::models::GameEntry;

/// Opens the game in the default browser without waiting for it to exit.
pub fn open_game(entry: &GameEntry) -> Result<()> {
    tracing::info!(id = %entry.id, url = %entry.url, "Opening game");
    open::that_detached(&entry.url)
        .with_context(|| format!("Failed to open {} in a browser", entry.url))
}
