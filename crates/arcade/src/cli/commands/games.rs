//! Game command handlers.

use anyhow::{Context, Result};
use arcade_core::ArcadeError;
use arcade_core::catalog::CatalogStore;
use arcade_core::models::GameEntry;

use crate::cli::args::GameCommands;
use crate::cli::load_store;
use crate::cli::output::{
    print_info, print_key_value, print_success, print_table_header, print_table_row,
};
use crate::shared::config::ResolvedConfig;
use crate::shared::launch::open_game;

/// Handle game subcommands.
pub async fn handle_game_command(config: &ResolvedConfig, cmd: GameCommands) -> Result<()> {
    let mut store = load_store(&config.catalog).await?;

    match cmd {
        GameCommands::List { query, json } => {
            if let Some(query) = query {
                store.set_query(query);
            }
            list_games(&store, json)
        }
        GameCommands::Search { text, json } => {
            store.set_query(text);
            list_games(&store, json)
        }
        GameCommands::Show { id } => {
            let entry = select(&mut store, &id)?;
            print_game(entry);
            Ok(())
        }
        GameCommands::Play { id } => {
            let entry = select(&mut store, &id)?;
            open_game(entry)?;
            print_success(&format!("Opened {} in your browser", entry.title));
            Ok(())
        }
    }
}

/// Selects a game, turning a selection miss into a user-facing error.
fn select<'a>(store: &'a mut CatalogStore, id: &str) -> Result<&'a GameEntry> {
    store
        .select(id)
        .map_err(|_| ArcadeError::GameNotFound(id.to_string()))?;
    store
        .selected()
        .with_context(|| format!("Selection of {} was not retained", id))
}

fn list_games(store: &CatalogStore, json: bool) -> Result<()> {
    let visible = store.visible_entries();

    if json {
        println!("{}", serde_json::to_string_pretty(&visible)?);
        return Ok(());
    }

    if visible.is_empty() {
        if store.query().is_empty() {
            println!("The catalog is empty.");
        } else {
            println!("No games found matching '{}'.", store.query());
        }
        return Ok(());
    }

    print_table_header(&[("ID", 16), ("TITLE", 24), ("DESCRIPTION", 48)]);

    for game in &visible {
        print_table_row(&[
            (game.id.as_str(), 16),
            (&game.title, 24),
            (&game.description, 48),
        ]);
    }

    println!();
    print_info(&format!("{} of {} games", visible.len(), store.state().len()));

    Ok(())
}

fn print_game(game: &GameEntry) {
    print_key_value("ID", game.id.as_str());
    print_key_value("Title", &game.title);
    print_key_value(
        "Description",
        if game.description.is_empty() {
            "-"
        } else {
            game.description.as_str()
        },
    );
    print_key_value("Thumbnail", &game.thumbnail);
    print_key_value("URL", &game.url);
}
