//! Command-line argument definitions.

use clap::{Parser, Subcommand};

/// Arcade game catalog.
///
/// Run without arguments to launch interactive TUI mode.
/// Run with a subcommand for non-interactive CLI mode.
#[derive(Parser)]
#[command(name = "arcade")]
#[command(version = arcade_core::VERSION)]
#[command(about = "Browse, search and play web games from a catalog", long_about = None)]
pub struct Cli {
    /// Configuration profile to use
    #[arg(long, global = true)]
    pub profile: Option<String>,

    /// Catalog source: "bundled", an http(s) URL, or a JSON file path
    #[arg(long, global = true)]
    pub catalog: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands.
#[derive(Subcommand, Clone)]
pub enum Commands {
    /// Show version and the catalog in use
    Version,

    /// Browse and play games
    #[command(subcommand)]
    Games(GameCommands),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommands),
}

/// Game subcommands.
#[derive(Subcommand, Clone)]
pub enum GameCommands {
    /// List games, optionally filtered
    List {
        /// Only show games whose title or description contains this text
        #[arg(long, short)]
        query: Option<String>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Search games by title or description
    Search {
        /// Text to look for (case-insensitive)
        text: String,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show game details
    Show {
        /// Game ID
        id: String,
    },

    /// Open a game in the browser
    Play {
        /// Game ID
        id: String,
    },
}

/// Configuration subcommands.
#[derive(Subcommand, Clone)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// List available profiles
    Profiles,

    /// Initialize a new config file
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },

    /// Show config file path
    Path,
}
