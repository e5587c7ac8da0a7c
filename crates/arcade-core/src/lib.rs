//! Arcade Core Library
//!
//! Game catalog model, catalog loading, and the catalog state manager shared by
//! the Arcade TUI and CLI.

pub mod catalog;
pub mod error;
pub mod models;
pub mod source;

pub use catalog::{CatalogSnapshot, CatalogState, CatalogStatus, CatalogStore, View};
pub use error::{ArcadeError, Result};
pub use models::{GameEntry, GameId};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
