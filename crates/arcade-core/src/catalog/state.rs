//! Catalog state manager.
//!
//! Owns the loaded entries, the current search query and the current
//! selection. The methods on [`CatalogState`] are the only way to change any
//! of them.

use std::collections::HashSet;

use thiserror::Error;

use super::filter::filter_entries;
use crate::models::{GameEntry, GameId};

/// `select` was called with an id that is not in the catalog.
///
/// Usually means the caller is holding a stale reference. The selection is
/// left as it was.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("No game with id {id} in the catalog")]
pub struct SelectionMiss {
    pub id: GameId,
}

/// What the view layer should currently show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View<'a> {
    /// No game selected; show the (filtered) catalog.
    Browsing,
    /// A game is selected; show the player for it.
    Viewing(&'a GameEntry),
}

impl View<'_> {
    pub fn is_browsing(&self) -> bool {
        matches!(self, View::Browsing)
    }
}

/// Catalog entries plus query and selection.
#[derive(Debug, Clone, Default)]
pub struct CatalogState {
    entries: Vec<GameEntry>,
    query: String,
    /// Index into `entries`. Entries never change between loads, so the
    /// index stays valid until the next `load`, which clears it.
    selected: Option<usize>,
}

impl CatalogState {
    /// Creates an empty catalog in the browsing state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the catalog and resets query and selection.
    ///
    /// Ids are expected to be unique. When they are not, the first entry with
    /// a given id wins and later ones are dropped. Returns how many entries
    /// were dropped that way.
    pub fn load(&mut self, entries: Vec<GameEntry>) -> usize {
        let offered = entries.len();
        let mut seen = HashSet::with_capacity(offered);
        let entries: Vec<GameEntry> = entries
            .into_iter()
            .filter(|entry| seen.insert(entry.id.clone()))
            .collect();
        let dropped = offered - entries.len();

        if dropped > 0 {
            tracing::warn!(dropped, "Dropped catalog entries with duplicate ids");
        }

        self.entries = entries;
        self.query.clear();
        self.selected = None;

        tracing::debug!(games = self.entries.len(), "Catalog loaded");
        dropped
    }

    /// Replaces the search query. Any text is accepted.
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
    }

    /// Selects the entry with the given id.
    ///
    /// On a miss the selection is unchanged and the miss is returned to the
    /// caller, who is free to ignore it.
    pub fn select(&mut self, id: &str) -> Result<&GameEntry, SelectionMiss> {
        match self.entries.iter().position(|entry| entry.id == id) {
            Some(index) => {
                self.selected = Some(index);
                Ok(&self.entries[index])
            }
            None => {
                tracing::debug!(id, "Selection miss");
                Err(SelectionMiss {
                    id: GameId::new(id),
                })
            }
        }
    }

    /// Returns to browsing. Calling it while already browsing is a no-op.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Entries matching the current query, in catalog order.
    ///
    /// Recomputed on every call.
    pub fn visible_entries(&self) -> Vec<&GameEntry> {
        filter_entries(&self.entries, &self.query)
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn selected(&self) -> Option<&GameEntry> {
        self.selected.map(|index| &self.entries[index])
    }

    pub fn view(&self) -> View<'_> {
        match self.selected() {
            Some(entry) => View::Viewing(entry),
            None => View::Browsing,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
