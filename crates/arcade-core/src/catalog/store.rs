//! Observable wrapper around [`CatalogState`].
//!
//! The view root owns a [`CatalogStore`] and drives every transition through
//! it. Observers hold a `watch::Receiver<CatalogSnapshot>` and re-read the
//! store when the revision changes.

use tokio::sync::watch;

use super::parser::ParsedCatalog;
use super::state::{CatalogState, SelectionMiss, View};
use crate::error::Result;
use crate::models::GameEntry;

/// Availability of the catalog as seen by the view layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogStatus {
    /// The first load has not completed yet.
    Loading,
    /// Entries are loaded. `skipped` counts malformed records left out.
    Ready { games: usize, skipped: usize },
    /// Fetching or parsing the catalog failed.
    Unavailable { reason: String },
}

impl CatalogStatus {
    pub fn is_ready(&self) -> bool {
        matches!(self, CatalogStatus::Ready { .. })
    }
}

/// What subscribers receive after each state change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogSnapshot {
    pub status: CatalogStatus,
    /// Bumped on every change to entries, query, selection or status.
    pub revision: u64,
}

/// Catalog state plus change notification.
#[derive(Debug)]
pub struct CatalogStore {
    state: CatalogState,
    status: CatalogStatus,
    revision: u64,
    tx: watch::Sender<CatalogSnapshot>,
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogStore {
    /// Creates an empty store in the `Loading` status.
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(CatalogSnapshot {
            status: CatalogStatus::Loading,
            revision: 0,
        });
        Self {
            state: CatalogState::new(),
            status: CatalogStatus::Loading,
            revision: 0,
            tx,
        }
    }

    /// Subscribes to change notifications.
    pub fn subscribe(&self) -> watch::Receiver<CatalogSnapshot> {
        self.tx.subscribe()
    }

    pub fn state(&self) -> &CatalogState {
        &self.state
    }

    pub fn status(&self) -> &CatalogStatus {
        &self.status
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Applies the outcome of a catalog fetch.
    ///
    /// On failure the loaded entries are left as they were (empty on the
    /// first load) and the status becomes `Unavailable`. Never returns an
    /// error.
    pub fn apply_load(&mut self, result: Result<ParsedCatalog>) {
        match result {
            Ok(parsed) => {
                let skipped = parsed.skipped.len();
                let dropped = self.state.load(parsed.entries);
                self.status = CatalogStatus::Ready {
                    games: self.state.len(),
                    skipped: skipped + dropped,
                };
                tracing::info!(games = self.state.len(), skipped, "Catalog ready");
            }
            Err(e) => {
                tracing::error!(error = %e, "Catalog unavailable");
                self.status = CatalogStatus::Unavailable {
                    reason: e.to_string(),
                };
            }
        }
        self.publish();
    }

    /// Loads entries directly, bypassing fetch and parse.
    pub fn load(&mut self, entries: Vec<GameEntry>) {
        let dropped = self.state.load(entries);
        self.status = CatalogStatus::Ready {
            games: self.state.len(),
            skipped: dropped,
        };
        self.publish();
    }

    pub fn set_query(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text != self.state.query() {
            self.state.set_query(text);
            self.publish();
        }
    }

    /// Selects a game. A miss leaves the selection as it was and publishes
    /// nothing; re-selecting the current game publishes nothing either.
    pub fn select(&mut self, id: &str) -> std::result::Result<(), SelectionMiss> {
        let changed = self.state.selected().is_none_or(|current| current.id != id);
        self.state.select(id)?;
        if changed {
            self.publish();
        }
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        if self.state.selected().is_some() {
            self.state.clear_selection();
            self.publish();
        }
    }

    pub fn visible_entries(&self) -> Vec<&GameEntry> {
        self.state.visible_entries()
    }

    pub fn selected(&self) -> Option<&GameEntry> {
        self.state.selected()
    }

    pub fn query(&self) -> &str {
        self.state.query()
    }

    pub fn view(&self) -> View<'_> {
        self.state.view()
    }

    fn publish(&mut self) {
        self.revision += 1;
        self.tx.send_replace(CatalogSnapshot {
            status: self.status.clone(),
            revision: self.revision,
        });
    }
}
