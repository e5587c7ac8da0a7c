//! Application state.

use arcade_core::Result;
use arcade_core::catalog::{CatalogSnapshot, CatalogStore, ParsedCatalog, View};
use arcade_core::models::GameEntry;
use arcade_core::source::CatalogSource;
use tokio::sync::watch;

use super::events::{Action, Focus};

/// Side effects the main loop performs on behalf of the app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Open this game in the browser.
    Launch(GameEntry),
    /// Fetch the catalog again.
    Reload,
}

/// One-line message for the footer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Info(String),
    Error(String),
}

/// Main application state.
pub struct App {
    /// Catalog, query and selection.
    pub store: CatalogStore,

    /// Where the catalog is loaded from.
    pub source: CatalogSource,

    /// Revision feed from the store.
    updates: watch::Receiver<CatalogSnapshot>,

    /// Highlighted row in the visible list.
    pub cursor: usize,

    /// Whether the search box has focus.
    pub searching: bool,

    /// Whether the player fills the whole screen.
    pub fullscreen: bool,

    /// Whether the application should quit.
    pub should_quit: bool,

    /// Whether to show the help overlay.
    pub show_help: bool,

    /// Last message worth showing in the footer.
    pub notice: Option<Notice>,
}

impl App {
    /// Create a new application instance with an empty, loading catalog.
    pub fn new(source: CatalogSource) -> Self {
        let store = CatalogStore::new();
        let updates = store.subscribe();
        Self {
            store,
            source,
            updates,
            cursor: 0,
            searching: false,
            fullscreen: false,
            should_quit: false,
            show_help: false,
            notice: None,
        }
    }

    /// Which part of the UI currently receives keys.
    pub fn focus(&self) -> Focus {
        if self.show_help {
            Focus::Help
        } else if !self.store.view().is_browsing() {
            Focus::Player
        } else if self.searching {
            Focus::Search
        } else {
            Focus::Grid
        }
    }

    /// Hands a finished catalog fetch to the store.
    pub fn on_catalog_loaded(&mut self, result: Result<ParsedCatalog>) {
        if let Err(e) = &result {
            self.notice = Some(Notice::Error(format!("Could not load catalog: {}", e)));
        } else {
            self.notice = None;
        }
        self.store.apply_load(result);
        self.sync();
    }

    /// Reacts to store changes: keeps the cursor inside the visible list
    /// and leaves fullscreen once nothing is being played.
    pub fn sync(&mut self) {
        if !self.updates.has_changed().unwrap_or(false) {
            return;
        }
        self.updates.borrow_and_update();

        let visible = self.store.visible_entries().len();
        self.cursor = self.cursor.min(visible.saturating_sub(1));

        if self.store.view().is_browsing() {
            self.fullscreen = false;
        }
    }

    /// The game under the cursor, if the visible list is not empty.
    pub fn highlighted(&self) -> Option<&GameEntry> {
        self.store.visible_entries().get(self.cursor).copied()
    }

    /// Applies an action and returns any effect the caller must perform.
    pub fn apply(&mut self, action: Action) -> Option<Effect> {
        let effect = match action {
            Action::Quit => {
                self.should_quit = true;
                None
            }
            Action::ToggleHelp => {
                self.show_help = !self.show_help;
                None
            }
            Action::CloseHelp => {
                self.show_help = false;
                None
            }
            Action::FocusSearch => {
                self.searching = true;
                None
            }
            Action::BlurSearch => {
                self.searching = false;
                None
            }
            Action::SearchInput(c) => {
                let mut query = self.store.query().to_string();
                query.push(c);
                self.set_query(query);
                None
            }
            Action::SearchBackspace => {
                let mut query = self.store.query().to_string();
                query.pop();
                self.set_query(query);
                None
            }
            Action::ClearSearch => {
                self.set_query(String::new());
                None
            }
            Action::MoveUp => {
                self.cursor = self.cursor.saturating_sub(1);
                None
            }
            Action::MoveDown => {
                let last = self.store.visible_entries().len().saturating_sub(1);
                self.cursor = (self.cursor + 1).min(last);
                None
            }
            Action::SelectHighlighted => {
                if let Some(id) = self.highlighted().map(|entry| entry.id.clone()) {
                    // The id comes from the visible list, so a miss means the
                    // catalog changed underneath us; nothing to do then.
                    let _ = self.store.select(id.as_str());
                    self.searching = false;
                }
                None
            }
            Action::Home => {
                self.store.clear_selection();
                self.fullscreen = false;
                None
            }
            Action::ToggleFullscreen => {
                if !self.store.view().is_browsing() {
                    self.fullscreen = !self.fullscreen;
                }
                None
            }
            Action::OpenInBrowser => match self.store.view() {
                View::Viewing(entry) => Some(Effect::Launch(entry.clone())),
                View::Browsing => None,
            },
            Action::Reload => {
                self.notice = Some(Notice::Info(format!("Reloading {}...", self.source)));
                Some(Effect::Reload)
            }
        };

        self.sync();
        effect
    }

    fn set_query(&mut self, query: String) {
        self.store.set_query(query);
        self.cursor = 0;
    }
}
