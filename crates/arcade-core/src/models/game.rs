//! Game catalog entry model.

use serde::{Deserialize, Serialize};

/// Unique identifier for a game within a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(pub String);

impl GameId {
    /// Creates a game ID from anything string-like.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for GameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for GameId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for GameId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl PartialEq<str> for GameId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for GameId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// A game listed in the catalog.
///
/// Entries are immutable once loaded. `thumbnail` and `url` are opaque
/// references handed to whatever renders or embeds the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameEntry {
    pub id: GameId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub thumbnail: String,
    pub url: String,
}

impl GameEntry {
    /// Creates a new catalog entry.
    pub fn new(
        id: impl Into<GameId>,
        title: impl Into<String>,
        description: impl Into<String>,
        thumbnail: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            thumbnail: thumbnail.into(),
            url: url.into(),
        }
    }
}
