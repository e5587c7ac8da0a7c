//! Text filtering over catalog entries.
//!
//! An entry matches when its case-folded title or case-folded description
//! contains the case-folded query as a substring. Matches keep catalog order.

use crate::models::GameEntry;

/// Returns the entries matching `query`, in catalog order.
///
/// An empty query matches every entry.
pub fn filter_entries<'a>(entries: &'a [GameEntry], query: &str) -> Vec<&'a GameEntry> {
    if query.is_empty() {
        return entries.iter().collect();
    }

    let needle = query.to_lowercase();
    entries
        .iter()
        .filter(|entry| matches_folded(entry, &needle))
        .collect()
}

fn matches_folded(entry: &GameEntry, needle: &str) -> bool {
    entry.title.to_lowercase().contains(needle)
        || entry.description.to_lowercase().contains(needle)
}
