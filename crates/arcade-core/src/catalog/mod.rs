//! Catalog state management: filtering, selection, parsing and observation.

mod filter;
mod parser;
mod state;
mod store;

pub use filter::filter_entries;
pub use parser::{ParsedCatalog, SkippedRecord, parse_catalog};
pub use state::{CatalogState, SelectionMiss, View};
pub use store::{CatalogSnapshot, CatalogStatus, CatalogStore};
