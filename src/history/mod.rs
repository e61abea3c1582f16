//! Search history and the lifecycle of the current search.
//!
//! [`HistoryStore`] is an explicit container; whoever drives searches holds
//! it and applies transitions. [`load`] and [`save`] keep the log on disk
//! between runs as a JSON array, most recent first.

mod store;
mod types;

pub use store::HistoryStore;
pub use types::{
    CurrentSearchState, HISTORY_CAPACITY, RequestTicket, SearchHistoryItem, query_label,
};

use std::path::Path;

use crate::error::{Result, WordscopeError};

/// Load a persisted log into a fresh store with `capacity`.
///
/// A missing file yields an empty store. So does an unreadable or corrupt
/// one, with a warning; the next [`save`] replaces it.
pub fn load(path: &Path, capacity: usize) -> HistoryStore {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return HistoryStore::with_capacity(capacity);
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "cannot read search history");
            return HistoryStore::with_capacity(capacity);
        }
    };
    match serde_json::from_slice::<Vec<SearchHistoryItem>>(&bytes) {
        Ok(items) => HistoryStore::from_items(items, capacity),
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "discarding corrupt search history"
            );
            HistoryStore::with_capacity(capacity)
        }
    }
}

/// Persist the log of `store` to `path`.
///
/// # Errors
///
/// Returns [`WordscopeError::Storage`] if serialization fails, or an I/O
/// error if the file cannot be written.
pub fn save(store: &HistoryStore, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(store.items())
        .map_err(|e| WordscopeError::Storage(format!("cannot serialize search history: {e}")))?;
    crate::storage::write_atomic(path, &json)
}
