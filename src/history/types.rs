//! History and search-lifecycle types.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use wordscope_search::ResultRecord;

/// Default number of past searches kept.
pub const HISTORY_CAPACITY: usize = 20;

/// One completed search that produced at least one result.
///
/// Created once, when the search completes; only ever deleted afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHistoryItem {
    /// Unique identifier.
    pub id: String,
    /// Label of the search, `"<search type>: <input>"`.
    pub query: String,
    /// Normalised results, in service order.
    pub results: Vec<ResultRecord>,
    /// When the item was recorded.
    pub timestamp: DateTime<Utc>,
}

/// State of the in-flight or most recent search.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum CurrentSearchState {
    /// No search has run since the last reset.
    #[default]
    Idle,
    /// A search is in flight.
    Loading,
    /// The most recent search completed, possibly with no results.
    Succeeded(Vec<ResultRecord>),
    /// The most recent search failed with a displayable message.
    Failed(String),
}

impl CurrentSearchState {
    /// Whether a search is in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// Handle for one started search, returned by
/// [`HistoryStore::begin`](super::HistoryStore::begin).
///
/// Completions carrying a ticket from a superseded request no longer drive
/// [`CurrentSearchState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestTicket {
    pub(crate) generation: u64,
    pub(crate) label: String,
}

/// Compose the history label `"<tag>: <input>"` for a search.
pub fn query_label(tag: impl fmt::Display, input: &str) -> String {
    format!("{tag}: {}", input.trim())
}
