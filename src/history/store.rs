//! The history/current-search state container.

use std::fmt;

use chrono::Utc;

use wordscope_search::ResultRecord;

use super::types::{
    CurrentSearchState, HISTORY_CAPACITY, RequestTicket, SearchHistoryItem, query_label,
};

/// Bounded, most-recent-first log of completed searches plus the state of
/// the in-flight or latest search.
///
/// The log is changed only by [`append`](Self::append),
/// [`remove`](Self::remove) and [`clear`](Self::clear); the current state
/// only by [`begin`](Self::begin), [`succeed`](Self::succeed),
/// [`fail`](Self::fail) and [`reset`](Self::reset).
///
/// Overlapping searches resolve last-initiated-wins: every `begin` issues a
/// new [`RequestTicket`], and completions for an older ticket leave the
/// current state alone. A stale success still lands in the log, since it is
/// a completed search.
#[derive(Debug, Clone)]
pub struct HistoryStore {
    items: Vec<SearchHistoryItem>,
    capacity: usize,
    current: CurrentSearchState,
    generation: u64,
}

impl Default for HistoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryStore {
    /// Empty store with the default capacity of 20.
    pub fn new() -> Self {
        Self::with_capacity(HISTORY_CAPACITY)
    }

    /// Empty store keeping at most `capacity` items (at least one).
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::new(),
            capacity: capacity.max(1),
            current: CurrentSearchState::Idle,
            generation: 0,
        }
    }

    /// Store seeded with previously persisted items, most recent first.
    /// Items beyond `capacity` are dropped.
    pub fn from_items(mut items: Vec<SearchHistoryItem>, capacity: usize) -> Self {
        let mut store = Self::with_capacity(capacity);
        items.truncate(store.capacity);
        store.items = items;
        store
    }

    /// Maximum number of items kept.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Items, most recent first.
    pub fn items(&self) -> &[SearchHistoryItem] {
        &self.items
    }

    /// Item with the given id.
    pub fn get(&self, id: &str) -> Option<&SearchHistoryItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the log is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Record a completed search at the head, evicting the oldest items
    /// beyond capacity. Returns the new item.
    pub fn append(
        &mut self,
        query: impl Into<String>,
        results: Vec<ResultRecord>,
    ) -> &SearchHistoryItem {
        let item = SearchHistoryItem {
            id: uuid::Uuid::new_v4().to_string(),
            query: query.into(),
            results,
            timestamp: Utc::now(),
        };
        tracing::debug!(id = %item.id, count = item.results.len(), "history item recorded");
        self.items.insert(0, item);
        self.items.truncate(self.capacity);
        &self.items[0]
    }

    /// Delete the item with `id`. Returns whether anything was removed;
    /// removing a missing id changes nothing.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        before != self.items.len()
    }

    /// Delete every item.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// State of the in-flight or latest search.
    pub fn current(&self) -> &CurrentSearchState {
        &self.current
    }

    /// Mark a search for `tag` as started. Any earlier in-flight search is
    /// superseded.
    pub fn begin(&mut self, tag: impl fmt::Display, input: &str) -> RequestTicket {
        self.generation += 1;
        self.current = CurrentSearchState::Loading;
        RequestTicket {
            generation: self.generation,
            label: query_label(tag, input),
        }
    }

    /// Complete the search identified by `ticket` successfully.
    ///
    /// Non-empty results are appended to the log. Returns whether the
    /// current state was updated, i.e. the ticket was still the latest.
    pub fn succeed(&mut self, ticket: RequestTicket, results: Vec<ResultRecord>) -> bool {
        let latest = self.is_latest(&ticket);
        if latest {
            self.current = CurrentSearchState::Succeeded(results.clone());
        } else {
            tracing::debug!(generation = ticket.generation, "ignoring stale search result");
        }
        if !results.is_empty() {
            self.append(ticket.label, results);
        }
        latest
    }

    /// Complete the search identified by `ticket` with a failure. Returns
    /// whether the current state was updated.
    pub fn fail(&mut self, ticket: RequestTicket, message: impl Into<String>) -> bool {
        if !self.is_latest(&ticket) {
            tracing::debug!(generation = ticket.generation, "ignoring stale search failure");
            return false;
        }
        self.current = CurrentSearchState::Failed(message.into());
        true
    }

    /// Return the current state to idle. In-flight searches no longer
    /// affect it when they complete.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.current = CurrentSearchState::Idle;
    }

    fn is_latest(&self, ticket: &RequestTicket) -> bool {
        ticket.generation == self.generation && self.current.is_loading()
    }
}
