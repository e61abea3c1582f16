//! Session-gated search surface.
//!
//! [`Dashboard`] wires the [`SessionGuard`], the [`SearchService`] and the
//! [`HistoryStore`] together: every search and history operation first
//! checks the session, then drives the store through its transitions.

use std::path::PathBuf;

use wordscope_search::{
    HttpTransport, SearchOutcome, SearchService, SearchTag, SearchType, WordTransport,
};

use crate::config::AppConfig;
use crate::error::{Result, WordscopeError};
use crate::history::{self, CurrentSearchState, HistoryStore, SearchHistoryItem};
use crate::session::SessionGuard;
use crate::storage::{FileStore, KeyValueStore};

/// The authenticated search and history surfaces.
#[derive(Debug)]
pub struct Dashboard<S, T> {
    guard: SessionGuard<S>,
    service: SearchService<T>,
    history: HistoryStore,
    history_path: Option<PathBuf>,
}

impl Dashboard<FileStore, HttpTransport> {
    /// Dashboard over the default on-disk storage and the HTTP transport.
    ///
    /// History is loaded from [`crate::wordscope_dirs::history_file`] when
    /// `config.history.persist` is set.
    ///
    /// # Errors
    ///
    /// Returns an error if the config is invalid, the HTTP client cannot be
    /// built, or persisted history cannot be read.
    pub fn open(config: &AppConfig) -> Result<Self> {
        config.validate()?;
        let guard = SessionGuard::new(FileStore::open_default(), config.session.clone());
        let service = SearchService::new(HttpTransport::new(&config.search)?, config.search.clone())?;

        if config.history.persist {
            let path = crate::wordscope_dirs::history_file();
            let store = history::load(&path, config.history.capacity);
            Ok(Self::new(guard, service, store).with_history_file(path))
        } else {
            let store = HistoryStore::with_capacity(config.history.capacity);
            Ok(Self::new(guard, service, store))
        }
    }
}

impl<S: KeyValueStore, T: WordTransport> Dashboard<S, T> {
    /// Assemble a dashboard from its parts. History stays in memory unless
    /// [`with_history_file`](Self::with_history_file) is used.
    pub fn new(guard: SessionGuard<S>, service: SearchService<T>, history: HistoryStore) -> Self {
        Self {
            guard,
            service,
            history,
            history_path: None,
        }
    }

    /// Persist history to `path` after every change.
    #[must_use]
    pub fn with_history_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.history_path = Some(path.into());
        self
    }

    /// The session guard, for login and logout.
    pub fn session(&self) -> &SessionGuard<S> {
        &self.guard
    }

    /// Run one search and record its outcome.
    ///
    /// The current state goes to loading, then to succeeded or failed.
    /// A success with at least one result is appended to history as
    /// `"<search type>: <input>"`.
    ///
    /// # Errors
    ///
    /// Returns [`WordscopeError::Unauthenticated`] without searching when no
    /// valid session exists. Search failures are reported in the returned
    /// outcome; a history file that cannot be written is logged.
    pub async fn search(&mut self, search_type: SearchType, input: &str) -> Result<SearchOutcome> {
        self.run(SearchTag::Known(search_type), input).await
    }

    /// [`search`](Self::search) for a tag given as a string.
    ///
    /// Unknown tags are searched as similar-meaning and recorded under
    /// their own name.
    ///
    /// # Errors
    ///
    /// Same as [`search`](Self::search).
    pub async fn search_tag(&mut self, tag: &str, input: &str) -> Result<SearchOutcome> {
        self.run(SearchTag::from_tag(tag), input).await
    }

    async fn run(&mut self, tag: SearchTag, input: &str) -> Result<SearchOutcome> {
        self.require_session()?;

        let ticket = self.history.begin(&tag, input);
        let outcome = self.service.execute_tagged(&tag, input).await;
        match &outcome {
            SearchOutcome::Success(records) => {
                let recorded = !records.is_empty();
                self.history.succeed(ticket, records.clone());
                if recorded {
                    if let Err(err) = self.persist() {
                        tracing::warn!(error = %err, "cannot save search history");
                    }
                }
            }
            SearchOutcome::Failure(message) => {
                self.history.fail(ticket, message.clone());
            }
        }
        Ok(outcome)
    }

    /// State of the in-flight or latest search.
    pub fn current(&self) -> &CurrentSearchState {
        self.history.current()
    }

    /// Tear down the search surface: the current state returns to idle.
    pub fn leave(&mut self) {
        self.history.reset();
    }

    /// Past searches, most recent first.
    ///
    /// # Errors
    ///
    /// Returns [`WordscopeError::Unauthenticated`] without a valid session.
    pub fn history(&self) -> Result<&[SearchHistoryItem]> {
        self.require_session()?;
        Ok(self.history.items())
    }

    /// One past search by id.
    ///
    /// # Errors
    ///
    /// Returns [`WordscopeError::Unauthenticated`] without a valid session.
    pub fn history_item(&self, id: &str) -> Result<Option<&SearchHistoryItem>> {
        self.require_session()?;
        Ok(self.history.get(id))
    }

    /// Delete one past search. Returns whether it existed.
    ///
    /// # Errors
    ///
    /// Returns [`WordscopeError::Unauthenticated`] without a valid session,
    /// or a storage error if history cannot be saved.
    pub fn remove_history(&mut self, id: &str) -> Result<bool> {
        self.require_session()?;
        let removed = self.history.remove(id);
        if removed {
            self.persist()?;
        }
        Ok(removed)
    }

    /// Delete all past searches.
    ///
    /// # Errors
    ///
    /// Returns [`WordscopeError::Unauthenticated`] without a valid session,
    /// or a storage error if history cannot be saved.
    pub fn clear_history(&mut self) -> Result<()> {
        self.require_session()?;
        self.history.clear();
        self.persist()
    }

    fn require_session(&self) -> Result<()> {
        if self.guard.is_authenticated() {
            Ok(())
        } else {
            Err(WordscopeError::Unauthenticated)
        }
    }

    fn persist(&self) -> Result<()> {
        match &self.history_path {
            Some(path) => history::save(&self.history, path),
            None => Ok(()),
        }
    }
}
