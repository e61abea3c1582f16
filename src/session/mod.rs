//! Local session gate.
//!
//! A session is an opaque token with an expiry kept in a [`KeyValueStore`]
//! under [`AUTH_TOKEN_KEY`]. There is no server-side check: login accepts
//! any non-empty username and password, and the guard only looks at whether
//! a well-formed, unexpired credential is present.
//!
//! ## Usage
//!
//! ```no_run
//! use wordscope::session::SessionGuard;
//! use wordscope::storage::FileStore;
//! use wordscope::config::SessionConfig;
//!
//! # fn example() -> wordscope::Result<()> {
//! let guard = SessionGuard::new(FileStore::open_default(), SessionConfig::default());
//! guard.login("ada", "hunter2", false)?;
//! assert!(guard.is_authenticated());
//! guard.logout();
//! # Ok(())
//! # }
//! ```

mod types;

pub use types::{AUTH_TOKEN_KEY, SessionCredential};

use crate::config::SessionConfig;
use crate::error::{Result, WordscopeError};
use crate::storage::KeyValueStore;

/// Current time in Unix epoch seconds.
pub fn now_epoch_secs() -> i64 {
    chrono::Utc::now().timestamp()
}

/// Decides whether a caller may reach the protected surfaces.
#[derive(Debug)]
pub struct SessionGuard<S> {
    store: S,
    config: SessionConfig,
}

impl<S: KeyValueStore> SessionGuard<S> {
    /// Create a guard over `store`.
    pub fn new(store: S, config: SessionConfig) -> Self {
        Self { store, config }
    }

    /// The backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Whether a valid, unexpired credential is stored right now.
    pub fn is_authenticated(&self) -> bool {
        self.is_authenticated_at(now_epoch_secs())
    }

    /// Whether a valid credential unexpired at `now` is stored.
    ///
    /// Malformed or expired credentials are deleted as a side effect.
    /// Storage failures read as "not authenticated".
    pub fn is_authenticated_at(&self, now: i64) -> bool {
        self.current_at(now).is_some()
    }

    /// The stored credential, if it is valid at `now`.
    ///
    /// Self-heals like [`SessionGuard::is_authenticated_at`].
    pub fn current_at(&self, now: i64) -> Option<SessionCredential> {
        let raw = match self.store.get(AUTH_TOKEN_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(err) => {
                tracing::warn!(error = %err, "cannot read session storage");
                return None;
            }
        };

        let Some(credential) = SessionCredential::parse(&raw) else {
            tracing::debug!("discarding malformed session credential");
            self.clear();
            return None;
        };

        if credential.is_expired_at(now) {
            tracing::debug!(expires_in = credential.expires_in, "session expired");
            self.clear();
            return None;
        }
        Some(credential)
    }

    /// Expiry of the current session, if one is valid now.
    pub fn expires_at(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        self.current_at(now_epoch_secs())
            .and_then(|c| chrono::DateTime::from_timestamp(c.expires_in, 0))
    }

    /// Issue and store a new credential.
    ///
    /// No real credential check happens: any non-empty username and password
    /// are accepted. `remember_me` selects the longer configured lifetime.
    ///
    /// # Errors
    ///
    /// Returns [`WordscopeError::Login`] for empty input, or a storage error
    /// if the credential cannot be written.
    pub fn login(
        &self,
        username: &str,
        password: &str,
        remember_me: bool,
    ) -> Result<SessionCredential> {
        self.login_at(username, password, remember_me, now_epoch_secs())
    }

    /// [`SessionGuard::login`] with an explicit clock.
    ///
    /// # Errors
    ///
    /// Same as [`SessionGuard::login`].
    pub fn login_at(
        &self,
        username: &str,
        password: &str,
        remember_me: bool,
        now: i64,
    ) -> Result<SessionCredential> {
        if username.trim().is_empty() {
            return Err(WordscopeError::Login("username is required".into()));
        }
        if password.is_empty() {
            return Err(WordscopeError::Login("password is required".into()));
        }

        let ttl = if remember_me {
            self.config.remember_me_ttl_seconds
        } else {
            self.config.ttl_seconds
        };
        let credential = SessionCredential {
            token: uuid::Uuid::new_v4().to_string(),
            expires_in: now.saturating_add(i64::try_from(ttl).unwrap_or(i64::MAX)),
        };
        let json = serde_json::to_string(&credential)
            .map_err(|e| WordscopeError::Storage(format!("cannot serialize credential: {e}")))?;
        self.store.set(AUTH_TOKEN_KEY, &json)?;

        tracing::info!(user = username.trim(), remember_me, "logged in");
        Ok(credential)
    }

    /// Delete the stored credential unconditionally.
    pub fn logout(&self) {
        self.clear();
        tracing::info!("logged out");
    }

    fn clear(&self) {
        if let Err(err) = self.store.remove(AUTH_TOKEN_KEY) {
            tracing::warn!(error = %err, "cannot delete session credential");
        }
    }
}
