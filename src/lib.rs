//! wordscope: a login-gated word-search dashboard.
//!
//! Searches go to a public word-association service through
//! [`wordscope_search`]; this crate adds the parts around it:
//!
//! - **Session**: an opaque local token with an expiry gates every search
//!   and history operation ([`session::SessionGuard`])
//! - **History**: a bounded, most-recent-first log of successful searches
//!   plus the lifecycle of the current one ([`history::HistoryStore`])
//! - **Dashboard**: the facade that drives both ([`dashboard::Dashboard`])
//! - **Storage and config**: local key/value storage and TOML configuration

pub mod config;
pub mod dashboard;
pub mod error;
pub mod history;
pub mod session;
pub mod storage;
pub mod wordscope_dirs;

pub use config::AppConfig;
pub use dashboard::Dashboard;
pub use error::{Result, WordscopeError};
pub use history::{CurrentSearchState, HistoryStore, SearchHistoryItem};
pub use session::{SessionCredential, SessionGuard};
pub use storage::{FileStore, KeyValueStore, MemoryStore};
