//! Error types for the wordscope dashboard.

use wordscope_search::SearchError;

/// Top-level error type for the dashboard.
#[derive(Debug, thiserror::Error)]
pub enum WordscopeError {
    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// Local key/value or history storage error.
    #[error("storage error: {0}")]
    Storage(String),

    /// Login input rejected.
    #[error("login error: {0}")]
    Login(String),

    /// A protected operation was attempted without a valid session.
    #[error("not logged in or session expired")]
    Unauthenticated,

    /// Search setup error (invalid search config, HTTP client construction).
    #[error(transparent)]
    Search(#[from] SearchError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type.
pub type Result<T> = std::result::Result<T, WordscopeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_variants() {
        assert_eq!(
            WordscopeError::Config("bad toml".into()).to_string(),
            "config error: bad toml"
        );
        assert_eq!(
            WordscopeError::Unauthenticated.to_string(),
            "not logged in or session expired"
        );
        assert_eq!(
            WordscopeError::Login("username is required".into()).to_string(),
            "login error: username is required"
        );
    }

    #[test]
    fn search_error_is_transparent() {
        let err: WordscopeError = SearchError::Config("max_results must be > 0".into()).into();
        assert_eq!(err.to_string(), "config error: max_results must be > 0");
    }

    #[test]
    fn io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: WordscopeError = io.into();
        assert!(err.to_string().contains("gone"));
    }
}
