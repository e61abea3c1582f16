//! # wordscope-search
//!
//! Typed word-association lookups against a Datamuse-style service.
//!
//! ## Design
//!
//! - Twelve [`SearchType`] modes, each with its own input grammar
//! - Inputs are validated and turned into query parameters locally; invalid
//!   input never reaches the network
//! - Responses are untrusted and normalised into [`ResultRecord`]s
//! - A failed lookup is retried exactly once as a similar-meaning query;
//!   results from that path carry the `fallback_search` tag
//! - Optional in-memory response cache with configurable TTL
//!
//! ## Security
//!
//! - No network listeners; this is a library, not a server
//! - Queries are logged only at trace/debug level

pub mod cache;
pub mod config;
pub mod error;
pub mod http;
pub mod normalize;
pub mod query;
pub mod service;
pub mod transport;
pub mod types;

pub use config::SearchConfig;
pub use error::{Result, SearchError};
pub use service::{FETCH_FAILURE_MESSAGE, SUGGESTION_FAILURE_MESSAGE, SearchService};
pub use transport::{HttpTransport, WordTransport};
pub use types::{Endpoint, QueryParams, ResultRecord, SearchOutcome, SearchTag, SearchType};

/// Run one search over HTTP with the given configuration.
///
/// Builds an [`HttpTransport`] and a [`SearchService`] for `config` and
/// executes a single search. Lookup failures are reported inside the
/// returned [`SearchOutcome`], not as errors.
///
/// # Errors
///
/// Returns [`SearchError::Config`] if `config` is invalid, or
/// [`SearchError::Http`] if the HTTP client cannot be constructed.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> wordscope_search::Result<()> {
/// use wordscope_search::{SearchConfig, SearchOutcome, SearchType};
///
/// let config = SearchConfig::default();
/// match wordscope_search::search(SearchType::LetterPattern, "t k 2", &config).await? {
///     SearchOutcome::Success(records) => {
///         for record in &records {
///             println!("{record}");
///         }
///     }
///     SearchOutcome::Failure(message) => eprintln!("{message}"),
/// }
/// # Ok(())
/// # }
/// ```
pub async fn search(
    search_type: SearchType,
    input: &str,
    config: &SearchConfig,
) -> Result<SearchOutcome> {
    config.validate()?;
    let transport = HttpTransport::new(config)?;
    let service = SearchService::new(transport, config.clone())?;
    Ok(service.execute(search_type, input).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn search_validates_config_zero_max_results() {
        let config = SearchConfig {
            max_results: 0,
            ..Default::default()
        };
        let result = search(SearchType::SimilarMeaning, "test", &config).await;
        assert!(result.unwrap_err().to_string().contains("max_results"));
    }

    #[tokio::test]
    async fn search_validates_config_zero_timeout() {
        let config = SearchConfig {
            timeout_seconds: 0,
            ..Default::default()
        };
        let result = search(SearchType::SimilarMeaning, "test", &config).await;
        assert!(result.unwrap_err().to_string().contains("timeout"));
    }

    #[tokio::test]
    async fn invalid_input_fails_before_any_request() {
        // Unroutable base URL: a validation failure must not try to connect.
        let config = SearchConfig {
            base_url: "http://127.0.0.1:9".into(),
            ..Default::default()
        };
        let outcome = search(SearchType::StartsWithLetter, "duck", &config)
            .await
            .expect("valid config");
        let SearchOutcome::Failure(msg) = outcome else {
            panic!("expected failure");
        };
        assert!(msg.contains("single letter"));
    }
}
