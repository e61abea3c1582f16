//! Search execution: validate, build, fetch, fall back once, normalise.
//!
//! [`SearchService`] turns a `(search type, raw input)` pair into a
//! [`SearchOutcome`]. Failures never escape as errors: validation messages
//! are returned verbatim and transport failures are folded into fixed
//! user-facing messages after at most one fallback call.

use std::time::Duration;

use serde_json::Value;

use crate::cache::{CacheKey, ResponseCache};
use crate::config::SearchConfig;
use crate::error::{Result, SearchError};
use crate::normalize::{normalize, normalize_fallback};
use crate::query::{build, fallback_params, suggestion_params};
use crate::transport::WordTransport;
use crate::types::{Endpoint, QueryParams, SearchOutcome, SearchTag, SearchType};

/// Message returned when a lookup (and its fallback, if any) fails.
pub const FETCH_FAILURE_MESSAGE: &str = "An error occurred while fetching data";

/// Message returned when the suggestion endpoint fails.
pub const SUGGESTION_FAILURE_MESSAGE: &str = "failed to get word suggestions";

/// Executes searches against an injected [`WordTransport`].
#[derive(Debug)]
pub struct SearchService<T> {
    transport: T,
    config: SearchConfig,
    cache: Option<ResponseCache>,
}

impl<T: WordTransport> SearchService<T> {
    /// Create a service over `transport`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`] if `config` does not validate.
    pub fn new(transport: T, config: SearchConfig) -> Result<Self> {
        config.validate()?;
        let cache = ResponseCache::with_ttl(config.cache_ttl_seconds);
        Ok(Self {
            transport,
            config,
            cache,
        })
    }

    /// The configuration this service was built with.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// The underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Run one search.
    ///
    /// # Pipeline
    ///
    /// 1. [`SearchType::Suggestion`] goes straight to the suggestion endpoint;
    ///    a failure there yields [`SUGGESTION_FAILURE_MESSAGE`], no fallback.
    /// 2. Otherwise the input is validated and built; a validation error is
    ///    returned as the failure message without any network call.
    /// 3. The lookup endpoint is called once, bounded by the timeout.
    /// 4. On transport failure, unless the mode is already
    ///    [`SearchType::SimilarMeaning`], exactly one fallback lookup is made
    ///    with the raw trimmed input as a similar-meaning query. Its records
    ///    carry the `fallback_search` tag.
    /// 5. Any remaining failure yields [`FETCH_FAILURE_MESSAGE`].
    pub async fn execute(&self, search_type: SearchType, input: &str) -> SearchOutcome {
        self.execute_tagged(&SearchTag::Known(search_type), input).await
    }

    /// Run one search for a tag given as a string.
    ///
    /// Unknown tags are searched as similar-meaning but, unlike
    /// [`SearchType::SimilarMeaning`] itself, still get the fallback call.
    pub async fn execute_tag(&self, tag: &str, input: &str) -> SearchOutcome {
        self.execute_tagged(&SearchTag::from_tag(tag), input).await
    }

    /// Run one search for a resolved [`SearchTag`]; see
    /// [`execute`](Self::execute) for the pipeline.
    pub async fn execute_tagged(&self, tag: &SearchTag, input: &str) -> SearchOutcome {
        let search_type = tag.search_type();
        if search_type == SearchType::Suggestion {
            return self.execute_suggestion(input).await;
        }

        let mut params = match build(search_type, input) {
            Ok(params) => params,
            Err(err) => {
                tracing::debug!(%tag, error = %err, "search input rejected");
                return SearchOutcome::Failure(err.to_string());
            }
        };
        params.set("max", self.config.max_results.to_string());

        let primary_err = match self.fetch(Endpoint::Lookup, &params).await {
            Ok(payload) => {
                let records = normalize(&payload);
                tracing::debug!(%tag, count = records.len(), "lookup succeeded");
                return SearchOutcome::Success(records);
            }
            Err(err) => err,
        };
        tracing::warn!(%tag, error = %primary_err, "lookup failed");

        if !tag.allows_fallback() {
            return SearchOutcome::Failure(FETCH_FAILURE_MESSAGE.to_owned());
        }

        let mut fallback = fallback_params(input);
        fallback.set("max", self.config.max_results.to_string());
        match self.fetch(Endpoint::Lookup, &fallback).await {
            Ok(payload) => {
                let records = normalize_fallback(&payload);
                tracing::info!(
                    %tag,
                    count = records.len(),
                    "served results from similar-meaning fallback"
                );
                SearchOutcome::Success(records)
            }
            Err(err) => {
                tracing::warn!(%tag, error = %err, "fallback lookup failed");
                SearchOutcome::Failure(FETCH_FAILURE_MESSAGE.to_owned())
            }
        }
    }

    async fn execute_suggestion(&self, input: &str) -> SearchOutcome {
        let params = match suggestion_params(input) {
            Ok(params) => params,
            Err(err) => return SearchOutcome::Failure(err.to_string()),
        };
        match self.fetch(Endpoint::Suggestion, &params).await {
            Ok(payload) => SearchOutcome::Success(normalize(&payload)),
            Err(err) => {
                tracing::warn!(error = %err, "suggestion lookup failed");
                SearchOutcome::Failure(SUGGESTION_FAILURE_MESSAGE.to_owned())
            }
        }
    }

    /// One bounded round trip, served from the cache when possible.
    async fn fetch(&self, endpoint: Endpoint, params: &QueryParams) -> Result<Value> {
        let key = CacheKey::new(endpoint, params);
        if let Some(cache) = &self.cache {
            if let Some(hit) = cache.get(&key).await {
                tracing::trace!(%endpoint, "response cache hit");
                return Ok(hit);
            }
        }

        let limit = Duration::from_secs(self.config.timeout_seconds);
        let payload = tokio::time::timeout(limit, self.transport.fetch(endpoint, params))
            .await
            .map_err(|_| {
                SearchError::Timeout(format!(
                    "exceeded {}s limit",
                    self.config.timeout_seconds
                ))
            })??;

        if let Some(cache) = &self.cache {
            cache.insert(key, payload.clone()).await;
        }
        Ok(payload)
    }
}
