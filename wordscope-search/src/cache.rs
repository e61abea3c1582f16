//! In-memory TTL cache for endpoint responses.
//!
//! Caches raw JSON payloads keyed by the `(endpoint, parameters)` pair, so a
//! repeated lookup does not hit the network. Uses [`moka`] for async-friendly
//! caching with automatic eviction. Only successful responses are stored.

use std::time::Duration;

use moka::future::Cache;
use serde_json::Value;

use crate::types::{Endpoint, QueryParams};

/// Maximum number of cached responses.
const MAX_CACHE_ENTRIES: u64 = 100;

/// Composite cache key: target endpoint + the exact parameter set sent.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    endpoint: Endpoint,
    params: QueryParams,
}

impl CacheKey {
    /// Build a key for one request.
    pub fn new(endpoint: Endpoint, params: &QueryParams) -> Self {
        Self {
            endpoint,
            params: params.clone(),
        }
    }
}

/// Response cache owned by a search service.
#[derive(Clone)]
pub struct ResponseCache {
    inner: Cache<CacheKey, Value>,
}

impl std::fmt::Debug for ResponseCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResponseCache")
            .field("entries", &self.inner.entry_count())
            .finish()
    }
}

impl ResponseCache {
    /// Create a cache with the given TTL. Returns `None` when `ttl_seconds`
    /// is 0, meaning caching is disabled.
    pub fn with_ttl(ttl_seconds: u64) -> Option<Self> {
        if ttl_seconds == 0 {
            return None;
        }
        let inner = Cache::builder()
            .max_capacity(MAX_CACHE_ENTRIES)
            .time_to_live(Duration::from_secs(ttl_seconds))
            .build();
        Some(Self { inner })
    }

    /// Look up a cached response. Returns `Some(payload)` on hit.
    pub async fn get(&self, key: &CacheKey) -> Option<Value> {
        self.inner.get(key).await
    }

    /// Store a successful response.
    pub async fn insert(&self, key: CacheKey, payload: Value) {
        self.inner.insert(key, payload).await;
    }
}
