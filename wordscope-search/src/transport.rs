//! Transport seam between the search service and the remote endpoints.
//!
//! [`WordTransport`] is the injected collaborator that performs one HTTP
//! round trip. [`HttpTransport`] is the production implementation; tests
//! substitute scripted transports.

use std::future::Future;

use serde_json::Value;
use url::Url;

use crate::config::SearchConfig;
use crate::error::{Result, SearchError};
use crate::http::build_client;
use crate::types::{Endpoint, QueryParams};

/// A single request/response exchange with the word-association service.
///
/// Implementors send `params` as URL query parameters to `endpoint` and
/// return the decoded JSON body. Any network failure, timeout, non-success
/// status or undecodable body must be reported as an error; the service
/// decides what to do with it.
///
/// All implementations must be `Send + Sync` so a service can be shared
/// across tasks.
pub trait WordTransport: Send + Sync {
    /// Perform one GET against `endpoint` with `params`.
    ///
    /// # Errors
    ///
    /// Returns a transport-class [`SearchError`] on any failure.
    fn fetch(
        &self,
        endpoint: Endpoint,
        params: &QueryParams,
    ) -> impl Future<Output = Result<Value>> + Send;
}

/// [`WordTransport`] backed by a [`reqwest::Client`].
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpTransport {
    /// Build a transport for `config.base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`] if the base URL is invalid, or
    /// [`SearchError::Http`] if the client cannot be constructed.
    pub fn new(config: &SearchConfig) -> Result<Self> {
        let mut base = config.base_url.trim().to_owned();
        // Url::join replaces the last segment unless the base ends with '/'.
        if !base.ends_with('/') {
            base.push('/');
        }
        let base_url = Url::parse(&base)
            .map_err(|e| SearchError::Config(format!("base_url is not a valid URL: {e}")))?;
        Ok(Self {
            client: build_client(config)?,
            base_url,
        })
    }

    /// Full request URL for `endpoint` with `params` encoded as the query.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`] if the endpoint path cannot be joined.
    pub fn request_url(&self, endpoint: Endpoint, params: &QueryParams) -> Result<Url> {
        let mut url = self
            .base_url
            .join(endpoint.path())
            .map_err(|e| SearchError::Config(format!("cannot build {endpoint} URL: {e}")))?;
        if !params.is_empty() {
            url.query_pairs_mut().extend_pairs(params.iter());
        }
        Ok(url)
    }
}

impl WordTransport for HttpTransport {
    async fn fetch(&self, endpoint: Endpoint, params: &QueryParams) -> Result<Value> {
        let url = self.request_url(endpoint, params)?;
        tracing::trace!(%url, "sending word lookup");

        let response = self.client.get(url).send().await?.error_for_status()?;
        let body = response.json::<Value>().await?;
        Ok(body)
    }
}
