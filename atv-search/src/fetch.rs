//! HTTP fetch seam for the catalog client.
//!
//! The client depends on a single "fetch JSON" capability so the ranking
//! pipeline and the storefront resolver can be exercised against canned
//! responses in tests.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header;
use serde_json::Value;

use crate::errors::SearchError;

/// Browser-like identity; the endpoint is tuned for the web client.
const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 \
                          (KHTML, like Gecko) Chrome/122.0 Safari/537.36";

/// Trait for fetching JSON documents over HTTP.
///
/// Implementations issue a GET with the given query parameters and return
/// the decoded body.
#[async_trait]
pub trait CatalogFetcher: Send + Sync + std::fmt::Debug {
    /// Fetch `url` with `params` as the query string and decode the body as JSON.
    ///
    /// # Errors
    /// - `SearchError::NetworkError` - Transport failure or non-success status
    /// - `SearchError::ParseError` - Body is not valid JSON
    async fn fetch_json(&self, url: &str, params: &[(String, String)]) -> Result<Value, SearchError>;
}

/// Production fetcher backed by a reqwest client.
///
/// One instance per process invocation; the underlying connection is reused
/// across the (at most two) calls a search makes.
#[derive(Debug)]
pub struct HttpFetcher {
    client: reqwest::Client,
    timeout: Duration,
}

impl HttpFetcher {
    /// Create a fetcher with a per-request timeout.
    pub fn new(timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            timeout,
        }
    }
}

#[async_trait]
impl CatalogFetcher for HttpFetcher {
    async fn fetch_json(
        &self,
        url: &str,
        params: &[(String, String)],
    ) -> Result<Value, SearchError> {
        let response = self
            .client
            .get(url)
            .query(params)
            .header(header::USER_AGENT, USER_AGENT)
            .header(header::ACCEPT, "application/json")
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| SearchError::NetworkError {
                reason: format!("request to {url} failed: {e}"),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::NetworkError {
                reason: format!("HTTP {status} from {url}"),
            });
        }

        response.json().await.map_err(|e| SearchError::ParseError {
            reason: format!("JSON decoding failed: {e}"),
        })
    }
}

#[cfg(test)]
pub use mock::MockFetcher;

#[cfg(test)]
mod mock {
    use super::*;

    /// Test fetcher returning a canned response (or error) per URL.
    #[derive(Debug, Default)]
    pub struct MockFetcher {
        responses: Vec<(String, Result<Value, String>)>,
    }

    impl MockFetcher {
        /// Serve `body` for requests whose URL contains `url_part`.
        pub fn with_response(mut self, url_part: &str, body: Value) -> Self {
            self.responses.push((url_part.to_string(), Ok(body)));
            self
        }

        /// Fail requests whose URL contains `url_part` with a network error.
        pub fn with_failure(mut self, url_part: &str, reason: &str) -> Self {
            self.responses
                .push((url_part.to_string(), Err(reason.to_string())));
            self
        }
    }

    #[async_trait]
    impl CatalogFetcher for MockFetcher {
        async fn fetch_json(
            &self,
            url: &str,
            _params: &[(String, String)],
        ) -> Result<Value, SearchError> {
            for (url_part, outcome) in &self.responses {
                if url.contains(url_part.as_str()) {
                    return match outcome {
                        Ok(body) => Ok(body.clone()),
                        Err(reason) => Err(SearchError::NetworkError {
                            reason: reason.clone(),
                        }),
                    };
                }
            }
            Err(SearchError::NetworkError {
                reason: format!("no canned response for {url}"),
            })
        }
    }
}
