//! Catalog client: search and storefront resolution.
//!
//! Thin I/O layer over the uts-api endpoints. The request parameter sets are
//! the ones the web client sends; the capability tokens are fixed constants
//! and may need updating if the upstream API rotates them.

use serde_json::Value;
use tracing::warn;

use crate::errors::SearchError;
use crate::fetch::CatalogFetcher;
use crate::ranking::rank_shelves;
use crate::response::{SearchResponse, StorefrontDirectory};
use crate::types::{SearchOptions, SearchResult};

/// US storefront, used as the fallback when region resolution fails.
pub const DEFAULT_STOREFRONT: &str = "143441";

const STOREFRONTS_URL: &str = "https://uts-api.itunes.apple.com/uts/v3/storefronts";
const SEARCH_URL: &str = "https://uts-api.itunes.apple.com/uts/v3/search";

// Opaque session/capability tokens captured from web requests.
const UTSCF_TOKEN: &str = "OjAAAAAAAAA~";
const UTSK_TOKEN: &str = "6e3013c6d6fae3c2::::::baf1a0dbeffe95a4";

const SEARCH_API_VERSION: &str = "90";
const STOREFRONTS_API_VERSION: &str = "56";

/// Client for the unauthenticated Apple TV catalog API.
#[derive(Debug)]
pub struct AtvClient {
    fetcher: Box<dyn CatalogFetcher>,
    locale: String,
    storefront_id: String,
}

impl AtvClient {
    /// Create a client for the given locale, targeting the US storefront.
    pub fn new(fetcher: Box<dyn CatalogFetcher>, locale: String) -> Self {
        Self {
            fetcher,
            locale,
            storefront_id: DEFAULT_STOREFRONT.to_string(),
        }
    }

    /// Target a specific storefront for subsequent searches.
    pub fn set_storefront(&mut self, storefront_id: String) {
        self.storefront_id = storefront_id;
    }

    /// Storefront currently targeted by searches.
    pub fn storefront_id(&self) -> &str {
        &self.storefront_id
    }

    /// Resolve the storefront identifier for a 2-letter region code.
    ///
    /// The directory lookup always uses the neutral US storefront parameter;
    /// the endpoint enumerates every region in one response regardless of
    /// which storefront asks. Returns `None` on transport failure, malformed
    /// response, or unknown region code, after logging a warning. Callers
    /// fall back to [`DEFAULT_STOREFRONT`].
    pub async fn storefront_for_region(&self, region: &str) -> Option<String> {
        let params = params_owned(&[
            ("utscf", UTSCF_TOKEN),
            ("utsk", UTSK_TOKEN),
            ("caller", "web"),
            ("sf", DEFAULT_STOREFRONT),
            ("v", STOREFRONTS_API_VERSION),
            ("pfm", "web"),
            ("locale", &self.locale),
        ]);

        let body = match self.fetcher.fetch_json(STOREFRONTS_URL, &params).await {
            Ok(body) => body,
            Err(e) => {
                warn!("storefront directory fetch failed: {e}");
                return None;
            }
        };

        let directory: StorefrontDirectory = match serde_json::from_value(body) {
            Ok(directory) => directory,
            Err(e) => {
                warn!("storefront directory had an unexpected shape: {e}");
                return None;
            }
        };

        directory
            .data
            .get(&region.to_uppercase())
            .and_then(|entry| entry.storefront_id())
    }

    /// Search the catalog and return results ranked by relevance.
    ///
    /// Issues one GET against the search endpoint and runs the response
    /// through [`rank_shelves`]. A missing or empty shelf list is a valid
    /// empty outcome, not an error.
    ///
    /// # Errors
    /// - `SearchError::NetworkError` - Transport failure or non-success status
    /// - `SearchError::ParseError` - Response body was not the expected JSON
    pub async fn search(
        &self,
        query: &str,
        options: &SearchOptions,
    ) -> Result<Vec<SearchResult>, SearchError> {
        let mut params = self.base_params();
        params.push(("searchTerm".to_string(), query.to_string()));

        let body = self.fetcher.fetch_json(SEARCH_URL, &params).await?;
        let response = decode_search_response(body)?;

        Ok(rank_shelves(
            &response.data.canvas.shelves,
            query,
            options,
        ))
    }

    /// Fixed parameter set the web client sends with every search.
    fn base_params(&self) -> Vec<(String, String)> {
        params_owned(&[
            ("locale", &self.locale),
            ("pfm", "web"),
            ("sf", &self.storefront_id),
            ("utscf", UTSCF_TOKEN),
            ("utsk", UTSK_TOKEN),
            ("v", SEARCH_API_VERSION),
            ("caller", "js"),
            ("suppressAuthentication", "true"),
        ])
    }
}

fn decode_search_response(body: Value) -> Result<SearchResponse, SearchError> {
    serde_json::from_value(body).map_err(|e| SearchError::ParseError {
        reason: format!("search response had an unexpected shape: {e}"),
    })
}

fn params_owned(params: &[(&str, &str)]) -> Vec<(String, String)> {
    params
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}
