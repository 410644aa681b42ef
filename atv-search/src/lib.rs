//! ATV Search - Apple TV catalog search and ranking

#![deny(missing_docs)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![warn(clippy::too_many_lines)]
//!
//! Queries the unauthenticated uts-api search endpoint, normalizes the
//! shelf/item response into a flat result list, and ranks it by relevance
//! to the query. The scoring and normalization pipeline is pure and runs
//! without network access; HTTP is injected through [`CatalogFetcher`].

pub mod client;
pub mod errors;
pub mod fetch;
pub mod ranking;
pub mod response;
pub mod scoring;
pub mod types;

// Re-export main types
pub use client::{AtvClient, DEFAULT_STOREFRONT};
pub use errors::SearchError;
pub use fetch::{CatalogFetcher, HttpFetcher};
pub use ranking::rank_shelves;
pub use scoring::relevance_score;
pub use types::{ContentFilter, SearchOptions, SearchResult};

/// Convenience type alias for Results with SearchError.
pub type Result<T> = std::result::Result<T, SearchError>;
