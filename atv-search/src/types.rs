//! Data types for catalog search functionality.

use serde::{Deserialize, Serialize};

/// A single ranked search result.
///
/// Constructed once during response normalization and immutable afterwards.
/// `id` is unique within a returned list; when the API repeats an identifier
/// across shelves, the first occurrence wins.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    /// Relevance score, see [`crate::scoring::relevance_score`]
    pub score: u32,
    /// Opaque provider-assigned content identifier
    pub id: String,
    /// Display title
    pub title: String,
    /// Localized display type (serialized as `type`, like the web client shows it)
    #[serde(rename = "type")]
    pub localized_type: String,
    /// Underlying content type tag
    pub raw_type: String,
    /// Canonical content URL
    pub url: String,
}

/// Content-type filter for narrowing search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentFilter {
    /// Keep only items whose URL marks them as movies
    Movie,
    /// Keep only items whose URL marks them as shows (`series` on the CLI maps here)
    Show,
}

/// Per-search constraints beyond the query term itself.
#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    /// Truncate the ranked list to this many entries; `None` or `Some(0)` keeps all
    pub max_results: Option<usize>,
    /// Optional content-type filter
    pub filter_type: Option<ContentFilter>,
    /// Keep people/person shelves instead of skipping them
    pub include_people: bool,
}
