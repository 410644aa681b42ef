//! Response normalization and ranking pipeline.
//!
//! Pure function from raw shelves to an ordered result list; no I/O, so the
//! whole pipeline is unit-testable without network access.

use std::collections::HashSet;

use crate::response::Shelf;
use crate::scoring::relevance_score;
use crate::types::{ContentFilter, SearchOptions, SearchResult};

const VALID_URL_MARKERS: [&str; 3] = ["/show/", "/movie/", "/person/"];

/// Normalize, filter, score, and order the shelves of a search response.
///
/// Shelves are visited in response order and items in shelf order; the first
/// occurrence of an identifier wins. An item records its identifier as seen
/// *before* URL and filter checks, so a rejected occurrence still suppresses
/// later duplicates. That matches the long-standing behavior of the web
/// client this mirrors and is kept intentionally.
///
/// The result is sorted by score descending, ties broken by title ascending,
/// and truncated to `max_results` when it is a positive count.
pub fn rank_shelves(shelves: &[Shelf], query: &str, options: &SearchOptions) -> Vec<SearchResult> {
    let mut results = Vec::new();
    let mut seen_ids: HashSet<&str> = HashSet::new();

    for shelf in shelves {
        // Skip people shelves unless explicitly requested
        if !options.include_people && shelf.is_people_shelf() {
            continue;
        }

        for (position, item) in shelf.items.iter().enumerate() {
            let Some(id) = item.id.as_deref().filter(|id| !id.is_empty()) else {
                continue;
            };
            if !seen_ids.insert(id) {
                continue;
            }

            // Only keep items with a recognized URL shape
            let url = item.url.as_deref().unwrap_or_default();
            if url.is_empty() || !VALID_URL_MARKERS.iter().any(|marker| url.contains(marker)) {
                continue;
            }

            if let Some(filter) = options.filter_type {
                let matches = match filter {
                    ContentFilter::Movie => url.contains("/movie/"),
                    ContentFilter::Show => url.contains("/show/"),
                };
                if !matches {
                    continue;
                }
            }

            let title = item.title.as_deref().unwrap_or("Unknown");
            let raw_type = item.raw_type.as_deref().unwrap_or("Unknown");
            let localized_type = item.localized_type.as_deref().unwrap_or(raw_type);

            results.push(SearchResult {
                score: relevance_score(title, query, position),
                id: id.to_string(),
                title: title.to_string(),
                localized_type: localized_type.to_string(),
                raw_type: raw_type.to_string(),
                url: url.to_string(),
            });
        }
    }

    results.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| a.title.cmp(&b.title)));

    if let Some(max) = options.max_results
        && max > 0
    {
        results.truncate(max);
    }

    results
}
