//! Error types for catalog search operations.

use thiserror::Error;

/// Errors that can occur while talking to the catalog API.
///
/// Both variants are recoverable: callers are expected to warn and degrade
/// to an empty result list (or a fallback storefront) rather than abort.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Network communication failed or the endpoint returned a non-success status.
    #[error("Network error: {reason}")]
    NetworkError {
        /// The reason for the network error
        reason: String,
    },

    /// Failed to decode the response body as the expected JSON shape.
    #[error("Parse error: {reason}")]
    ParseError {
        /// The reason for the parse error
        reason: String,
    },
}
