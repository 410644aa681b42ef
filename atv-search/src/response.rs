//! Wire types for uts-api responses.
//!
//! Every level carries `#[serde(default)]` so missing or half-formed
//! responses decode to empty defaults instead of erroring; field absence is
//! handled downstream with per-field fallbacks.

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

/// Top-level search response envelope.
#[derive(Debug, Default, Deserialize)]
pub struct SearchResponse {
    /// Payload wrapper
    #[serde(default)]
    pub data: SearchData,
}

/// Payload of a search response.
#[derive(Debug, Default, Deserialize)]
pub struct SearchData {
    /// Canvas holding the result shelves
    #[serde(default)]
    pub canvas: Canvas,
}

/// Canvas grouping the shelves of a search response.
#[derive(Debug, Default, Deserialize)]
pub struct Canvas {
    /// Result shelves in response order
    #[serde(default)]
    pub shelves: Vec<Shelf>,
}

/// A named bucket of candidate items.
#[derive(Debug, Default, Deserialize)]
pub struct Shelf {
    /// Shelf identifier, e.g. `uts.col.search.MV` or `uts.col.Featured.PN`
    #[serde(default)]
    pub id: String,
    /// Items in shelf order
    #[serde(default)]
    pub items: Vec<ShelfItem>,
}

impl Shelf {
    /// Whether this shelf holds people/person entries.
    ///
    /// The API marks these with a `PN` token or a "people" word in the
    /// shelf id (the word check is case-insensitive).
    pub fn is_people_shelf(&self) -> bool {
        self.id.contains("PN") || self.id.to_lowercase().contains("people")
    }
}

/// A raw candidate item within a shelf.
#[derive(Debug, Default, Deserialize)]
pub struct ShelfItem {
    /// Provider-assigned content identifier
    pub id: Option<String>,
    /// Display title
    pub title: Option<String>,
    /// Underlying content type tag
    #[serde(rename = "type")]
    pub raw_type: Option<String>,
    /// Locale-specific display label for the content type
    #[serde(rename = "localizedType")]
    pub localized_type: Option<String>,
    /// Canonical content URL
    pub url: Option<String>,
}

/// Storefront directory response, keyed by upper-case 2-letter region code.
#[derive(Debug, Default, Deserialize)]
pub struct StorefrontDirectory {
    /// Region code to storefront record
    #[serde(default)]
    pub data: HashMap<String, StorefrontEntry>,
}

/// A single region record in the storefront directory.
#[derive(Debug, Default, Deserialize)]
pub struct StorefrontEntry {
    /// Numeric storefront identifier; arrives as a JSON number or string
    #[serde(rename = "storefrontId", default)]
    pub storefront_id: Value,
}

impl StorefrontEntry {
    /// Storefront identifier as a string, if the record carries one.
    pub fn storefront_id(&self) -> Option<String> {
        match &self.storefront_id {
            Value::Number(n) => Some(n.to_string()),
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            _ => None,
        }
    }
}
