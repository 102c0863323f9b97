//! JSON output formatting
//!
//! Items are wrapped in a `data` + `meta` envelope so a host script can tell
//! when the list was produced and by which version.

use chrono::Utc;
use serde::Serialize;

use crate::models::DisplayItem;

/// Wrapper for JSON output with metadata
#[derive(Debug, Serialize)]
pub struct JsonOutput<'a> {
    /// Rendered items, in display order
    pub data: &'a [DisplayItem],

    /// Metadata about the response
    pub meta: Metadata,
}

/// Metadata included in JSON output
#[derive(Debug, Serialize)]
pub struct Metadata {
    /// Time the list was rendered (RFC 3339)
    pub timestamp: String,

    /// CLI version
    pub version: String,

    /// Number of items
    pub count: usize,
}

impl<'a> JsonOutput<'a> {
    pub fn new(data: &'a [DisplayItem]) -> Self {
        Self {
            data,
            meta: Metadata {
                timestamp: Utc::now().to_rfc3339(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                count: data.len(),
            },
        }
    }
}

/// Format items as pretty-printed JSON
pub fn format_json(items: &[DisplayItem]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&JsonOutput::new(items))
}
