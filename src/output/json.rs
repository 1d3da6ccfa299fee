//! JSON output formatting

use chrono::Utc;
use serde::Serialize;

use crate::client::Page;

/// Wrapper for JSON output with metadata
#[derive(Debug, Serialize)]
pub struct JsonOutput<T> {
    /// The actual data
    pub data: T,

    /// Metadata about the response
    pub meta: Metadata,
}

/// Metadata included in JSON output
#[derive(Debug, Serialize)]
pub struct Metadata {
    /// Timestamp of the response
    pub timestamp: String,

    /// CLI version
    pub version: String,

    /// Paging totals for list output
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<PageMeta>,
}

/// Paging totals mirrored from [`Page`]
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub page: usize,
    pub page_size: usize,
    pub total: usize,
    pub total_pages: usize,
}

impl<T> JsonOutput<T> {
    /// Create a new JSON output with metadata
    pub fn new(data: T) -> Self {
        Self {
            data,
            meta: Metadata {
                timestamp: Utc::now().to_rfc3339(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                pagination: None,
            },
        }
    }
}

/// Format data as pretty-printed JSON
pub fn format_json<T: Serialize + ?Sized>(data: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&JsonOutput::new(data))
}

/// Format a page as JSON, moving the totals into `meta.pagination`
pub fn format_json_page<T: Serialize>(page: &Page<T>) -> Result<String, serde_json::Error> {
    let mut output = JsonOutput::new(&page.items);
    output.meta.pagination = Some(PageMeta {
        page: page.page,
        page_size: page.page_size,
        total: page.total,
        total_pages: page.total_pages,
    });
    serde_json::to_string_pretty(&output)
}
