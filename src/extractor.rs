use tracing::{debug, warn};
use url::Url;

use crate::HttpClient;

/// Per-page text extraction from PDF bytes.
///
/// `None` means the document could not be parsed at all; a readable document
/// with pages that carry no extractable text yields empty strings for those
/// pages. Pages are 1-indexed by position downstream.
pub fn extract_pages(bytes: &[u8]) -> Option<Vec<String>> {
    match pdf_extract::extract_text_from_mem_by_pages(bytes) {
        Ok(pages) => Some(pages),
        Err(e) => {
            debug!("PDF parse failed: {}", e);
            None
        }
    }
}

/// Download a document and extract its pages.
///
/// One bad document must never abort the batch: download failures, over-size
/// bodies and parse failures all degrade to an empty page list. The caller
/// turns that into a not-found outcome row.
pub async fn fetch_pages(client: &HttpClient, url: &Url) -> Vec<String> {
    let bytes = match client.fetch_bytes(url).await {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!("Download failed for {}: {}", url, e);
            return Vec::new();
        }
    };

    match extract_pages(&bytes) {
        Some(pages) => {
            debug!("Extracted {} pages from {}", pages.len(), url);
            pages
        }
        None => {
            warn!("Unreadable PDF at {}", url);
            Vec::new()
        }
    }
}
