use scraper::{Html, Selector};
use tracing::{debug, warn};
use url::Url;

use crate::{HttpClient, Result, ScoutError};

/// Extract the PDF links out of a directory-listing page.
///
/// Anchors are kept in document order. An href that resolves to the same
/// absolute URL as an earlier one is kept as a duplicate; downstream rows
/// mirror the listing, not a deduplicated view of it.
pub fn parse_listing(html: &str, base_url: &Url) -> Vec<Url> {
    let document = Html::parse_document(html);
    let anchors = Selector::parse("a").unwrap();

    let mut links = Vec::new();
    for element in document.select(&anchors) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };

        if !is_pdf_href(href) {
            continue;
        }

        // join() keeps absolute hrefs as-is and resolves relative ones
        // against the listing URL
        match base_url.join(href) {
            Ok(url) => links.push(url),
            Err(e) => warn!("Skipping unresolvable href {:?}: {}", href, e),
        }
    }

    links
}

/// A candidate href must carry a real filename, not a bare `.pdf`.
fn is_pdf_href(href: &str) -> bool {
    href.ends_with(".pdf") && !href.ends_with("/.pdf") && href != ".pdf"
}

/// Fetch a directory listing and return the PDF links it advertises.
pub async fn discover(client: &HttpClient, directory_url: &Url) -> Result<Vec<Url>> {
    let body = client
        .fetch_text(directory_url)
        .await
        .map_err(|e| ScoutError::Discovery {
            url: directory_url.to_string(),
            reason: e.to_string(),
        })?;

    let links = parse_listing(&body, directory_url);
    debug!("Discovered {} PDF links at {}", links.len(), directory_url);

    Ok(links)
}
