//! Offer page fetching and listing segmentation.
//!
//! The core pipeline only sees pre-segmented text blocks; this module owns
//! the network fetch and the HTML-to-blocks step.

use anyhow::Context;
use scraper::{Html, Selector};
use tracing::debug;

/// CSS selector for one offer listing container on the source pages.
pub const LISTING_SELECTOR: &str = "div.flex.flex-col.sm\\:flex-row.gap-4";

/// Fetch a page and return its raw HTML.
pub async fn fetch_page(url: &str) -> anyhow::Result<String> {
    debug!("fetching {url}");
    let response = reqwest::get(url)
        .await
        .with_context(|| format!("failed to fetch {url}"))?;
    let body = response
        .error_for_status()
        .with_context(|| format!("request to {url} failed"))?
        .text()
        .await?;
    debug!("fetched {} bytes from {url}", body.len());
    Ok(body)
}

/// Segment a page into per-listing text blocks using a CSS selector.
///
/// Blocks come back in document order as flattened element text, ready for
/// the extraction rule sets.
pub fn segment_listings(html: &str, selector: &str) -> anyhow::Result<Vec<String>> {
    let selector = Selector::parse(selector)
        .map_err(|e| anyhow::anyhow!("invalid listing selector: {e}"))?;
    let document = Html::parse_document(html);
    let blocks: Vec<String> = document
        .select(&selector)
        .map(|element| element.text().collect::<Vec<_>>().join(""))
        .collect();
    debug!("segmented {} listing blocks", blocks.len());
    Ok(blocks)
}
