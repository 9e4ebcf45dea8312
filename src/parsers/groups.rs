use super::selector;
use crate::error::Result;
use crate::url::join_url;
use scraper::Html;

/// Substring SuSy puts in every group report link.
pub const REPORT_MARKER: &str = "relato";

/// Collects the group report links of an assignment page, joined with
/// `base_url`, in document order.
///
/// Anchors without an `href` are skipped.
pub fn parse_groups(html: &str, base_url: &str) -> Result<Vec<String>> {
    let document = Html::parse_document(html);
    let anchor_selector = selector("a[href]")?;

    Ok(document
        .select(&anchor_selector)
        .filter_map(|anchor| anchor.value().attr("href"))
        .filter(|href| href.contains(REPORT_MARKER))
        .map(|href| join_url(base_url, href))
        .collect())
}
