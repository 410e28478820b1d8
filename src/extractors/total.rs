//! Total result count

use crate::extractors::css;
use crate::extractors::html;
use crate::extractors::text::parse_result_count;
use crate::filter::NodeFilter;
use scraper::{Html, Selector};
use std::sync::LazyLock;

/// Ids of the result-stats element, in priority order
pub const RESULT_STATS_SELECTORS: &[&str] = &["#resultStats", "#result-stats"];

static RESULT_STATS: LazyLock<Vec<Selector>> =
    LazyLock::new(|| RESULT_STATS_SELECTORS.iter().map(|s| css(s)).collect());

/// Text of the first result-stats element that has any
pub fn result_stats_text(document: &Html) -> Option<String> {
    let filter = NodeFilter::default();
    RESULT_STATS
        .iter()
        .map(|selector| html::text_of_all(&filter, &html::select_all(document, selector)))
        .find(|text| !text.is_empty())
}

/// Extract the total number of results, or 0 if the page does not say
pub fn extract_total_results(document: &Html) -> u64 {
    match result_stats_text(document) {
        Some(text) => {
            let total = parse_result_count(&text);
            ::log::debug!("Result stats {:?} parsed as {}", text, total);
            total
        }
        None => {
            ::log::debug!("No result stats on the page");
            0
        }
    }
}
