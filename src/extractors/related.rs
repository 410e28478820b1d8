//! Related searches

use crate::error::ExtractError;
use crate::extractors::css;
use crate::extractors::html;
use crate::filter::NodeFilter;
use crate::results::RelatedItem;
use crate::utils::resolve_absolute_url;
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

/// Anchors in either related-searches container. The id changed from `brs`
/// to `bres` in February 2021; pages carry one or the other, so both are
/// queried together.
pub const RELATED_QUERY_SELECTOR: &str = "#brs a, #bres a";

static RELATED_QUERY: LazyLock<Selector> = LazyLock::new(|| css(RELATED_QUERY_SELECTOR));

/// Extract related searches, in page order.
///
/// Every item must have a navigable link: an anchor without an href, or with
/// one that cannot be made absolute, yields an error for that item only.
pub fn extract_related_queries(
    document: &Html,
    hostname: Option<&str>,
) -> Vec<Result<RelatedItem, ExtractError>> {
    let filter = NodeFilter::default();
    html::select_all(document, &RELATED_QUERY)
        .into_iter()
        .map(|anchor| parse_related_item(&filter, anchor, hostname))
        .collect()
}

fn parse_related_item(
    filter: &NodeFilter,
    anchor: ElementRef<'_>,
    hostname: Option<&str>,
) -> Result<RelatedItem, ExtractError> {
    let title = html::text_of_all(filter, &[anchor]);
    let Some(href) = anchor.value().attr("href") else {
        return Err(ExtractError::MissingHref { title });
    };

    let url = resolve_absolute_url(Some(href), hostname).ok_or_else(|| {
        ExtractError::UnresolvableUrl {
            href: href.to_string(),
            hostname: hostname.map(String::from),
        }
    })?;

    Ok(RelatedItem { title, url })
}
