//! Paid results (ads)

use crate::extractors::css;
use crate::extractors::html::{self, Container};
use crate::extractors::layout::{Layout, largest_match};
use crate::filter::{NodeFilter, NodeFilterConfig};
use crate::results::{Ad, SiteLink};
use crate::utils::non_empty;
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

/// Ad containers in the current layout
pub const AD_SELECTOR: &str = "#tads > div";

/// Ad containers in the legacy layout
pub const LEGACY_AD_SELECTOR: &str = ".ads-fr";

/// Seller rating widgets; their links and text are not part of the ad
pub const SELLER_RATING_SELECTORS: &[&str] = &["w-ad-seller-rating"];

/// Attributes that mark tracking anchors, as opposed to real sitelinks
pub const TRACKING_ATTRIBUTES: &[&str] = &["data-pcu", "ping"];

/// Position of the displayed URL among the `div > span` children of the ad
/// link. The spans before it carry the "Ad" label.
///
/// This is an empirical constant for the ad layout current as of early 2021,
/// not a general rule. Change it only together with a new fixture.
pub const AD_LABEL_SPAN_OFFSET: usize = 2;

/// Position of the description in the legacy `> div > div > div > div > div` chain
pub const LEGACY_DESCRIPTION_INDEX: usize = 1;

const LEGACY_DESCRIPTION_PATH: &[&str] = &["div", "div", "div", "div", "div"];

static AD: LazyLock<Selector> = LazyLock::new(|| css(AD_SELECTOR));
static LEGACY_AD: LazyLock<Selector> = LazyLock::new(|| css(LEGACY_AD_SELECTOR));
static HEADING: LazyLock<Selector> = LazyLock::new(|| css("div[role=heading]"));
static LINK: LazyLock<Selector> = LazyLock::new(|| css("a"));
static DESCRIPTION: LazyLock<Selector> = LazyLock::new(|| css(".MUxGbd.yDYNvb.lyLwlc > span"));
static EMPHASIS: LazyLock<Selector> = LazyLock::new(|| css("em, b"));

static DEFAULT_FILTER: LazyLock<NodeFilter> = LazyLock::new(|| {
    NodeFilter::new(default_filter_config()).expect("Failed to build ad filter - this is a bug")
});

/// Filter configuration used by [`extract_paid_results`]
pub fn default_filter_config() -> NodeFilterConfig {
    NodeFilterConfig {
        exclude_selectors: SELLER_RATING_SELECTORS.iter().map(|s| s.to_string()).collect(),
        tracking_attributes: TRACKING_ATTRIBUTES.iter().map(|s| s.to_string()).collect(),
    }
}

/// Ad region layouts. Either may match a few decoy nodes, so the larger set
/// wins; the current layout comes first and wins ties.
pub fn ad_layouts<'a>() -> [Layout<&'a Html, ElementRef<'a>>; 2] {
    [
        Layout::new("current", select_ads),
        Layout::new("legacy", select_legacy_ads),
    ]
}

fn select_ads(document: &Html) -> Vec<ElementRef<'_>> {
    html::select_all(document, &AD)
}

fn select_legacy_ads(document: &Html) -> Vec<ElementRef<'_>> {
    html::select_all(document, &LEGACY_AD)
}

/// Extract all ads, in page order
pub fn extract_paid_results(document: &Html) -> Vec<Ad> {
    extract_paid_results_with(document, &DEFAULT_FILTER)
}

/// Extract all ads using a custom decoy filter
pub fn extract_paid_results_with(document: &Html, filter: &NodeFilter) -> Vec<Ad> {
    let Some(chosen) = largest_match(&ad_layouts(), document) else {
        ::log::debug!("No ad layout matched");
        return Vec::new();
    };

    ::log::debug!("Parsing {} ads from layout '{}'", chosen.items.len(), chosen.layout);

    chosen
        .items
        .into_iter()
        .map(|element| parse_ad(Container::new(element, filter)))
        .collect()
}

/// Parse a single ad container
pub fn parse_ad(container: Container<'_>) -> Ad {
    let heading = container.first(&HEADING);
    let link = heading.and_then(|h| html::parent_with_tag(h, "a"));

    let description_elements = description_elements(container);
    let emphasized_keywords = description_elements
        .iter()
        .flat_map(|el| container.filter.select(*el, &EMPHASIS))
        .map(|el| container.text(el))
        .collect();

    Ad {
        title: heading.map(|h| container.text(h)).unwrap_or_default(),
        url: link.and_then(|l| html::attr(l, "href")),
        displayed_url: link.and_then(|l| displayed_url(container, l)),
        description: non_empty(html::text_of_all(container.filter, &description_elements)),
        emphasized_keywords,
        site_links: parse_site_links(container, link),
    }
}

/// Sitelinks are all anchors except tracking anchors and the main ad link
fn parse_site_links(container: Container<'_>, main_link: Option<ElementRef<'_>>) -> Vec<SiteLink> {
    container
        .select(&LINK)
        .into_iter()
        .filter(|a| !container.filter.is_tracking_link(*a))
        .filter(|a| main_link != Some(*a))
        .map(|a| SiteLink {
            title: container.text(a),
            url: html::attr(a, "href"),
            description: html::sitelink_description(container.filter, a),
        })
        .collect()
}

fn displayed_url(container: Container<'_>, link: ElementRef<'_>) -> Option<String> {
    let spans: Vec<_> = html::child_path(link, &["div", "span"])
        .into_iter()
        .filter(|span| !container.filter.is_hidden_within(container.element, *span))
        .collect();

    spans
        .get(AD_LABEL_SPAN_OFFSET)
        .and_then(|span| non_empty(container.text(*span)))
}

/// Description nodes: the current class path, else the legacy positional one
fn description_elements<'a>(container: Container<'a>) -> Vec<ElementRef<'a>> {
    let current = container.select(&DESCRIPTION);
    if !current.is_empty() {
        return current;
    }

    html::child_path(container.element, LEGACY_DESCRIPTION_PATH)
        .into_iter()
        .filter(|el| !container.filter.is_hidden_within(container.element, *el))
        .nth(LEGACY_DESCRIPTION_INDEX)
        .into_iter()
        .collect()
}
