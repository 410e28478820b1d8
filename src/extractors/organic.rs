//! Organic (unpaid) results, including nested sitelinks and inline product info

use crate::extractors::html::{self, Container};
use crate::extractors::layout::{Layout, first_match};
use crate::extractors::{css, text};
use crate::filter::{NodeFilter, NodeFilterConfig};
use crate::results::{ProductInfo, SearchResult, SiteLink};
use crate::utils::non_empty;
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

/// Result containers in the pre-2021 layout
pub const LEGACY_RESULT_SELECTOR: &str = ".g .rc";

/// Result containers since January 2021. This matches one level below the
/// container to avoid false positives; parsing starts from the parent.
pub const RESULT_SELECTOR_2021: &str = ".g .tF2Cxc > .yuRUbf";

/// Transient UI overlays whose text would end up in the description
pub const OVERLAY_SELECTORS: &[&str] = &["div.action-menu"];

static LEGACY_RESULT: LazyLock<Selector> = LazyLock::new(|| css(LEGACY_RESULT_SELECTOR));
static RESULT_2021: LazyLock<Selector> = LazyLock::new(|| css(RESULT_SELECTOR_2021));

static SITELINK_LIST_ITEM: LazyLock<Selector> = LazyLock::new(|| css("ul li"));
static SITELINK_GRID_LINK: LazyLock<Selector> = LazyLock::new(|| css(".St3GK a"));
static SITELINK_TABLE_ITEM: LazyLock<Selector> = LazyLock::new(|| css("td .sld"));
static SITELINK_TABLE_DESCRIPTION: LazyLock<Selector> = LazyLock::new(|| css(".s"));

static PRODUCT_INFO: LazyLock<Selector> = LazyLock::new(|| css(".dhIWPd, .fG8Fp"));

static HEADING: LazyLock<Selector> = LazyLock::new(|| css("h3"));
static HEADING_LINK: LazyLock<Selector> = LazyLock::new(|| css("h3 a"));
static LINK: LazyLock<Selector> = LazyLock::new(|| css("a"));
static DIV: LazyLock<Selector> = LazyLock::new(|| css("div"));
static CITE: LazyLock<Selector> = LazyLock::new(|| css("cite"));
static SNIPPET: LazyLock<Selector> = LazyLock::new(|| css(".IsZvec"));
static SNIPPET_EMPHASIS: LazyLock<Selector> = LazyLock::new(|| css(".IsZvec em, .IsZvec b"));

static DEFAULT_FILTER: LazyLock<NodeFilter> = LazyLock::new(|| {
    NodeFilter::new(default_filter_config())
        .expect("Failed to build organic result filter - this is a bug")
});

/// Filter configuration used by [`extract_organic_results`]
pub fn default_filter_config() -> NodeFilterConfig {
    NodeFilterConfig {
        exclude_selectors: OVERLAY_SELECTORS.iter().map(|s| s.to_string()).collect(),
        tracking_attributes: Vec::new(),
    }
}

/// Result container layouts in priority order
pub fn result_layouts<'a>() -> [Layout<&'a Html, ElementRef<'a>>; 2] {
    [
        Layout::new("legacy", select_legacy_results),
        Layout::new("2021-01", select_2021_results),
    ]
}

fn select_legacy_results(document: &Html) -> Vec<ElementRef<'_>> {
    html::select_all(document, &LEGACY_RESULT)
}

fn select_2021_results(document: &Html) -> Vec<ElementRef<'_>> {
    html::select_all(document, &RESULT_2021)
        .into_iter()
        .filter_map(html::parent_element)
        .collect()
}

/// Sitelink layouts in priority order. Only the first one that matches is used.
pub fn sitelink_layouts<'a>() -> [Layout<Container<'a>, SiteLink>; 3] {
    [
        Layout::new("legacy-list", legacy_list_sitelinks),
        Layout::new("2020-grid", grid_sitelinks),
        Layout::new("2021-01-table", table_sitelinks),
    ]
}

fn legacy_list_sitelinks(container: Container<'_>) -> Vec<SiteLink> {
    container
        .select(&SITELINK_LIST_ITEM)
        .into_iter()
        .map(|item| {
            let item = Container::new(item, container.filter);
            let descriptions = html::outermost(&item.select(&DIV));
            SiteLink {
                title: item.text_of(&HEADING),
                url: item
                    .first(&HEADING_LINK)
                    .and_then(|link| html::attr(link, "href")),
                description: non_empty(html::text_of_all(container.filter, &descriptions)),
            }
        })
        .collect()
}

fn grid_sitelinks(container: Container<'_>) -> Vec<SiteLink> {
    container
        .select(&SITELINK_GRID_LINK)
        .into_iter()
        .map(|link| SiteLink {
            title: container.text(link),
            url: html::attr(link, "href"),
            description: html::sitelink_description(container.filter, link),
        })
        .collect()
}

/// The table sits next to the result's grandparent, outside the container
fn table_sitelinks(container: Container<'_>) -> Vec<SiteLink> {
    let Some(grandparent) =
        html::parent_element(container.element).and_then(html::parent_element)
    else {
        return Vec::new();
    };

    html::sibling_elements(grandparent)
        .into_iter()
        .filter(|sibling| html::is_tag(*sibling, "table"))
        .flat_map(|table| container.filter.select(table, &SITELINK_TABLE_ITEM))
        .map(|item| {
            let item = Container::new(item, container.filter);
            SiteLink {
                title: item.text_of(&LINK),
                url: item.first(&LINK).and_then(|link| html::attr(link, "href")),
                description: non_empty(item.text_of(&SITELINK_TABLE_DESCRIPTION)),
            }
        })
        .collect()
}

/// Extract all organic results, in page order
pub fn extract_organic_results(document: &Html) -> Vec<SearchResult> {
    extract_organic_results_with(document, &DEFAULT_FILTER)
}

/// Extract all organic results using a custom decoy filter
pub fn extract_organic_results_with(document: &Html, filter: &NodeFilter) -> Vec<SearchResult> {
    let Some(chosen) = first_match(&result_layouts(), document) else {
        ::log::debug!("No organic result layout matched");
        return Vec::new();
    };

    ::log::debug!(
        "Parsing {} organic results from layout '{}'",
        chosen.items.len(),
        chosen.layout
    );

    chosen
        .items
        .into_iter()
        .map(|element| parse_result(Container::new(element, filter)))
        .collect()
}

/// Parse a single result container
pub fn parse_result(container: Container<'_>) -> SearchResult {
    let title = container
        .first(&HEADING)
        .map(|heading| container.text(heading))
        .unwrap_or_default();

    let url = container
        .first(&LINK)
        .and_then(|link| html::attr(link, "href"));

    let displayed_url = container
        .first(&CITE)
        .and_then(|cite| non_empty(container.text(cite)));

    let emphasized_keywords = container
        .select(&SNIPPET_EMPHASIS)
        .into_iter()
        .map(|el| container.text(el))
        .collect();

    SearchResult {
        title,
        url,
        displayed_url,
        description: non_empty(container.text_of(&SNIPPET)),
        emphasized_keywords,
        site_links: parse_site_links(container),
        product_info: parse_product_info(container),
    }
}

/// Sitelinks of a result, from the first sitelink layout that matches
pub fn parse_site_links(container: Container<'_>) -> Vec<SiteLink> {
    first_match(&sitelink_layouts(), container)
        .map(|chosen| chosen.items)
        .unwrap_or_default()
}

/// Rating, review count and price from the product info blob, if any
pub fn parse_product_info(container: Container<'_>) -> Option<ProductInfo> {
    let blob = container.text_of(&PRODUCT_INFO);
    if blob.is_empty() {
        return None;
    }

    let info = text::parse_product_info(&blob);
    if info.is_empty() {
        ::log::debug!("Product info blob without known patterns: {:?}", blob);
        None
    } else {
        Some(info)
    }
}
