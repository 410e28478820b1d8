//! Shopping units in the right-hand column

use crate::extractors::css;
use crate::extractors::html::{self, Container};
use crate::filter::NodeFilter;
use crate::results::ProductInfo;
use crate::utils::non_empty;
use scraper::{Html, Selector};
use std::sync::LazyLock;

pub const PRODUCT_UNIT_SELECTOR: &str = ".commercial-unit-desktop-rhs .pla-unit";

static PRODUCT_UNIT: LazyLock<Selector> = LazyLock::new(|| css(PRODUCT_UNIT_SELECTOR));
static HEADING: LazyLock<Selector> = LazyLock::new(|| css("[role=\"heading\"]"));
static LINK: LazyLock<Selector> = LazyLock::new(|| css("a"));
static SPAN: LazyLock<Selector> = LazyLock::new(|| css("span"));

/// Extract all shopping units, in page order
pub fn extract_paid_products(document: &Html) -> Vec<ProductInfo> {
    let filter = NodeFilter::default();
    let units = html::select_all(document, &PRODUCT_UNIT);
    ::log::debug!("Found {} product units", units.len());

    units
        .into_iter()
        .map(|unit| parse_product_unit(Container::new(unit, &filter)))
        .collect()
}

/// Parse one unit.
///
/// The heading is followed by a flat run of sibling elements: every one of
/// them is a price string except the last, which holds the displayed URL.
/// This is positional, so sibling order is kept as-is.
pub fn parse_product_unit(unit: Container<'_>) -> ProductInfo {
    let Some(heading) = unit.first(&HEADING) else {
        ::log::debug!("Product unit without a heading");
        return ProductInfo::default();
    };

    let mut siblings: Vec<_> = html::next_sibling_elements(heading).collect();
    let displayed_url_el = siblings.pop();

    let prices = siblings
        .into_iter()
        .map(|sibling| unit.text(sibling))
        .collect();

    ProductInfo {
        title: non_empty(unit.text(heading)),
        url: unit
            .filter
            .select(heading, &LINK)
            .first()
            .and_then(|link| html::attr(*link, "href")),
        displayed_url: displayed_url_el
            .and_then(|el| unit.filter.select(el, &SPAN).first().copied())
            .and_then(|span| non_empty(unit.text(span))),
        prices: Some(prices),
        ..ProductInfo::default()
    }
}
