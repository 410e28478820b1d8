//! Extractors for search-engine results pages
//!
//! Each extractor is a plain function over an already-parsed [`scraper::Html`]
//! and returns owned records. None of them mutate the document, so they can
//! run in any order over the same tree.

pub mod html;
pub mod layout;
pub mod organic;
pub mod paid;
pub mod people_also_ask;
pub mod products;
pub mod related;
pub mod text;
pub mod total;

#[cfg(test)]
mod tests;

pub use organic::{extract_organic_results, extract_organic_results_with};
pub use paid::{extract_paid_results, extract_paid_results_with};
pub use people_also_ask::{PeopleAlsoAskExtractor, extract_people_also_ask};
pub use products::extract_paid_products;
pub use related::extract_related_queries;
pub use total::extract_total_results;

use scraper::Selector;

/// Compile one of the built-in selector literals
fn css(selector: &str) -> Selector {
    Selector::parse(selector).unwrap_or_else(|e| {
        panic!("Failed to parse built-in selector {selector:?}: {e:?} - this is a bug")
    })
}
