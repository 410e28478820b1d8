//! Tree traversal helpers shared by the extractors
//!
//! Thin wrappers around `scraper` for the structural walks CSS selectors
//! cannot express from a scoped element (direct-child chains, typed parent
//! steps, siblings), plus text helpers that go through a [`NodeFilter`].

use crate::filter::NodeFilter;
use crate::utils::{non_empty, normalize_whitespace};
use scraper::{ElementRef, Html, Selector};

/// An element together with the filter its extractor uses
#[derive(Clone, Copy)]
pub struct Container<'a> {
    pub element: ElementRef<'a>,
    pub filter: &'a NodeFilter,
}

impl<'a> Container<'a> {
    pub fn new(element: ElementRef<'a>, filter: &'a NodeFilter) -> Self {
        Self { element, filter }
    }

    /// Visible descendants matching `selector`
    pub fn select(&self, selector: &Selector) -> Vec<ElementRef<'a>> {
        self.filter.select(self.element, selector)
    }

    /// First visible descendant matching `selector`
    pub fn first(&self, selector: &Selector) -> Option<ElementRef<'a>> {
        self.select(selector).into_iter().next()
    }

    /// Normalized text of all visible descendants matching `selector`
    pub fn text_of(&self, selector: &Selector) -> String {
        text_of_all(self.filter, &self.select(selector))
    }

    /// Normalized text of an element
    pub fn text(&self, element: ElementRef<'_>) -> String {
        normalize_whitespace(&self.filter.text(element))
    }
}

/// Select from the whole document
pub fn select_all<'a>(document: &'a Html, selector: &Selector) -> Vec<ElementRef<'a>> {
    document.select(selector).collect()
}

/// Concatenated, whitespace-normalized text of a set of elements
pub fn text_of_all(filter: &NodeFilter, elements: &[ElementRef<'_>]) -> String {
    let joined: String = elements.iter().map(|el| filter.text(*el)).collect();
    normalize_whitespace(&joined)
}

/// Attribute value of an element, if the attribute is present
pub fn attr(element: ElementRef<'_>, name: &str) -> Option<String> {
    element.value().attr(name).map(String::from)
}

/// Check the tag name of an element
pub fn is_tag(element: ElementRef<'_>, tag: &str) -> bool {
    element.value().name().eq_ignore_ascii_case(tag)
}

/// Parent element, if there is one
pub fn parent_element(element: ElementRef<'_>) -> Option<ElementRef<'_>> {
    element.parent().and_then(ElementRef::wrap)
}

/// Parent element, only when it has the given tag
pub fn parent_with_tag<'a>(element: ElementRef<'a>, tag: &str) -> Option<ElementRef<'a>> {
    parent_element(element).filter(|parent| is_tag(*parent, tag))
}

/// Direct child elements in document order
pub fn child_elements(element: ElementRef<'_>) -> impl Iterator<Item = ElementRef<'_>> {
    element.children().filter_map(ElementRef::wrap)
}

/// Following sibling elements in document order
pub fn next_sibling_elements(element: ElementRef<'_>) -> impl Iterator<Item = ElementRef<'_>> {
    element.next_siblings().filter_map(ElementRef::wrap)
}

/// Sibling elements on both sides, in document order, excluding the element itself
pub fn sibling_elements(element: ElementRef<'_>) -> Vec<ElementRef<'_>> {
    let mut siblings: Vec<_> = element
        .prev_siblings()
        .filter_map(ElementRef::wrap)
        .collect();
    siblings.reverse();
    siblings.extend(next_sibling_elements(element));
    siblings
}

/// Walk a chain of direct children by tag name, like `> div > div > span`.
///
/// Returns every element reached at the end of the chain, in document order.
pub fn child_path<'a>(element: ElementRef<'a>, tags: &[&str]) -> Vec<ElementRef<'a>> {
    let mut frontier = vec![element];
    for tag in tags {
        frontier = frontier
            .into_iter()
            .flat_map(child_elements)
            .filter(|child| is_tag(*child, tag))
            .collect();
    }
    frontier
}

/// Drop elements that are nested inside another element of the same set
pub fn outermost<'a>(elements: &[ElementRef<'a>]) -> Vec<ElementRef<'a>> {
    elements
        .iter()
        .filter(|el| {
            !el.ancestors()
                .filter_map(ElementRef::wrap)
                .any(|ancestor| elements.contains(&ancestor))
        })
        .copied()
        .collect()
}

/// Description lookup for a sitelink anchor.
///
/// Sitelinks in the grid layouts sit inside `div > h3 > div > a`; the
/// description lives in the `div` children of the outer `div`, next to the
/// heading. The walk is strict: if any step of the ancestor chain has a
/// different tag, there is no description.
pub fn sitelink_description(filter: &NodeFilter, anchor: ElementRef<'_>) -> Option<String> {
    let outer = parent_with_tag(anchor, "div")
        .and_then(|div| parent_with_tag(div, "h3"))
        .and_then(|h3| parent_with_tag(h3, "div"))?;

    let parts: Vec<String> = child_elements(outer)
        .filter(|child| is_tag(*child, "div"))
        .map(|div| normalize_whitespace(&filter.text(div)))
        .filter(|text| !text.is_empty())
        .collect();

    non_empty(parts.join(" "))
}
