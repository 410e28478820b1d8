//! Named layout variants and the rules for choosing between them
//!
//! The results page has shipped several incompatible structures for the same
//! logical content. Each structure is a [`Layout`]: a name plus a pure
//! function from an input (a document or a container element) to whatever it
//! matched. Extractors keep their variants in an ordered list, newest layout
//! first unless noted otherwise, and pick one with [`first_match`] or
//! [`largest_match`]. Matches are never merged across layouts.

/// One layout variant
pub struct Layout<I, T> {
    /// Short identifier used in logs and tests
    pub name: &'static str,
    /// Matcher for this variant; an empty result means "not this layout"
    pub select: fn(I) -> Vec<T>,
}

impl<I, T> Layout<I, T> {
    pub const fn new(name: &'static str, select: fn(I) -> Vec<T>) -> Self {
        Self { name, select }
    }

    /// Run this layout on its own
    pub fn apply(&self, input: I) -> Vec<T> {
        (self.select)(input)
    }
}

/// Result of choosing a layout
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutMatch<T> {
    /// Name of the chosen layout
    pub layout: &'static str,
    pub items: Vec<T>,
}

/// Try layouts in priority order and adopt the first non-empty one
pub fn first_match<I: Copy, T>(layouts: &[Layout<I, T>], input: I) -> Option<LayoutMatch<T>> {
    for layout in layouts {
        let items = layout.apply(input);
        if !items.is_empty() {
            ::log::debug!("Layout '{}' matched {} items", layout.name, items.len());
            return Some(LayoutMatch {
                layout: layout.name,
                items,
            });
        }
    }
    None
}

/// Run every layout and adopt the one with the most matches.
///
/// On a tie the earlier layout in the list wins. Returns `None` only when
/// every layout matched nothing.
pub fn largest_match<I: Copy, T>(layouts: &[Layout<I, T>], input: I) -> Option<LayoutMatch<T>> {
    let mut best: Option<LayoutMatch<T>> = None;

    for layout in layouts {
        let items = layout.apply(input);
        ::log::debug!("Layout '{}' matched {} items", layout.name, items.len());

        let better = match &best {
            Some(current) => items.len() > current.items.len(),
            None => !items.is_empty(),
        };
        if better {
            best = Some(LayoutMatch {
                layout: layout.name,
                items,
            });
        }
    }

    best
}
