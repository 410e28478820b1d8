use crate::error::ExtractError;
use scraper::{ElementRef, Node, Selector};
use serde::{Deserialize, Serialize};

/// Configuration for decoy-node filtering in extractors
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NodeFilterConfig {
    /// CSS selectors for elements whose whole subtree is ignored
    /// (overlay menus, rating widgets and the like)
    #[serde(default)]
    pub exclude_selectors: Vec<String>,

    /// Attributes that mark an anchor as a tracking link rather than a real one
    #[serde(default)]
    pub tracking_attributes: Vec<String>,
}

/// Non-destructive replacement for removing decoy nodes from the tree.
///
/// Every text and selection helper skips nodes that sit inside an excluded
/// element, so the document itself is never touched and the same tree can be
/// handed to any number of extractors.
#[derive(Debug, Default)]
pub struct NodeFilter {
    config: NodeFilterConfig,
    exclude_selectors: Vec<Selector>,
}

impl NodeFilter {
    /// Create a new node filter from configuration
    pub fn new(config: NodeFilterConfig) -> Result<Self, ExtractError> {
        let mut exclude_selectors = Vec::with_capacity(config.exclude_selectors.len());
        for selector in &config.exclude_selectors {
            exclude_selectors.push(parse_selector(selector)?);
        }

        if let Some(attr) = config
            .tracking_attributes
            .iter()
            .find(|attr| attr.trim().is_empty())
        {
            return Err(ExtractError::Config(format!(
                "tracking attribute name must not be blank, got {attr:?}"
            )));
        }

        Ok(Self {
            config,
            exclude_selectors,
        })
    }

    /// The configuration this filter was built from
    pub fn config(&self) -> &NodeFilterConfig {
        &self.config
    }

    /// Check if the element itself matches one of the exclusions
    pub fn is_excluded(&self, element: ElementRef<'_>) -> bool {
        self.exclude_selectors.iter().any(|s| s.matches(&element))
    }

    /// Check if the element is excluded or sits inside an excluded element
    /// below `scope`. Exclusions matching `scope` or anything above it are
    /// not considered, only the scope's own descendants can be decoys.
    pub fn is_hidden_within<'a>(&self, scope: ElementRef<'a>, element: ElementRef<'a>) -> bool {
        if self.exclude_selectors.is_empty() || element == scope {
            return false;
        }

        self.is_excluded(element)
            || element
                .ancestors()
                .filter_map(ElementRef::wrap)
                .take_while(|ancestor| *ancestor != scope)
                .any(|ancestor| self.is_excluded(ancestor))
    }

    /// Check if an anchor carries a tracking attribute
    pub fn is_tracking_link(&self, element: ElementRef<'_>) -> bool {
        self.config
            .tracking_attributes
            .iter()
            .any(|attr| element.value().attr(attr).is_some())
    }

    /// Select descendants of `scope`, skipping anything that is hidden
    pub fn select<'a>(&self, scope: ElementRef<'a>, selector: &Selector) -> Vec<ElementRef<'a>> {
        scope
            .select(selector)
            .filter(|el| !self.is_hidden_within(scope, *el))
            .collect()
    }

    /// Raw text content of an element, leaving out excluded subtrees
    pub fn text(&self, element: ElementRef<'_>) -> String {
        let mut out = String::new();
        if !self.is_excluded(element) {
            self.collect_text(element, &mut out);
        }
        out
    }

    fn collect_text(&self, element: ElementRef<'_>, out: &mut String) {
        for child in element.children() {
            if let Node::Text(text) = child.value() {
                out.push_str(text);
            } else if let Some(child_el) = ElementRef::wrap(child)
                && !self.is_excluded(child_el)
            {
                self.collect_text(child_el, out);
            }
        }
    }
}

/// Parse a CSS selector, mapping the error into ours
pub fn parse_selector(selector: &str) -> Result<Selector, ExtractError> {
    Selector::parse(selector).map_err(|e| ExtractError::InvalidSelector {
        selector: selector.to_string(),
        reason: format!("{e:?}"),
    })
}
