use serde::{Deserialize, Serialize};

/// A secondary link nested under an organic result or an ad
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteLink {
    /// Link text
    pub title: String,

    /// Raw href of the link (if present)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Short description shown below the link (if the layout has one)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Product data attached to an organic result, or a standalone shopping unit
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub displayed_url: Option<String>,

    /// Star rating on a 0-5 scale
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_reviews: Option<u64>,

    /// Price with the currency symbol and group separators stripped
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,

    /// Raw price strings, in page order, when a unit lists several
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prices: Option<Vec<String>>,
}

impl ProductInfo {
    /// True when no field was found
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// One organic (unpaid) result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub title: String,

    /// Raw href of the result link, not resolved
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub displayed_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Highlighted substrings of the description, in document order
    pub emphasized_keywords: Vec<String>,

    pub site_links: Vec<SiteLink>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_info: Option<ProductInfo>,
}

/// One paid result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ad {
    pub title: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub displayed_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub emphasized_keywords: Vec<String>,

    pub site_links: Vec<SiteLink>,
}

/// A suggested follow-up search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelatedItem {
    pub title: String,

    /// Always absolute
    pub url: String,
}

/// Everything extracted from one results page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SerpData {
    pub organic_results: Vec<SearchResult>,
    pub paid_results: Vec<Ad>,
    pub paid_products: Vec<ProductInfo>,
    pub total_results: u64,
    pub related_queries: Vec<RelatedItem>,

    /// Opaque output of a plugged-in people-also-ask extractor
    #[serde(skip_serializing_if = "Option::is_none")]
    pub people_also_ask: Option<serde_json::Value>,
}
