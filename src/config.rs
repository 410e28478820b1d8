use crate::error::ExtractError;
use crate::extractors::{organic, paid};
use crate::filter::{NodeFilter, NodeFilterConfig};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Configuration for a full results-page extraction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Host the page was fetched from, used to make related-query links absolute
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,

    /// Decoy elements ignored inside organic results
    #[serde(default = "default_organic_exclusions")]
    pub organic_exclusions: Vec<String>,

    /// Decoy elements ignored inside ads
    #[serde(default = "default_ad_exclusions")]
    pub ad_exclusions: Vec<String>,

    /// Anchor attributes that mark ad tracking links
    #[serde(default = "default_ad_tracking_attributes")]
    pub ad_tracking_attributes: Vec<String>,

    /// Fail the whole extraction on the first related query without a
    /// navigable link, instead of skipping it
    #[serde(default)]
    pub strict_related: bool,
}

/// Default value for organic_exclusions
fn default_organic_exclusions() -> Vec<String> {
    organic::default_filter_config().exclude_selectors
}

/// Default value for ad_exclusions
fn default_ad_exclusions() -> Vec<String> {
    paid::default_filter_config().exclude_selectors
}

/// Default value for ad_tracking_attributes
fn default_ad_tracking_attributes() -> Vec<String> {
    paid::default_filter_config().tracking_attributes
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            hostname: None,
            organic_exclusions: default_organic_exclusions(),
            ad_exclusions: default_ad_exclusions(),
            ad_tracking_attributes: default_ad_tracking_attributes(),
            strict_related: false,
        }
    }
}

impl ExtractorConfig {
    /// Load configuration from a file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ExtractError> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ExtractError> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config)
    }

    /// Build the node filter for organic results
    pub fn organic_filter(&self) -> Result<NodeFilter, ExtractError> {
        NodeFilter::new(NodeFilterConfig {
            exclude_selectors: self.organic_exclusions.clone(),
            tracking_attributes: Vec::new(),
        })
    }

    /// Build the node filter for ads
    pub fn ad_filter(&self) -> Result<NodeFilter, ExtractError> {
        NodeFilter::new(NodeFilterConfig {
            exclude_selectors: self.ad_exclusions.clone(),
            tracking_attributes: self.ad_tracking_attributes.clone(),
        })
    }
}
