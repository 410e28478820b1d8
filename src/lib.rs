// Re-export modules
pub mod config;
pub mod error;
pub mod extractors;
pub mod filter;
pub mod results;
pub mod utils;

// Re-export commonly used types for convenience
pub use error::ExtractError;
pub use results::{Ad, ProductInfo, RelatedItem, SearchResult, SerpData, SiteLink};

use extractors::PeopleAlsoAskExtractor;
use filter::NodeFilter;
use scraper::Html;

/// Main builder for extracting everything from a results page
pub struct SerpExtractor {
    config: config::ExtractorConfig,
    organic_filter: NodeFilter,
    ad_filter: NodeFilter,
    people_also_ask: Option<Box<dyn PeopleAlsoAskExtractor>>,
}

impl SerpExtractor {
    /// Create a new extractor with the default configuration
    pub fn new() -> Self {
        Self {
            config: config::ExtractorConfig::default(),
            organic_filter: NodeFilter::default(),
            ad_filter: NodeFilter::default(),
            people_also_ask: None,
        }
        .rebuild_filters()
        .unwrap_or_else(|e| panic!("Default configuration is invalid: {e} - this is a bug"))
    }

    /// Set the configuration
    pub fn with_config(mut self, config: config::ExtractorConfig) -> Result<Self, ExtractError> {
        self.config = config;
        self.rebuild_filters()
    }

    /// Load configuration from a file
    pub fn with_config_file(self, path: impl AsRef<std::path::Path>) -> Result<Self, ExtractError> {
        let config = config::ExtractorConfig::from_file(path)?;
        self.with_config(config)
    }

    /// Load configuration from a string
    pub fn with_config_str(self, config_str: &str) -> Result<Self, ExtractError> {
        let config = config::ExtractorConfig::from_json(config_str)?;
        self.with_config(config)
    }

    /// Set the host used to make related-query links absolute
    pub fn with_hostname(mut self, hostname: impl Into<String>) -> Self {
        self.config.hostname = Some(hostname.into());
        self
    }

    /// Plug in a "people also ask" extractor
    pub fn with_people_also_ask(
        mut self,
        extractor: impl PeopleAlsoAskExtractor + 'static,
    ) -> Self {
        self.people_also_ask = Some(Box::new(extractor));
        self
    }

    /// The active configuration
    pub fn config(&self) -> &config::ExtractorConfig {
        &self.config
    }

    fn rebuild_filters(mut self) -> Result<Self, ExtractError> {
        self.organic_filter = self.config.organic_filter()?;
        self.ad_filter = self.config.ad_filter()?;
        Ok(self)
    }

    /// Parse the page and run every extractor over it
    pub fn extract(&self, html: &str) -> Result<SerpData, ExtractError> {
        let document = Html::parse_document(html);
        self.extract_document(&document)
    }

    /// Run every extractor over an already-parsed page
    pub fn extract_document(&self, document: &Html) -> Result<SerpData, ExtractError> {
        let hostname = self.config.hostname.as_deref();

        let mut related_queries = Vec::new();
        for item in extractors::extract_related_queries(document, hostname) {
            match item {
                Ok(item) => related_queries.push(item),
                Err(e) if self.config.strict_related => return Err(e),
                Err(e) => ::log::warn!("Skipping related query: {}", e),
            }
        }

        let data = SerpData {
            organic_results: extractors::extract_organic_results_with(
                document,
                &self.organic_filter,
            ),
            paid_results: extractors::extract_paid_results_with(document, &self.ad_filter),
            paid_products: extractors::extract_paid_products(document),
            total_results: extractors::extract_total_results(document),
            related_queries,
            people_also_ask: self
                .people_also_ask
                .as_deref()
                .map(|e| extractors::extract_people_also_ask(document, e)),
        };

        ::log::info!(
            "Extracted {} organic results, {} ads, {} products, {} related queries (total {})",
            data.organic_results.len(),
            data.paid_results.len(),
            data.paid_products.len(),
            data.related_queries.len(),
            data.total_results
        );

        Ok(data)
    }
}

impl Default for SerpExtractor {
    fn default() -> Self {
        Self::new()
    }
}
