/// Errors raised while configuring or running extraction
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    /// A related-query anchor has no href at all
    #[error("related query `{title}` has no href")]
    MissingHref { title: String },

    /// An href could not be turned into an absolute URL
    #[error("cannot resolve `{href}` against host {hostname:?}")]
    UnresolvableUrl {
        href: String,
        hostname: Option<String>,
    },

    /// A configured CSS selector does not parse
    #[error("invalid selector `{selector}`: {reason}")]
    InvalidSelector { selector: String, reason: String },

    /// Configuration is structurally valid JSON but unusable
    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
