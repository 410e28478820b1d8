use url::Url;

/// Resolve a possibly-relative href against the host the page was served from.
///
/// Absolute hrefs are returned as-is (normalized by the URL parser). Relative
/// hrefs need a hostname; it may be a bare host (`www.google.com`), in which
/// case `https` is assumed, or a full origin (`http://localhost:8080`).
/// Returns `None` when there is no href or nothing absolute can be built.
pub fn resolve_absolute_url(href: Option<&str>, hostname: Option<&str>) -> Option<String> {
    let href = href?.trim();
    if href.is_empty() {
        return None;
    }

    if let Ok(url) = Url::parse(href) {
        return Some(url.into());
    }

    let base = base_url(hostname?)?;
    match base.join(href) {
        Ok(url) => Some(url.into()),
        Err(e) => {
            ::log::debug!("Failed to join {} onto {}: {}", href, base, e);
            None
        }
    }
}

/// Build the base URL for a hostname
fn base_url(hostname: &str) -> Option<Url> {
    let hostname = hostname.trim().trim_end_matches('/');
    if hostname.is_empty() {
        return None;
    }

    let origin = if hostname.contains("://") {
        hostname.to_string()
    } else {
        format!("https://{hostname}")
    };

    Url::parse(&origin).ok()
}

/// Collapse runs of whitespace into single spaces and trim the ends
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// `None` for empty strings
pub fn non_empty(text: String) -> Option<String> {
    if text.is_empty() { None } else { Some(text) }
}
