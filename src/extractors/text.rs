//! Pattern-based parsing of semantic values out of free text
//!
//! The results page rarely exposes ratings, prices or counts as dedicated
//! fields; they are embedded in human-readable strings such as
//! `Rating: 4.5 · 1,234 reviews · $19.99`. Each value has its own pattern and
//! its own function so they can be tested independently.

use crate::results::ProductInfo;
use regex::Regex;
use std::sync::LazyLock;

/// `Rating: 4.5`
pub const RATING_PATTERN: &str = r"Rating:\s*([0-9]+(?:\.[0-9]+)?)";

/// `1,234 reviews`
pub const REVIEW_COUNT_PATTERN: &str = r"([0-9][0-9,]*)\s+reviews?\b";

/// `$1,299.99`
pub const PRICE_PATTERN: &str = r"\$\s?([0-9][0-9,]*(?:\.[0-9]+)?)";

/// Digits interleaved with single group separators: `6,730,000`, `6 730 000`, `6.730.000`
pub const DIGIT_RUN_PATTERN: &str = r"\d+(?:[.,\s]\d+)*";

/// Highest value on the rating scale
pub const MAX_RATING: f64 = 5.0;

static RATING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(RATING_PATTERN).expect("Failed to compile rating regex - this is a bug")
});
static REVIEW_COUNT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(REVIEW_COUNT_PATTERN).expect("Failed to compile review count regex - this is a bug")
});
static PRICE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(PRICE_PATTERN).expect("Failed to compile price regex - this is a bug")
});
static DIGIT_RUN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(DIGIT_RUN_PATTERN).expect("Failed to compile digit run regex - this is a bug")
});

/// Extract a 0-5 star rating
pub fn parse_rating(text: &str) -> Option<f64> {
    let captured = RATING_RE.captures(text)?.get(1)?.as_str();
    let rating: f64 = captured.parse().ok()?;

    if (0.0..=MAX_RATING).contains(&rating) {
        Some(rating)
    } else {
        ::log::debug!("Ignoring out-of-range rating {}", rating);
        None
    }
}

/// Extract a review count, dropping thousands separators
pub fn parse_review_count(text: &str) -> Option<u64> {
    let captured = REVIEW_COUNT_RE.captures(text)?.get(1)?.as_str();
    strip_group_separators(captured).parse().ok()
}

/// Extract a dollar price as a number, dropping the currency symbol and separators
pub fn parse_price(text: &str) -> Option<f64> {
    let captured = PRICE_RE.captures(text)?.get(1)?.as_str();
    strip_group_separators(captured).parse().ok()
}

/// Apply the rating, review count and price patterns to a product blob.
///
/// Each pattern is independent; a blob may yield any subset of the three.
pub fn parse_product_info(text: &str) -> ProductInfo {
    ProductInfo {
        rating: parse_rating(text),
        number_of_reviews: parse_review_count(text),
        price: parse_price(text),
        ..ProductInfo::default()
    }
}

/// Remove comma thousands separators
pub fn strip_group_separators(text: &str) -> String {
    text.replace(',', "")
}

/// Longest run of digits and group separators; the first one wins a tie
pub fn longest_digit_run(text: &str) -> Option<&str> {
    DIGIT_RUN_RE
        .find_iter(text)
        .map(|m| m.as_str())
        .fold(None, |best: Option<&str>, candidate| match best {
            Some(current) if current.len() >= candidate.len() => Some(current),
            _ => Some(candidate),
        })
}

/// Parse a locale-formatted result count line into an integer.
///
/// Anything from the first `(` on (timing info) is ignored. The true count
/// is the longest numeric run on the line; page numbers are shorter. Group
/// separators of any locale are discarded. Returns 0 when nothing parses.
pub fn parse_result_count(text: &str) -> u64 {
    let head = text.split('(').next().unwrap_or_default();

    let Some(run) = longest_digit_run(head) else {
        return 0;
    };

    let digits: String = run.chars().filter(char::is_ascii_digit).collect();
    match digits.parse() {
        Ok(count) => count,
        Err(e) => {
            ::log::warn!("Failed to parse result count {:?}: {}", run, e);
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_blob() {
        let info = parse_product_info("Rating: 4.5 · 1,234 reviews · $19.99");
        assert_eq!(info.rating, Some(4.5));
        assert_eq!(info.number_of_reviews, Some(1234));
        assert_eq!(info.price, Some(19.99));
        assert_eq!(info.title, None);
        assert_eq!(info.prices, None);
    }

    #[test]
    fn test_patterns_are_independent() {
        let info = parse_product_info("Rating: 3 · In stock");
        assert_eq!(info.rating, Some(3.0));
        assert_eq!(info.number_of_reviews, None);
        assert_eq!(info.price, None);

        let info = parse_product_info("12,345 reviews");
        assert_eq!(info.rating, None);
        assert_eq!(info.number_of_reviews, Some(12345));

        assert!(parse_product_info("nothing here").is_empty());
    }

    #[test]
    fn test_rating() {
        assert_eq!(parse_rating("Rating: 4.8 - 1 review"), Some(4.8));
        // Trailing sentence period is not part of the number
        assert_eq!(parse_rating("Rating: 4.5."), Some(4.5));
        assert_eq!(parse_rating("Rating: 9.5"), None);
        assert_eq!(parse_rating("rated 4.5"), None);
    }

    #[test]
    fn test_review_count() {
        assert_eq!(parse_review_count("1 review"), Some(1));
        assert_eq!(parse_review_count("2,001,010 reviews"), Some(2001010));
        assert_eq!(parse_review_count("reviews"), None);
    }

    #[test]
    fn test_price() {
        assert_eq!(parse_price("$1,299.00"), Some(1299.0));
        assert_eq!(parse_price("from $ 5"), Some(5.0));
        assert_eq!(parse_price("€5"), None);
    }

    #[test]
    fn test_result_count() {
        assert_eq!(
            parse_result_count("About 6,730,000,000 results (0.30 seconds)"),
            6_730_000_000
        );
        assert_eq!(
            parse_result_count("Přibližný počet výsledků: 6 730 000 000 (0,30 s)"),
            6_730_000_000
        );
        assert_eq!(
            parse_result_count("Page 2 of about 1.234.567 results (0,41 seconds)"),
            1_234_567
        );
        assert_eq!(parse_result_count("About 10\u{a0}200 results"), 10_200);
        assert_eq!(parse_result_count("No results"), 0);
        assert_eq!(parse_result_count(""), 0);
    }

    #[test]
    fn test_longest_digit_run_prefers_first_on_tie() {
        assert_eq!(longest_digit_run("12 and 34"), Some("12"));
        assert_eq!(longest_digit_run("1 and 1,000"), Some("1,000"));
        assert_eq!(longest_digit_run("none"), None);
    }
}
