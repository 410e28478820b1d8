use crate::error::ExtractError;
use crate::extractors::tests::fixtures;
use crate::extractors::{extract_paid_products, extract_related_queries, extract_total_results};
use scraper::Html;

#[cfg(test)]
mod product_tests {
    use super::*;

    #[test]
    fn test_prices_and_displayed_url_by_position() {
        let doc = Html::parse_document(fixtures::PRODUCTS);
        let products = extract_paid_products(&doc);
        assert_eq!(products.len(), 3);

        let first = &products[0];
        assert_eq!(first.title.as_deref(), Some("Trail Shoe"));
        assert_eq!(first.url.as_deref(), Some("https://shop.example/p1"));
        assert_eq!(first.displayed_url.as_deref(), Some("shop.example"));
        assert_eq!(
            first.prices,
            Some(vec!["$89.99".to_string(), "$120.00".to_string()])
        );
        assert_eq!(first.price, None);

        let second = &products[1];
        assert_eq!(second.title.as_deref(), Some("Road Shoe"));
        assert_eq!(second.displayed_url.as_deref(), Some("other.example"));
        assert_eq!(second.prices, Some(Vec::new()));
    }

    #[test]
    fn test_unit_without_heading() {
        let doc = Html::parse_document(fixtures::PRODUCTS);
        assert!(extract_paid_products(&doc)[2].is_empty());
    }
}

#[cfg(test)]
mod total_tests {
    use super::*;

    #[test]
    fn test_result_stats() {
        let doc = Html::parse_document(
            r#"<div id="result-stats">About 6,730,000,000 results<nobr> (0.30 seconds)&nbsp;</nobr></div>"#,
        );
        assert_eq!(extract_total_results(&doc), 6_730_000_000);
    }

    #[test]
    fn test_legacy_id_has_priority() {
        let doc = Html::parse_document(
            r#"<div id="resultStats">About 1,000 results</div>
               <div id="result-stats">About 2,000 results</div>"#,
        );
        assert_eq!(extract_total_results(&doc), 1_000);
    }

    #[test]
    fn test_empty_legacy_element_falls_through() {
        let doc = Html::parse_document(
            r#"<div id="resultStats"> </div>
               <div id="result-stats">Page 3 of about 45,100 results (0.5 s)</div>"#,
        );
        assert_eq!(extract_total_results(&doc), 45_100);
    }

    #[test]
    fn test_missing_or_unparseable() {
        assert_eq!(extract_total_results(&Html::parse_document("")), 0);
        let doc = Html::parse_document(r#"<div id="result-stats">No results</div>"#);
        assert_eq!(extract_total_results(&doc), 0);
    }
}

#[cfg(test)]
mod related_tests {
    use super::*;

    #[test]
    fn test_items_resolve_and_fail_independently() {
        let doc = Html::parse_document(fixtures::RELATED);
        let items = extract_related_queries(&doc, Some("www.google.com"));
        assert_eq!(items.len(), 3);

        let first = items[0].as_ref().unwrap();
        assert_eq!(first.title, "rust book");
        assert_eq!(first.url, "https://www.google.com/search?q=rust+book");

        assert!(matches!(
            &items[1],
            Err(ExtractError::MissingHref { title }) if title == "broken entry"
        ));

        let third = items[2].as_ref().unwrap();
        assert_eq!(third.url, "https://www.google.com/search?q=rust+vs+go");
    }

    #[test]
    fn test_relative_href_without_hostname() {
        let doc = Html::parse_document(fixtures::RELATED);
        let items = extract_related_queries(&doc, None);

        assert!(matches!(
            &items[0],
            Err(ExtractError::UnresolvableUrl { href, hostname: None }) if href == "/search?q=rust+book"
        ));
        // Absolute links do not need the hostname
        assert!(items[2].is_ok());
    }

    #[test]
    fn test_both_container_ids_are_queried() {
        let doc = Html::parse_document(
            r#"<div id="bres"><a href="https://a.example/">A</a></div>
               <div id="brs"><a href="https://b.example/">B</a></div>"#,
        );
        let titles: Vec<String> = extract_related_queries(&doc, None)
            .into_iter()
            .map(|item| item.unwrap().title)
            .collect();
        assert_eq!(titles, vec!["A", "B"]);
    }
}
