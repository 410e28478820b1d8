//! "People also ask" pass-through
//!
//! The question block is parsed elsewhere; this crate only defines the seam
//! and forwards whatever the plugged-in extractor returns.

use scraper::Html;
use serde_json::Value;

/// Something that can pull the "people also ask" block out of a page
pub trait PeopleAlsoAskExtractor {
    fn extract(&self, document: &Html) -> Value;
}

impl<F> PeopleAlsoAskExtractor for F
where
    F: Fn(&Html) -> Value,
{
    fn extract(&self, document: &Html) -> Value {
        self(document)
    }
}

/// Run the given extractor and return its output untouched
pub fn extract_people_also_ask(document: &Html, extractor: &dyn PeopleAlsoAskExtractor) -> Value {
    extractor.extract(document)
}
