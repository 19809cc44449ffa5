//! Category keyword matching over a vendor snapshot.

use std::sync::LazyLock;

use regex::Regex;
use slyzah_core::VendorRecord;

/// Crude plural/gerund suffix. Longer alternatives come first so "cleaners"
/// loses "ers" rather than "s".
static SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(ing|ers|er|s)$").expect("valid regex"));

/// Keywords shorter than this after stemming are dropped.
const MIN_KEYWORD_LEN: usize = 3;

/// Lower-case, split on whitespace, strip one trailing suffix per token,
/// and keep tokens of at least three characters.
#[must_use]
pub fn stem_keywords(query: &str) -> Vec<String> {
    query
        .to_lowercase()
        .split_whitespace()
        .map(|word| SUFFIX.replace(word, "").trim().to_string())
        .filter(|word| word.chars().count() >= MIN_KEYWORD_LEN)
        .collect()
}

/// Vendors whose category or full description contains any stemmed keyword
/// of `query`. Input order is preserved; an empty keyword set matches nothing.
#[must_use]
pub fn match_vendors<'a>(query: &str, vendors: &'a [VendorRecord]) -> Vec<&'a VendorRecord> {
    let keywords = stem_keywords(query);
    if keywords.is_empty() {
        return Vec::new();
    }

    vendors
        .iter()
        .filter(|vendor| {
            let category = vendor.category.to_lowercase();
            let description = vendor.full_category_description.to_lowercase();
            keywords
                .iter()
                .any(|k| category.contains(k.as_str()) || description.contains(k.as_str()))
        })
        .collect()
}
