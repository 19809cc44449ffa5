//! Category search over one vendor snapshot: match, rank, and classify.

use rand::Rng;
use serde::{Deserialize, Serialize};
use slyzah_core::vendors::normalize_label;
use slyzah_core::VendorRecord;

use crate::error::SearchError;
use crate::matcher::match_vendors;
use crate::ranker::{rank_scored_with, ScoredVendor};
use crate::resolver::ResolvedLocation;

/// How well the results cover the user's area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchStatus {
    /// At least one match explicitly lists the user's region or province.
    Local,
    /// Matches exist but none list the user's area.
    Global,
    /// Nothing matched the category.
    None,
}

#[derive(Debug, Clone)]
pub struct SearchOutcome<'a> {
    pub status: SearchStatus,
    pub ranked: Vec<ScoredVendor<'a>>,
}

impl<'a> SearchOutcome<'a> {
    #[must_use]
    pub fn len(&self) -> usize {
        self.ranked.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ranked.is_empty()
    }

    /// A window of the ranked list; out-of-range offsets give an empty page.
    #[must_use]
    pub fn page(&self, offset: usize, limit: usize) -> &[ScoredVendor<'a>] {
        let start = offset.min(self.ranked.len());
        let end = start.saturating_add(limit).min(self.ranked.len());
        &self.ranked[start..end]
    }

    #[must_use]
    pub fn vendors(&self) -> Vec<&'a VendorRecord> {
        self.ranked.iter().map(|s| s.vendor).collect()
    }
}

/// Match `category` against `snapshot` and rank the matches for `location`.
///
/// # Errors
///
/// Returns [`SearchError::EmptyCategory`] when `category` is blank.
pub fn search<'a, R>(
    category: &str,
    location: &ResolvedLocation,
    snapshot: &'a [VendorRecord],
    rng: &mut R,
) -> Result<SearchOutcome<'a>, SearchError>
where
    R: Rng + ?Sized,
{
    if category.trim().is_empty() {
        return Err(SearchError::EmptyCategory);
    }

    let matched = match_vendors(category, snapshot);
    tracing::debug!(
        category,
        province = %location.province,
        region = %location.region,
        snapshot = snapshot.len(),
        matched = matched.len(),
        "matched vendors"
    );

    let status = if matched.is_empty() {
        SearchStatus::None
    } else if has_local_presence(&matched, location) {
        SearchStatus::Local
    } else {
        SearchStatus::Global
    };

    let ranked = rank_scored_with(matched, location, rng);
    tracing::info!(
        category,
        province = %location.province,
        region = %location.region,
        results = ranked.len(),
        status = ?status,
        "search complete"
    );

    Ok(SearchOutcome { status, ranked })
}

/// Only the coverage lists count here, not a vendor's primary region or
/// province.
fn has_local_presence(matched: &[&VendorRecord], location: &ResolvedLocation) -> bool {
    let region = normalize_label(&location.region);
    let province = normalize_label(&location.province);
    let listed = |values: &[String], wanted: &str| {
        !wanted.is_empty() && values.iter().any(|v| normalize_label(v) == wanted)
    };

    matched
        .iter()
        .any(|v| listed(&v.regions, &region) || listed(&v.provinces, &province))
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn vendor(id: &str, category: &str) -> VendorRecord {
        VendorRecord {
            id: id.to_string(),
            category: category.to_string(),
            ..VendorRecord::default()
        }
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(1)
    }

    #[test]
    fn blank_category_is_rejected() {
        let err = search("  ", &ResolvedLocation::default(), &[], &mut rng()).unwrap_err();
        assert!(matches!(err, SearchError::EmptyCategory));
    }

    #[test]
    fn no_matches_gives_none_status() {
        let vendors = vec![vendor("a", "Plumbing")];
        let outcome = search(
            "Locksmith",
            &ResolvedLocation::default(),
            &vendors,
            &mut rng(),
        )
        .expect("search runs");
        assert_eq!(outcome.status, SearchStatus::None);
        assert!(outcome.is_empty());
    }

    #[test]
    fn coverage_lists_make_results_local() {
        let mut listed = vendor("a", "Plumbing");
        listed.regions = vec!["sandton/rivonia".to_string()];
        let vendors = vec![listed, vendor("b", "Plumbing")];
        let location = ResolvedLocation::new("Gauteng", "Sandton/Rivonia");
        let outcome = search("Plumber", &location, &vendors, &mut rng()).expect("search runs");
        assert_eq!(outcome.status, SearchStatus::Local);
        assert_eq!(outcome.len(), 2);
    }

    #[test]
    fn primary_region_alone_is_global() {
        let mut local = vendor("a", "Plumbing");
        local.region = Some("Sandton/Rivonia".to_string());
        let vendors = vec![local];
        let location = ResolvedLocation::new("Gauteng", "Sandton/Rivonia");
        let outcome = search("Plumber", &location, &vendors, &mut rng()).expect("search runs");
        assert_eq!(outcome.status, SearchStatus::Global);
    }

    #[test]
    fn province_list_counts_as_local() {
        let mut national = vendor("a", "Electrician");
        national.provinces = vec!["Western Cape".to_string()];
        let vendors = vec![national];
        let location = ResolvedLocation::new("Western Cape", "Overberg");
        let outcome = search("electricians", &location, &vendors, &mut rng()).expect("search runs");
        assert_eq!(outcome.status, SearchStatus::Local);
    }

    #[test]
    fn paging_slices_without_reranking() {
        let vendors: Vec<VendorRecord> = (0..5_u8)
            .map(|i| {
                let mut v = vendor(&format!("v{i}"), "Plumbing");
                v.rating = Some(f64::from(i));
                v
            })
            .collect();
        let outcome = search(
            "plumbing",
            &ResolvedLocation::default(),
            &vendors,
            &mut rng(),
        )
        .expect("search runs");

        let ids = |page: &[ScoredVendor<'_>]| -> Vec<String> {
            page.iter().map(|s| s.vendor.id.clone()).collect()
        };
        assert_eq!(ids(outcome.page(0, 2)), vec!["v4", "v3"]);
        assert_eq!(ids(outcome.page(2, 2)), vec!["v2", "v1"]);
        assert_eq!(ids(outcome.page(4, 10)), vec!["v0"]);
        assert!(outcome.page(9, 2).is_empty());
        assert!(outcome.page(0, 0).is_empty());
    }
}
