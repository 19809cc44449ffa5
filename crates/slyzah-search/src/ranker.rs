//! Composite scoring and ordering of matched vendors.
//!
//! A vendor's score is the sum of three brackets, each strictly dominating
//! the next:
//!
//! | Component | Points |
//! |---|---|
//! | exact paid tier label | 1000 |
//! | region match, else province match, else national tier | 100 / 50 / 25 |
//! | rating (absent counts as 0) | 0..=5 |
//!
//! Equal scores are ordered by a random value drawn fresh on every call, so
//! tied paid vendors rotate between searches.

use std::cmp::Ordering;

use rand::Rng;
use serde::Serialize;
use slyzah_core::vendors::normalize_label;
use slyzah_core::VendorRecord;

use crate::resolver::ResolvedLocation;

pub const PAID_TIER_BONUS: f64 = 1000.0;
pub const REGION_BONUS: f64 = 100.0;
pub const PROVINCE_BONUS: f64 = 50.0;
pub const NATIONAL_BONUS: f64 = 25.0;

/// A vendor paired with its score and tie-break for one ranking call.
/// Serializes as the vendor record plus a `score` field.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ScoredVendor<'a> {
    #[serde(flatten)]
    pub vendor: &'a VendorRecord,
    pub score: f64,
    #[serde(skip)]
    pub tie_break: f64,
}

impl ScoredVendor<'_> {
    fn cmp_rank(&self, other: &Self) -> Ordering {
        other
            .score
            .total_cmp(&self.score)
            .then_with(|| self.tie_break.total_cmp(&other.tie_break))
    }
}

/// Score one vendor against the user's resolved location.
#[must_use]
pub fn score(vendor: &VendorRecord, location: &ResolvedLocation) -> f64 {
    let region = normalize_label(&location.region);
    let province = normalize_label(&location.province);

    let tier_bonus = if vendor.is_paid() {
        PAID_TIER_BONUS
    } else {
        0.0
    };

    let locality_bonus = if vendor.covers_region(&region) {
        REGION_BONUS
    } else if vendor.covers_province(&province) {
        PROVINCE_BONUS
    } else if vendor.is_national() {
        NATIONAL_BONUS
    } else {
        0.0
    };

    tier_bonus + locality_bonus + vendor.scoring_rating()
}

/// Score and sort, keeping the scores. Highest score first.
pub fn rank_scored_with<'a, I, R>(
    vendors: I,
    location: &ResolvedLocation,
    rng: &mut R,
) -> Vec<ScoredVendor<'a>>
where
    I: IntoIterator<Item = &'a VendorRecord>,
    R: Rng + ?Sized,
{
    let mut scored: Vec<ScoredVendor<'a>> = vendors
        .into_iter()
        .map(|vendor| ScoredVendor {
            vendor,
            score: score(vendor, location),
            tie_break: rng.random::<f64>(),
        })
        .collect();
    scored.sort_by(ScoredVendor::cmp_rank);
    scored
}

/// Order vendors using tie-break values drawn from `rng`.
pub fn rank_with<'a, I, R>(
    vendors: I,
    location: &ResolvedLocation,
    rng: &mut R,
) -> Vec<&'a VendorRecord>
where
    I: IntoIterator<Item = &'a VendorRecord>,
    R: Rng + ?Sized,
{
    rank_scored_with(vendors, location, rng)
        .into_iter()
        .map(|s| s.vendor)
        .collect()
}

/// Order vendors with a fresh thread-local random source.
#[must_use]
pub fn rank<'a, I>(vendors: I, location: &ResolvedLocation) -> Vec<&'a VendorRecord>
where
    I: IntoIterator<Item = &'a VendorRecord>,
{
    rank_with(vendors, location, &mut rand::rng())
}

#[cfg(test)]
#[path = "ranker_test.rs"]
mod tests;
