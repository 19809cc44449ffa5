//! Home-screen featured carousel: paid, approved vendors shown near the user.

use slyzah_core::vendors::normalize_label;
use slyzah_core::{Tier, VendorRecord};

use crate::resolver::ResolvedLocation;

/// Paid-tier vendors not explicitly rejected by moderation, national tiers
/// first. Tier labels are compared loosely; equal ranks keep input order.
#[must_use]
pub fn featured_candidates<'a, I>(vendors: I) -> Vec<&'a VendorRecord>
where
    I: IntoIterator<Item = &'a VendorRecord>,
{
    let mut candidates: Vec<&VendorRecord> = vendors
        .into_iter()
        .filter(|v| v.is_featured_candidate())
        .collect();
    candidates.sort_by_key(|v| Tier::featured_rank(v.loose_tier()));
    candidates
}

/// Keep candidates relevant to `location`: national vendors always, others
/// when their province or region matches. An unresolved location keeps all.
#[must_use]
pub fn filter_featured<'a, I>(candidates: I, location: &ResolvedLocation) -> Vec<&'a VendorRecord>
where
    I: IntoIterator<Item = &'a VendorRecord>,
{
    if location.is_unresolved() {
        return candidates.into_iter().collect();
    }

    let province = normalize_label(&location.province);
    let region = normalize_label(&location.region);

    candidates
        .into_iter()
        .filter(|v| v.is_national() || v.covers_province(&province) || v.covers_region(&region))
        .collect()
}

/// Candidates and location filter in one step.
#[must_use]
pub fn featured_for<'a, I>(vendors: I, location: &ResolvedLocation) -> Vec<&'a VendorRecord>
where
    I: IntoIterator<Item = &'a VendorRecord>,
{
    filter_featured(featured_candidates(vendors), location)
}
