//! Commands that read the vendor catalog: ranked search and featured vendors.

use anyhow::Context;
use serde::Serialize;
use serde_json::Value;
use slyzah_core::VendorRecord;
use slyzah_search::featured::featured_for;
use slyzah_search::{
    search, CatalogFileSource, ResolvedLocation, ScoredVendor, SearchStatus, VendorSource,
};

use crate::CatalogArgs;

#[derive(Debug, Serialize)]
pub(crate) struct VendorRow<'a> {
    #[serde(flatten)]
    pub vendor: &'a VendorRecord,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    pub display_rating: f64,
}

impl<'a> VendorRow<'a> {
    pub(crate) fn listed(vendor: &'a VendorRecord) -> Self {
        Self {
            vendor,
            score: None,
            display_rating: vendor.display_rating(),
        }
    }

    pub(crate) fn ranked(scored: &ScoredVendor<'a>) -> Self {
        Self {
            score: Some(scored.score),
            ..Self::listed(scored.vendor)
        }
    }
}

#[derive(Debug, Serialize)]
struct SearchOutput<'a> {
    category: &'a str,
    location: &'a ResolvedLocation,
    status: SearchStatus,
    total: usize,
    offset: usize,
    results: Vec<VendorRow<'a>>,
}

#[derive(Debug, Serialize)]
struct FeaturedOutput<'a> {
    location: &'a ResolvedLocation,
    vendors: Vec<VendorRow<'a>>,
}

async fn load_vendors(catalog: &CatalogArgs) -> anyhow::Result<Vec<VendorRecord>> {
    CatalogFileSource::new(&catalog.path)
        .fetch(catalog.snapshot_limit)
        .await
        .with_context(|| format!("loading vendor catalog {}", catalog.path.display()))
}

pub(crate) async fn run_search(
    category: &str,
    location: &ResolvedLocation,
    offset: usize,
    limit: usize,
    catalog: &CatalogArgs,
) -> anyhow::Result<Value> {
    let vendors = load_vendors(catalog).await?;
    let outcome = search(category, location, &vendors, &mut rand::rng())?;

    let output = SearchOutput {
        category,
        location,
        status: outcome.status,
        total: outcome.len(),
        offset,
        results: outcome
            .page(offset, limit)
            .iter()
            .map(VendorRow::ranked)
            .collect(),
    };
    Ok(serde_json::to_value(output)?)
}

pub(crate) async fn run_featured(
    location: &ResolvedLocation,
    catalog: &CatalogArgs,
) -> anyhow::Result<Value> {
    let vendors = load_vendors(catalog).await?;
    let output = FeaturedOutput {
        location,
        vendors: featured_for(&vendors, location)
            .into_iter()
            .map(VendorRow::listed)
            .collect(),
    };
    Ok(serde_json::to_value(output)?)
}
