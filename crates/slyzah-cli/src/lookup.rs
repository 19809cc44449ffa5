//! Taxonomy and resolver commands. Neither touches the vendor catalog.

use anyhow::bail;
use serde_json::{json, Value};
use slyzah_search::{list_regions, resolve_with_source, Province, RawGeoAddress};

/// Provinces with their regions, optionally narrowed to one province.
pub(crate) fn run_regions(province: Option<&str>) -> anyhow::Result<Value> {
    let provinces = match province {
        Some(raw) => match Province::from_loose(raw) {
            Some(p) => vec![p],
            None => bail!("unknown province '{raw}'"),
        },
        None => Province::ALL.to_vec(),
    };

    let listing: Vec<Value> = provinces
        .into_iter()
        .map(|p| json!({ "province": p.name(), "regions": list_regions(p) }))
        .collect();
    Ok(Value::Array(listing))
}

pub(crate) fn run_resolve(address: &RawGeoAddress) -> Value {
    let (location, source) = resolve_with_source(address);
    json!({
        "province": location.province,
        "region": location.region,
        "source": source,
    })
}
