//! Maps a reverse-geocoded address onto the region taxonomy.
//!
//! Resolution is a fixed, ordered chain of strategies scoped to the matched
//! province: postal code, suburb alias, region-name substring, and finally
//! the raw address text. The first strategy that yields a region wins.

use serde::{Deserialize, Serialize};

use crate::taxonomy::{lookup_postal_code, lookup_suburb_alias, Province};

/// Structured address as returned by a reverse-geocoding provider. Every
/// field is optional; `region` carries the provider's province-like string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawGeoAddress {
    pub region: Option<String>,
    pub postal_code: Option<String>,
    pub subregion: Option<String>,
    pub district: Option<String>,
    pub street: Option<String>,
    pub place_name: Option<String>,
    pub city: Option<String>,
}

impl RawGeoAddress {
    /// Address built from user-typed text rather than a GPS fix.
    #[must_use]
    pub fn typed(province: &str, place: &str) -> Self {
        Self {
            region: Some(province.to_string()),
            city: Some(place.to_string()),
            ..Self::default()
        }
    }

    /// Non-empty place candidates in lookup order: subregion, district,
    /// street, place name, city.
    fn candidates(&self) -> Vec<&str> {
        [
            &self.subregion,
            &self.district,
            &self.street,
            &self.place_name,
            &self.city,
        ]
        .into_iter()
        .filter_map(|field| field.as_deref())
        .filter(|s| !s.is_empty())
        .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedLocation {
    pub province: String,
    pub region: String,
}

impl ResolvedLocation {
    #[must_use]
    pub fn new(province: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            province: province.into(),
            region: region.into(),
        }
    }

    /// True when neither province nor region carries any text, which
    /// downstream ranking treats as "no locality bias".
    #[must_use]
    pub fn is_unresolved(&self) -> bool {
        self.province.trim().is_empty() && self.region.trim().is_empty()
    }
}

/// Which step of the chain produced the resolved region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionSource {
    PostalCode,
    SuburbAlias,
    Substring,
    Fallback,
    UnknownProvince,
}

type Strategy = fn(&RawGeoAddress, &[&str], Province) -> Option<&'static str>;

/// Province-scoped strategies, tried in order.
const STRATEGIES: &[(ResolutionSource, Strategy)] = &[
    (ResolutionSource::PostalCode, by_postal_code),
    (ResolutionSource::SuburbAlias, by_suburb_alias),
    (ResolutionSource::Substring, by_substring),
];

fn by_postal_code(
    address: &RawGeoAddress,
    _candidates: &[&str],
    province: Province,
) -> Option<&'static str> {
    let region = lookup_postal_code(address.postal_code.as_deref()?)?;
    province.contains_region(region).then_some(region)
}

fn by_suburb_alias(
    _address: &RawGeoAddress,
    candidates: &[&str],
    province: Province,
) -> Option<&'static str> {
    candidates
        .iter()
        .filter_map(|candidate| lookup_suburb_alias(candidate))
        .find(|region| province.contains_region(region))
}

/// A candidate matches a region when it contains any slash-separated part
/// of the region name ("Paarl/Wellington" checks both halves).
fn by_substring(
    _address: &RawGeoAddress,
    candidates: &[&str],
    province: Province,
) -> Option<&'static str> {
    candidates.iter().find_map(|candidate| {
        let haystack = candidate.to_lowercase();
        province.regions().iter().copied().find(|region| {
            region
                .split('/')
                .map(|part| part.trim().to_lowercase())
                .any(|part| !part.is_empty() && haystack.contains(&part))
        })
    })
}

/// Resolve an address to a `(province, region)` pair. Never fails; see
/// [`resolve_with_source`] for the step that produced the region.
#[must_use]
pub fn resolve(address: &RawGeoAddress) -> ResolvedLocation {
    resolve_with_source(address).0
}

#[must_use]
pub fn resolve_with_source(address: &RawGeoAddress) -> (ResolvedLocation, ResolutionSource) {
    let raw_province = address.region.as_deref().unwrap_or_default();
    let candidates = address.candidates();

    let Some(province) = Province::from_loose(raw_province) else {
        let region = candidates.first().copied().unwrap_or(raw_province);
        return (
            ResolvedLocation::new(raw_province, region),
            ResolutionSource::UnknownProvince,
        );
    };

    for (source, strategy) in STRATEGIES {
        if let Some(region) = strategy(address, &candidates, province) {
            return (ResolvedLocation::new(province.name(), region), *source);
        }
    }

    let region = candidates.first().copied().unwrap_or(province.name());
    (
        ResolvedLocation::new(province.name(), region),
        ResolutionSource::Fallback,
    )
}

#[cfg(test)]
#[path = "resolver_test.rs"]
mod tests;
