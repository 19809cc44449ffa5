use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Subscription level of a vendor listing.
///
/// The catalog is an external, unversioned data source, so records keep the
/// raw tier string and parse it on demand. [`Tier::parse_exact`] matches the
/// canonical labels only; [`Tier::parse_loose`] ignores case and surrounding
/// whitespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    Basic,
    OneRegion,
    ThreeRegions,
    Provincial,
    MultiProvince,
}

impl Tier {
    pub const ALL: [Tier; 5] = [
        Tier::Basic,
        Tier::OneRegion,
        Tier::ThreeRegions,
        Tier::Provincial,
        Tier::MultiProvince,
    ];

    /// Tiers that buy ranking priority and featured placement.
    pub const PAID: [Tier; 4] = [
        Tier::OneRegion,
        Tier::ThreeRegions,
        Tier::Provincial,
        Tier::MultiProvince,
    ];

    /// Canonical wire label, exactly as the catalog spells it.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Tier::Basic => "Basic",
            Tier::OneRegion => "One Region",
            Tier::ThreeRegions => "Three Regions",
            Tier::Provincial => "Provincial",
            Tier::MultiProvince => "Multi-Province",
        }
    }

    /// Case-sensitive match against the canonical labels.
    #[must_use]
    pub fn parse_exact(raw: &str) -> Option<Tier> {
        Self::ALL.into_iter().find(|t| t.label() == raw)
    }

    /// Trimmed, case-insensitive match against the canonical labels.
    #[must_use]
    pub fn parse_loose(raw: &str) -> Option<Tier> {
        let wanted = normalize_label(raw);
        Self::ALL
            .into_iter()
            .find(|t| t.label().to_lowercase() == wanted)
    }

    #[must_use]
    pub fn is_paid(self) -> bool {
        Self::PAID.contains(&self)
    }

    /// Position in the home-screen featured carousel; lower sorts first.
    #[must_use]
    pub fn featured_rank(tier: Option<Tier>) -> u8 {
        match tier {
            Some(Tier::MultiProvince) => 1,
            Some(Tier::Provincial) => 2,
            Some(Tier::ThreeRegions) => 3,
            Some(Tier::OneRegion) => 4,
            Some(Tier::Basic) | None => 99,
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Lower-case and trim a free-text label for loose comparison.
#[must_use]
pub fn normalize_label(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// A service professional's catalog listing, as stored in the document store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VendorRecord {
    pub id: String,
    pub name: String,
    pub category: String,
    pub full_category_description: String,
    pub region: Option<String>,
    pub province: Option<String>,
    /// Extra coverage areas for multi-region vendors.
    pub regions: Vec<String>,
    pub provinces: Vec<String>,
    /// Raw subscription label; see [`Tier`].
    pub tier: Option<String>,
    pub rating: Option<f64>,
    pub review_count: Option<u32>,
    pub logo: Option<String>,
    /// `None` means the listing has not been reviewed yet.
    pub is_approved: Option<bool>,
    pub email: Option<String>,
}

impl VendorRecord {
    /// Raw tier label, `"Basic"` when the record has none.
    #[must_use]
    pub fn tier_label(&self) -> &str {
        self.tier.as_deref().unwrap_or(Tier::Basic.label())
    }

    /// True only for the exact canonical spelling of a paid tier.
    #[must_use]
    pub fn is_paid(&self) -> bool {
        Tier::parse_exact(self.tier_label()).is_some_and(Tier::is_paid)
    }

    #[must_use]
    pub fn loose_tier(&self) -> Option<Tier> {
        Tier::parse_loose(self.tier_label())
    }

    /// National vendors carry the multi-province tier in any casing.
    #[must_use]
    pub fn is_national(&self) -> bool {
        self.loose_tier() == Some(Tier::MultiProvince)
    }

    /// Paid tier in any casing and not explicitly rejected by moderation.
    #[must_use]
    pub fn is_featured_candidate(&self) -> bool {
        self.loose_tier().is_some_and(Tier::is_paid) && self.is_approved != Some(false)
    }

    #[must_use]
    pub fn scoring_rating(&self) -> f64 {
        self.rating.unwrap_or(0.0)
    }

    #[must_use]
    pub fn display_rating(&self) -> f64 {
        self.rating.unwrap_or(5.0)
    }

    /// Whether `region` (already normalized, non-empty) equals the vendor's
    /// primary region or any entry of `regions`.
    #[must_use]
    pub fn covers_region(&self, region: &str) -> bool {
        covers(self.region.as_deref(), &self.regions, region)
    }

    /// Province counterpart of [`VendorRecord::covers_region`].
    #[must_use]
    pub fn covers_province(&self, province: &str) -> bool {
        covers(self.province.as_deref(), &self.provinces, province)
    }
}

fn covers(primary: Option<&str>, extra: &[String], wanted: &str) -> bool {
    if wanted.is_empty() {
        return false;
    }
    primary.is_some_and(|p| normalize_label(p) == wanted)
        || extra.iter().any(|e| normalize_label(e) == wanted)
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VendorCatalog {
    pub vendors: Vec<VendorRecord>,
}

/// Load and validate a vendor catalog from a YAML (or JSON) file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_catalog(path: &Path) -> Result<VendorCatalog, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::CatalogFileIo {
        path: path.display().to_string(),
        source: e,
    })?;
    parse_catalog(&content)
}

/// Parse and validate catalog text.
///
/// # Errors
///
/// Returns `ConfigError` if the text is not a catalog or fails validation.
pub fn parse_catalog(content: &str) -> Result<VendorCatalog, ConfigError> {
    let catalog: VendorCatalog = serde_yaml::from_str(content)?;
    validate_catalog(&catalog)?;
    Ok(catalog)
}

fn validate_catalog(catalog: &VendorCatalog) -> Result<(), ConfigError> {
    let mut seen_ids = HashSet::new();

    for vendor in &catalog.vendors {
        if vendor.id.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "vendor '{}' has an empty id",
                vendor.name
            )));
        }

        if !seen_ids.insert(vendor.id.as_str()) {
            return Err(ConfigError::Validation(format!(
                "duplicate vendor id: '{}'",
                vendor.id
            )));
        }

        if let Some(rating) = vendor.rating {
            if !rating.is_finite() || !(0.0..=5.0).contains(&rating) {
                return Err(ConfigError::Validation(format!(
                    "vendor '{}' has invalid rating {rating}; must be within 0-5",
                    vendor.id
                )));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "vendors_test.rs"]
mod tests;
