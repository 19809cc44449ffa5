//! Location resolution and vendor ranking for Slyzah search.
//!
//! Resolves a geocoded address onto the static region taxonomy, filters a
//! vendor catalog snapshot by category keywords, and orders the matches by
//! subscription tier, locality, and rating with a randomized tie-break. The
//! featured carousel reuses the locality rules as a boolean filter.

pub mod error;
pub mod featured;
pub mod matcher;
pub mod ranker;
pub mod resolver;
pub mod search;
pub mod snapshot;
pub mod taxonomy;

pub use error::SearchError;
pub use featured::{featured_candidates, featured_for, filter_featured};
pub use matcher::{match_vendors, stem_keywords};
pub use ranker::{rank, rank_scored_with, rank_with, score, ScoredVendor};
pub use resolver::{
    resolve, resolve_with_source, RawGeoAddress, ResolutionSource, ResolvedLocation,
};
pub use search::{search, SearchOutcome, SearchStatus};
pub use snapshot::{CatalogFileSource, SnapshotCache, StaticSource, VendorSource};
pub use taxonomy::{list_regions, lookup_postal_code, lookup_suburb_alias, Province};
