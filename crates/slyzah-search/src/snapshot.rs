//! Vendor catalog snapshots with a time-to-live cache.
//!
//! Searches read an immutable, bounded snapshot of the catalog. The cache
//! refetches from its [`VendorSource`] when the snapshot is older than the
//! configured TTL or after [`SnapshotCache::invalidate`]. A failed fetch
//! leaves the previous snapshot in place.

use std::future::Future;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use slyzah_core::{parse_catalog, VendorRecord};
use tokio::sync::RwLock;

use crate::error::SearchError;

/// Upstream supplier of vendor records.
pub trait VendorSource: Send + Sync {
    /// Fetch at most `limit` records. No ordering is guaranteed.
    fn fetch(
        &self,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<VendorRecord>, SearchError>> + Send;
}

/// Reads the catalog file on every fetch.
#[derive(Debug, Clone)]
pub struct CatalogFileSource {
    path: PathBuf,
}

impl CatalogFileSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl VendorSource for CatalogFileSource {
    async fn fetch(&self, limit: usize) -> Result<Vec<VendorRecord>, SearchError> {
        let content = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            SearchError::Source(format!("reading {}: {e}", self.path.display()))
        })?;
        let catalog = parse_catalog(&content).map_err(|e| SearchError::Source(e.to_string()))?;

        tracing::debug!(
            path = %self.path.display(),
            vendors = catalog.vendors.len(),
            limit,
            "loaded vendor catalog"
        );
        Ok(catalog.vendors.into_iter().take(limit).collect())
    }
}

/// In-memory vendor list.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    vendors: Vec<VendorRecord>,
}

impl StaticSource {
    #[must_use]
    pub fn new(vendors: Vec<VendorRecord>) -> Self {
        Self { vendors }
    }
}

impl VendorSource for StaticSource {
    async fn fetch(&self, limit: usize) -> Result<Vec<VendorRecord>, SearchError> {
        Ok(self.vendors.iter().take(limit).cloned().collect())
    }
}

struct Snapshot {
    vendors: Arc<Vec<VendorRecord>>,
    fetched_at: Instant,
}

pub struct SnapshotCache<S> {
    source: S,
    limit: usize,
    ttl: Duration,
    current: RwLock<Option<Snapshot>>,
}

impl<S: VendorSource> SnapshotCache<S> {
    #[must_use]
    pub fn new(source: S, limit: usize, ttl: Duration) -> Self {
        Self {
            source,
            limit,
            ttl,
            current: RwLock::new(None),
        }
    }

    #[must_use]
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Current snapshot, refetched first if missing or expired.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Source`] when a refetch is needed and fails.
    pub async fn get(&self) -> Result<Arc<Vec<VendorRecord>>, SearchError> {
        {
            let current = self.current.read().await;
            if let Some(vendors) = self.fresh(current.as_ref()) {
                return Ok(vendors);
            }
        }

        let mut current = self.current.write().await;
        // another task may have refreshed while we waited for the lock
        if let Some(vendors) = self.fresh(current.as_ref()) {
            return Ok(vendors);
        }

        let mut vendors = self.source.fetch(self.limit).await.inspect_err(|e| {
            tracing::warn!(error = %e, "vendor snapshot refresh failed");
        })?;
        vendors.truncate(self.limit);
        tracing::info!(vendors = vendors.len(), "vendor snapshot refreshed");

        let vendors = Arc::new(vendors);
        *current = Some(Snapshot {
            vendors: Arc::clone(&vendors),
            fetched_at: Instant::now(),
        });
        Ok(vendors)
    }

    /// Drop the current snapshot so the next [`SnapshotCache::get`] refetches.
    pub async fn invalidate(&self) {
        *self.current.write().await = None;
    }

    fn fresh(&self, snapshot: Option<&Snapshot>) -> Option<Arc<Vec<VendorRecord>>> {
        snapshot
            .filter(|s| s.fetched_at.elapsed() < self.ttl)
            .map(|s| Arc::clone(&s.vendors))
    }
}
