//! Latest fetched catalog, shared between the fetcher and readers

use std::sync::Arc;

use exo_common::{Exoplanet, FilterCriteria};
use tokio::sync::RwLock;
use tokio_util::sync::CancellationToken;

use super::filter;
use crate::error::ArchiveError;
use crate::module::archive::{ArchiveTransport, CatalogSnapshot, ExoplanetService, FetchMode};

/// Owns the service and the most recent snapshot.
pub struct CatalogStore<T> {
    service: ExoplanetService<T>,
    mode: FetchMode,
    legacy_limit: u32,
    /// Most-recently-fetched snapshot (None until the first refresh)
    snapshot: Arc<RwLock<Option<CatalogSnapshot>>>,
}

impl<T: ArchiveTransport> CatalogStore<T> {
    pub fn new(service: ExoplanetService<T>, mode: FetchMode, legacy_limit: u32) -> Self {
        Self {
            service,
            mode,
            legacy_limit,
            snapshot: Arc::new(RwLock::new(None)),
        }
    }

    /// Return a handle to the shared snapshot (for read-only access elsewhere).
    pub fn snapshot_handle(&self) -> Arc<RwLock<Option<CatalogSnapshot>>> {
        self.snapshot.clone()
    }

    /// Fetch a new collection and replace the held one. A cancelled
    /// refresh leaves the previous snapshot in place.
    pub async fn refresh(&self, cancel: &CancellationToken) -> Result<CatalogSnapshot, ArchiveError> {
        let snapshot = match self.mode {
            FetchMode::Diverse => self.service.fetch_diverse_snapshot(cancel).await?,
            FetchMode::Legacy => {
                self.service
                    .fetch_legacy_snapshot(self.legacy_limit, cancel)
                    .await?
            }
        };

        tracing::info!(
            "Catalog refreshed: {} planets from {} (fetch {})",
            snapshot.planets.len(),
            snapshot.source,
            snapshot.fetch_id
        );

        *self.snapshot.write().await = Some(snapshot.clone());
        Ok(snapshot)
    }

    /// Filtered, sorted view of the held collection. Empty before the
    /// first refresh.
    pub async fn view(&self, criteria: &FilterCriteria) -> Vec<Exoplanet> {
        match self.snapshot.read().await.as_ref() {
            Some(snapshot) => filter::apply(criteria, &snapshot.planets),
            None => Vec::new(),
        }
    }
}
