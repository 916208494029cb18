//! Exoplanet fetch service
//!
//! Two entry points:
//! - the diverse fetch: one TAP query per mission bucket, deduplicated,
//!   with a broad query and then the bundled catalog as fallbacks
//! - the legacy fetch: a chain of four GET endpoints, then the bundled
//!   catalog
//!
//! Neither ever fails. The `*_snapshot` variants additionally report where
//! the data came from and honour a cancellation token.

use std::future::Future;

use exo_common::{Exoplanet, RawRecord};
use futures::future::join_all;
use tokio_util::sync::CancellationToken;

use super::endpoints::Endpoints;
use super::fallback::fallback_exoplanets;
use super::normalize::{dedup_by_name, normalize_records, StatusPolicy};
use super::query::{
    legacy_url, ordered_query, relay_url, simplified_query, tap_form, tap_get_url, MissionBucket,
    MISSION_BUCKETS,
};
use super::transport::ArchiveTransport;
use super::types::{CatalogSnapshot, DataSource};
use crate::error::ArchiveError;

pub const DEFAULT_ROWS_PER_BUCKET: u32 = 50;
pub const DEFAULT_BROAD_QUERY_LIMIT: u32 = 200;

#[derive(Debug, Clone)]
pub struct FetchSettings {
    /// `TOP n` for each mission bucket
    pub rows_per_bucket: u32,
    /// `TOP n` for the broad fallback query
    pub broad_query_limit: u32,
    /// Issue the bucket requests together instead of one after another
    pub concurrent_buckets: bool,
    pub status_policy: StatusPolicy,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            rows_per_bucket: DEFAULT_ROWS_PER_BUCKET,
            broad_query_limit: DEFAULT_BROAD_QUERY_LIMIT,
            concurrent_buckets: true,
            status_policy: StatusPolicy::default(),
        }
    }
}

pub struct ExoplanetService<T> {
    transport: T,
    endpoints: Endpoints,
    settings: FetchSettings,
}

impl<T: ArchiveTransport> ExoplanetService<T> {
    pub fn new(transport: T, endpoints: Endpoints, settings: FetchSettings) -> Self {
        Self {
            transport,
            endpoints,
            settings,
        }
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    pub fn settings(&self) -> &FetchSettings {
        &self.settings
    }

    /// Diverse fetch. Always returns a non-empty collection.
    pub async fn fetch_diverse_exoplanets(&self) -> Vec<Exoplanet> {
        match self.fetch_diverse_snapshot(&CancellationToken::new()).await {
            Ok(snapshot) => snapshot.planets,
            Err(e) => {
                tracing::error!("Diverse fetch aborted: {}", e);
                fallback_exoplanets()
            }
        }
    }

    /// Diverse fetch with provenance. Fails only with [`ArchiveError::Cancelled`].
    pub async fn fetch_diverse_snapshot(
        &self,
        cancel: &CancellationToken,
    ) -> Result<CatalogSnapshot, ArchiveError> {
        tracing::info!(
            "Fetching {} mission buckets from {}",
            MISSION_BUCKETS.len(),
            self.endpoints.tap_sync
        );

        let results = if self.settings.concurrent_buckets {
            join_all(
                MISSION_BUCKETS
                    .iter()
                    .map(|bucket| self.fetch_bucket(bucket, cancel)),
            )
            .await
        } else {
            let mut results = Vec::with_capacity(MISSION_BUCKETS.len());
            for bucket in &MISSION_BUCKETS {
                results.push(self.fetch_bucket(bucket, cancel).await);
            }
            results
        };

        if cancel.is_cancelled() {
            return Err(ArchiveError::Cancelled);
        }

        let mut combined = Vec::new();
        let (mut succeeded, mut failed) = (0, 0);
        // Bucket order is kept so the earlier bucket wins name collisions
        for (bucket, result) in MISSION_BUCKETS.iter().zip(results) {
            match result {
                Ok(planets) => {
                    succeeded += 1;
                    tracing::info!("Fetched {} {} exoplanets", planets.len(), bucket.label);
                    combined.extend(planets);
                }
                Err(e) => {
                    failed += 1;
                    tracing::warn!("Failed to fetch {} data: {}", bucket.label, e);
                }
            }
        }

        if !combined.is_empty() {
            let fetched = combined.len();
            let unique = dedup_by_name(combined);
            tracing::info!(
                "Fetched {} exoplanets, {} unique after deduplication",
                fetched,
                unique.len()
            );
            return Ok(CatalogSnapshot::new(
                DataSource::MissionBuckets { succeeded, failed },
                unique,
            ));
        }

        tracing::warn!("No rows from any mission bucket, trying broad query");
        let form = tap_form(&simplified_query(self.settings.broad_query_limit));
        match cancellable(cancel, self.transport.post_form(&self.endpoints.tap_sync, &form)).await
        {
            Ok(rows) => {
                let planets = dedup_by_name(self.normalize(rows));
                if !planets.is_empty() {
                    tracing::info!("Broad query returned {} exoplanets", planets.len());
                    return Ok(CatalogSnapshot::new(DataSource::BroadQuery, planets));
                }
                tracing::warn!("Broad query returned no usable rows");
            }
            Err(ArchiveError::Cancelled) => return Err(ArchiveError::Cancelled),
            Err(e) => tracing::warn!("Broad query failed: {}", e),
        }

        Ok(self.static_snapshot())
    }

    /// Legacy single-query fetch. Always returns a collection; empty only
    /// if an endpoint answered successfully with no usable rows.
    pub async fn fetch_exoplanets(&self, limit: u32) -> Vec<Exoplanet> {
        match self
            .fetch_legacy_snapshot(limit, &CancellationToken::new())
            .await
        {
            Ok(snapshot) => snapshot.planets,
            Err(e) => {
                tracing::error!("Legacy fetch aborted: {}", e);
                fallback_exoplanets()
            }
        }
    }

    /// Legacy fetch with provenance. Fails only with [`ArchiveError::Cancelled`].
    pub async fn fetch_legacy_snapshot(
        &self,
        limit: u32,
        cancel: &CancellationToken,
    ) -> Result<CatalogSnapshot, ArchiveError> {
        let endpoints = &self.endpoints;
        let attempts = [
            (
                DataSource::TapQuery,
                tap_get_url(&endpoints.tap_sync, &ordered_query(limit)),
            ),
            (
                DataSource::SimplifiedQuery,
                tap_get_url(&endpoints.tap_sync, &simplified_query(limit)),
            ),
            (DataSource::LegacyApi, legacy_url(&endpoints.legacy_api, None)),
            (
                DataSource::CorsRelay,
                relay_url(&endpoints.cors_relay, &endpoints.legacy_remote),
            ),
        ];

        for (source, url) in attempts {
            tracing::info!("Trying {}: {}", source, url);
            match cancellable(cancel, self.transport.get_json(&url)).await {
                Ok(rows) => {
                    let planets = self.normalize(rows);
                    tracing::info!("Fetched {} exoplanets from {}", planets.len(), source);
                    return Ok(CatalogSnapshot::new(source, planets));
                }
                Err(ArchiveError::Cancelled) => return Err(ArchiveError::Cancelled),
                Err(e) => tracing::warn!("{} failed: {}", source, e),
            }
        }

        Ok(self.static_snapshot())
    }

    async fn fetch_bucket(
        &self,
        bucket: &MissionBucket,
        cancel: &CancellationToken,
    ) -> Result<Vec<Exoplanet>, ArchiveError> {
        tracing::debug!("Fetching {} mission data", bucket.label);

        let form = tap_form(&bucket.query(self.settings.rows_per_bucket));
        let rows = cancellable(
            cancel,
            self.transport.post_form(&self.endpoints.tap_sync, &form),
        )
        .await?;

        let mut planets = self.normalize(rows);
        for planet in &mut planets {
            planet.mission = bucket.label.to_string();
        }
        Ok(planets)
    }

    fn normalize(&self, rows: Vec<RawRecord>) -> Vec<Exoplanet> {
        let mut rng = rand::rng();
        normalize_records(rows, self.settings.status_policy, &mut rng)
    }

    fn static_snapshot(&self) -> CatalogSnapshot {
        tracing::warn!("All archive requests failed, using bundled sample data");
        CatalogSnapshot::new(DataSource::StaticFallback, fallback_exoplanets())
    }
}

/// Race a request against the token; the request is dropped on cancel.
async fn cancellable<F>(cancel: &CancellationToken, request: F) -> Result<Vec<RawRecord>, ArchiveError>
where
    F: Future<Output = Result<Vec<RawRecord>, ArchiveError>>,
{
    tokio::select! {
        biased;
        _ = cancel.cancelled() => Err(ArchiveError::Cancelled),
        result = request => result,
    }
}
