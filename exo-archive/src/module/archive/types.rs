//! Fetch results and their provenance

use chrono::{DateTime, Utc};
use exo_common::Exoplanet;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Banner shown when the catalog is the bundled sample data.
pub const SAMPLE_DATA_BANNER: &str = "Unable to load live data, using sample data";

/// Which path produced a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataSource {
    /// Per-mission bucket queries; counts are buckets, not rows
    MissionBuckets { succeeded: usize, failed: usize },
    /// Unfiltered newest-first query after every bucket came back empty
    BroadQuery,
    /// Legacy path, step (a)
    TapQuery,
    /// Legacy path, step (b)
    SimplifiedQuery,
    /// Legacy path, step (c)
    LegacyApi,
    /// Legacy path, step (d)
    CorsRelay,
    StaticFallback,
}

impl DataSource {
    pub fn is_live(&self) -> bool {
        !matches!(self, DataSource::StaticFallback)
    }

    /// Notice to surface alongside the catalog, if any.
    pub fn banner(&self) -> Option<&'static str> {
        match self {
            DataSource::StaticFallback => Some(SAMPLE_DATA_BANNER),
            _ => None,
        }
    }
}

impl std::fmt::Display for DataSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataSource::MissionBuckets { succeeded, failed } => write!(
                f,
                "mission buckets ({} ok, {} failed)",
                succeeded, failed
            ),
            DataSource::BroadQuery => write!(f, "broad TAP query"),
            DataSource::TapQuery => write!(f, "TAP query"),
            DataSource::SimplifiedQuery => write!(f, "simplified TAP query"),
            DataSource::LegacyApi => write!(f, "legacy API"),
            DataSource::CorsRelay => write!(f, "CORS relay"),
            DataSource::StaticFallback => write!(f, "bundled sample data"),
        }
    }
}

/// Which entry point a refresh uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FetchMode {
    #[default]
    Diverse,
    Legacy,
}

/// One fetched collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    pub fetch_id: Uuid,
    pub fetched_at: DateTime<Utc>,
    pub source: DataSource,
    pub planets: Vec<Exoplanet>,
}

impl CatalogSnapshot {
    pub fn new(source: DataSource, planets: Vec<Exoplanet>) -> Self {
        Self {
            fetch_id: Uuid::now_v7(),
            fetched_at: Utc::now(),
            source,
            planets,
        }
    }
}
