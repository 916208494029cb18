//! NASA Exoplanet Archive client
//!
//! Fetches planet rows from the archive's TAP service (with legacy and
//! relay fallbacks), normalizes them, and falls back to a bundled sample
//! catalog when every network path fails.

pub mod endpoints;
pub mod fallback;
pub mod mission;
pub mod normalize;
pub mod query;
pub mod service;
pub mod transport;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;

pub use endpoints::{Endpoints, Environment};
pub use fallback::fallback_exoplanets;
pub use mission::map_mission;
pub use normalize::{dedup_by_name, normalize_records, StatusPolicy};
pub use service::{ExoplanetService, FetchSettings};
pub use transport::{ArchiveTransport, HttpTransport};
pub use types::{CatalogSnapshot, DataSource, FetchMode, SAMPLE_DATA_BANNER};
