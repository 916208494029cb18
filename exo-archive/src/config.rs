use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use std::time::Duration;

use anyhow::Context;
use exo_common::FilterCriteria;
use serde::{Deserialize, Serialize};

use crate::module::archive::service::{DEFAULT_BROAD_QUERY_LIMIT, DEFAULT_ROWS_PER_BUCKET};
use crate::module::archive::transport::DEFAULT_TIMEOUT_SECONDS;
use crate::module::archive::{Endpoints, Environment, FetchMode, FetchSettings, StatusPolicy};
use crate::module::catalog::DEFAULT_PER_PAGE;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchiveConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default = "default_log_dir")]
    pub log_dir: PathBuf,

    #[serde(default)]
    pub archive: ArchiveSection,

    #[serde(default)]
    pub query: QuerySection,

    #[serde(default)]
    pub export: ExportConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ArchiveSection {
    pub environment: Environment,
    /// Origin of the local proxy used in development
    pub dev_proxy_origin: String,
    /// Overrides the TAP endpoint chosen by `environment`
    pub tap_url: Option<String>,
    pub request_timeout_secs: u64,
    pub rows_per_bucket: u32,
    pub broad_query_limit: u32,
    pub concurrent_buckets: bool,
    pub status_policy: StatusPolicy,
    pub fetch_mode: FetchMode,
    pub legacy_limit: u32,
}

impl Default for ArchiveSection {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            dev_proxy_origin: "http://localhost:5173".to_string(),
            tap_url: None,
            request_timeout_secs: DEFAULT_TIMEOUT_SECONDS,
            rows_per_bucket: DEFAULT_ROWS_PER_BUCKET,
            broad_query_limit: DEFAULT_BROAD_QUERY_LIMIT,
            concurrent_buckets: true,
            status_policy: StatusPolicy::default(),
            fetch_mode: FetchMode::default(),
            legacy_limit: DEFAULT_BROAD_QUERY_LIMIT,
        }
    }
}

impl ArchiveSection {
    pub fn endpoints(&self) -> Endpoints {
        let endpoints = Endpoints::for_environment(self.environment, &self.dev_proxy_origin);
        match &self.tap_url {
            Some(url) => endpoints.with_tap_url(url.clone()),
            None => endpoints,
        }
    }

    pub fn fetch_settings(&self) -> FetchSettings {
        FetchSettings {
            rows_per_bucket: self.rows_per_bucket,
            broad_query_limit: self.broad_query_limit,
            concurrent_buckets: self.concurrent_buckets,
            status_policy: self.status_policy,
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuerySection {
    #[serde(flatten)]
    pub criteria: FilterCriteria,

    #[serde(default = "default_page")]
    pub page: usize,

    #[serde(default = "default_per_page")]
    pub per_page: usize,
}

impl Default for QuerySection {
    fn default() -> Self {
        Self {
            criteria: FilterCriteria::default(),
            page: default_page(),
            per_page: default_per_page(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    pub csv_path: Option<PathBuf>,
    pub json_path: Option<PathBuf>,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_dir() -> PathBuf {
    PathBuf::from("logs")
}

fn default_page() -> usize {
    1
}

fn default_per_page() -> usize {
    DEFAULT_PER_PAGE
}

impl Default for ArchiveConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_dir: default_log_dir(),
            archive: ArchiveSection::default(),
            query: QuerySection::default(),
            export: ExportConfig::default(),
        }
    }
}

impl ArchiveConfig {
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load from a file. A missing file yields the defaults.
    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .context(format!("Failed to read config file {:?}", path))?;
        Self::from_toml(&content).context(format!("Failed to parse config file {:?}", path))
    }
}

pub static CONFIG: OnceLock<ArchiveConfig> = OnceLock::new();

/// Load the config once; later calls return the first value.
pub fn read_config(path: impl AsRef<Path>) -> anyhow::Result<&'static ArchiveConfig> {
    if let Some(config) = CONFIG.get() {
        return Ok(config);
    }
    let config = ArchiveConfig::from_file(path)?;
    Ok(CONFIG.get_or_init(|| config))
}
