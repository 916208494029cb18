//! Archive endpoint selection

use serde::{Deserialize, Serialize};

const REMOTE_ORIGIN: &str = "https://exoplanetarchive.ipac.caltech.edu";
const TAP_SYNC_PATH: &str = "/TAP/sync";
const LEGACY_API_PATH: &str = "/cgi-bin/nstedAPI/nph-nstedAPI";
/// Same-origin prefix a development proxy forwards to the archive host
const DEV_PROXY_PREFIX: &str = "/api/nasa";
const CORS_RELAY_URL: &str = "https://api.allorigins.win/raw";

/// Where requests are routed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Through a local proxy that forwards `/api/nasa/*` to the archive
    Development,
    #[default]
    Production,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    /// Synchronous TAP query service
    pub tap_sync: String,
    /// Legacy `nph-nstedAPI` endpoint, possibly proxied
    pub legacy_api: String,
    /// Legacy endpoint on the archive host itself, used inside the relay URL
    pub legacy_remote: String,
    pub cors_relay: String,
}

impl Endpoints {
    pub fn for_environment(environment: Environment, dev_proxy_origin: &str) -> Self {
        let base = match environment {
            Environment::Development => format!(
                "{}{}",
                dev_proxy_origin.trim_end_matches('/'),
                DEV_PROXY_PREFIX
            ),
            Environment::Production => REMOTE_ORIGIN.to_string(),
        };

        Self {
            tap_sync: format!("{}{}", base, TAP_SYNC_PATH),
            legacy_api: format!("{}{}", base, LEGACY_API_PATH),
            legacy_remote: format!("{}{}", REMOTE_ORIGIN, LEGACY_API_PATH),
            cors_relay: CORS_RELAY_URL.to_string(),
        }
    }

    /// Replace the TAP endpoint, keeping the others.
    pub fn with_tap_url(mut self, tap_url: impl Into<String>) -> Self {
        self.tap_sync = tap_url.into();
        self
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::for_environment(Environment::Production, "")
    }
}
