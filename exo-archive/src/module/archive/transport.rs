//! HTTP access to the archive
//!
//! The service talks to the archive through [`ArchiveTransport`] so the
//! fallback chain can be exercised without a network.

use std::time::Duration;

use async_trait::async_trait;
use exo_common::RawRecord;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Response};

use super::query::encode_form;
use crate::error::ArchiveError;

pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
const USER_AGENT: &str = concat!("exo-archive/", env!("CARGO_PKG_VERSION"));

#[async_trait]
pub trait ArchiveTransport: Send + Sync {
    /// POST a form-encoded body and decode a JSON array of rows.
    async fn post_form(
        &self,
        url: &str,
        fields: &[(&str, String)],
    ) -> Result<Vec<RawRecord>, ArchiveError>;

    /// GET a URL and decode a JSON array of rows.
    async fn get_json(&self, url: &str) -> Result<Vec<RawRecord>, ArchiveError>;
}

/// reqwest-backed transport with a per-request timeout.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> Result<Self, ArchiveError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(ArchiveError::ClientBuild)?;
        Ok(Self { client })
    }
}

#[async_trait]
impl ArchiveTransport for HttpTransport {
    async fn post_form(
        &self,
        url: &str,
        fields: &[(&str, String)],
    ) -> Result<Vec<RawRecord>, ArchiveError> {
        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(encode_form(fields))
            .send()
            .await?;

        read_rows(url, response).await
    }

    async fn get_json(&self, url: &str) -> Result<Vec<RawRecord>, ArchiveError> {
        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        read_rows(url, response).await
    }
}

async fn read_rows(url: &str, response: Response) -> Result<Vec<RawRecord>, ArchiveError> {
    let status = response.status();
    if !status.is_success() {
        return Err(ArchiveError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|source| ArchiveError::Decode {
        url: url.to_string(),
        source,
    })
}
