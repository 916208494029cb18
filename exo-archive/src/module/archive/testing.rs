//! Scripted transport for exercising fetch paths offline

use std::sync::Mutex;

use async_trait::async_trait;
use exo_common::RawRecord;

use super::transport::ArchiveTransport;
use crate::error::ArchiveError;

#[derive(Debug, Clone)]
pub(crate) enum Reply {
    Rows(Vec<RawRecord>),
    Status(u16),
    /// Body that is not a JSON row array
    Malformed,
    /// Never answers
    Hang,
}

/// Answers each request with the first route whose needle appears in the
/// ADQL query (POST) or the percent-decoded URL (GET). Unrouted requests
/// get a 503.
#[derive(Debug, Default)]
pub(crate) struct ScriptedTransport {
    routes: Vec<(String, Reply)>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn route(mut self, needle: &str, reply: Reply) -> Self {
        self.routes.push((needle.to_string(), reply));
        self
    }

    /// Request keys in the order they were received.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    async fn respond(&self, url: &str, key: String) -> Result<Vec<RawRecord>, ArchiveError> {
        self.calls.lock().unwrap().push(key.clone());
        let reply = self
            .routes
            .iter()
            .find(|(needle, _)| key.contains(needle.as_str()))
            .map(|(_, reply)| reply.clone())
            .unwrap_or(Reply::Status(503));

        match reply {
            Reply::Rows(rows) => Ok(rows),
            Reply::Status(status) => Err(ArchiveError::Status {
                url: url.to_string(),
                status,
            }),
            Reply::Malformed => Err(ArchiveError::Decode {
                url: url.to_string(),
                source: serde_json::from_str::<Vec<RawRecord>>("<html>").unwrap_err(),
            }),
            Reply::Hang => std::future::pending().await,
        }
    }
}

#[async_trait]
impl ArchiveTransport for ScriptedTransport {
    async fn post_form(
        &self,
        url: &str,
        fields: &[(&str, String)],
    ) -> Result<Vec<RawRecord>, ArchiveError> {
        let query = fields
            .iter()
            .find(|(key, _)| *key == "query")
            .map(|(_, value)| value.clone())
            .unwrap_or_default();
        self.respond(url, query).await
    }

    async fn get_json(&self, url: &str) -> Result<Vec<RawRecord>, ArchiveError> {
        let decoded = urlencoding::decode(url)
            .map(|d| d.into_owned())
            .unwrap_or_else(|_| url.to_string());
        self.respond(url, decoded).await
    }
}

/// Rows with the given names, all sharing one discovery method and year.
pub(crate) fn rows(names: &[&str], method: &str, year: i32) -> Vec<RawRecord> {
    names
        .iter()
        .map(|name| RawRecord {
            pl_name: Some(name.to_string()),
            pl_orbper: Some(10.0),
            pl_rade: Some(1.0),
            sy_vmag: None,
            discoverymethod: Some(method.to_string()),
            disc_year: Some(year),
        })
        .collect()
}

/// `count` rows named `{prefix}-{i} b`.
pub(crate) fn numbered_rows(prefix: &str, count: usize, method: &str) -> Vec<RawRecord> {
    let names: Vec<String> = (0..count).map(|i| format!("{}-{} b", prefix, i)).collect();
    let refs: Vec<&str> = names.iter().map(String::as_str).collect();
    rows(&refs, method, 2020)
}
