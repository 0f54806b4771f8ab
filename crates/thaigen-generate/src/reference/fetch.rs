use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderValue, USER_AGENT};
use tracing::debug;

use crate::errors::GenerationError;

const USER_AGENT_VALUE: &str = concat!("thaigen/", env!("CARGO_PKG_VERSION"));
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(60);

/// Retrieves a raw reference resource from a remote location.
#[async_trait]
pub trait ReferenceFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, GenerationError>;
}

/// Fetches over HTTP(S), following redirects. Every request is bounded by a
/// total timeout.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self, GenerationError> {
        Self::with_timeout(DEFAULT_FETCH_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, GenerationError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout)
            .build()
            .map_err(|err| {
                GenerationError::InvalidConfig(format!("failed to build http client: {err}"))
            })?;
        Ok(Self { client })
    }
}

#[async_trait]
impl ReferenceFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, GenerationError> {
        let unavailable = |err: reqwest::Error| {
            GenerationError::DataUnavailable(format!("failed to fetch {url}: {err}"))
        };

        let response = self
            .client
            .get(url)
            .header(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE))
            .send()
            .await
            .map_err(unavailable)?;

        let status = response.status();
        if !status.is_success() {
            return Err(GenerationError::DataUnavailable(format!(
                "fetch of {url} failed with status {status}"
            )));
        }

        let bytes = response.bytes().await.map_err(unavailable)?;
        debug!(
            event = "address_reference_fetched",
            bytes = bytes.len(),
            url = %url
        );
        Ok(bytes.to_vec())
    }
}

/// Refuses every fetch; used when the network must not be touched.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineFetcher;

#[async_trait]
impl ReferenceFetcher for OfflineFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, GenerationError> {
        Err(GenerationError::DataUnavailable(format!(
            "offline mode: refusing to fetch {url}"
        )))
    }
}
