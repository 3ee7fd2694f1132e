use std::time::Duration;

use gdark_common::PlatformError;
use tracing::debug;

const TIMEOUT: Duration = Duration::from_secs(30);

/// Somewhere release artifacts can be downloaded from.
pub trait ArtifactSource {
    /// Fetch the full body at `url`.
    fn fetch(&self, url: &str) -> Result<Vec<u8>, PlatformError>;
}

/// Blocking HTTP(S) downloads.
pub struct HttpSource {
    client: reqwest::blocking::Client,
}

impl HttpSource {
    pub fn new() -> Result<Self, PlatformError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(TIMEOUT)
            .user_agent(concat!("ghidra-dark/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| PlatformError::Network(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { client })
    }
}

impl ArtifactSource for HttpSource {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, PlatformError> {
        debug!("downloading {url}");
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| PlatformError::Network(format!("GET {url}: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(PlatformError::Network(format!("GET {url}: HTTP {status}")));
        }

        let body = response
            .bytes()
            .map_err(|e| PlatformError::Network(format!("GET {url}: {e}")))?;
        debug!(bytes = body.len(), "downloaded {url}");
        Ok(body.to_vec())
    }
}
