//! Plain-text version file served over HTTPS

use std::path::PathBuf;
use std::time::Duration;

use tracing::{debug, warn};

use crate::config::CheckerConfig;
use crate::version::error::FetchError;
use crate::version::source::VersionSource;
use crate::version::trust::TrustAnchor;

/// Fetches `<base_url>/<identifier>-version.txt` and returns its first line
pub struct HttpsVersionSource {
    base_url: String,
    user_agent: String,
    timeout: Duration,
    connect_timeout: Duration,
    trust_anchor_path: PathBuf,
}

impl HttpsVersionSource {
    pub fn new(config: &CheckerConfig) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            user_agent: config.user_agent.clone(),
            timeout: Duration::from_millis(config.timeout_ms),
            connect_timeout: Duration::from_millis(config.connect_timeout_ms),
            trust_anchor_path: config.resolve_trust_anchor_path(),
        }
    }

    /// Returns where the version of `identifier` is published
    pub fn location(&self, identifier: &str) -> String {
        format!("{}/{}-version.txt", self.base_url, identifier)
    }

    /// Builds a client trusting the default roots plus the bundled anchor
    fn client(&self) -> Result<reqwest::Client, FetchError> {
        let anchor = TrustAnchor::load(&self.trust_anchor_path);

        let mut builder = reqwest::Client::builder()
            .user_agent(self.user_agent.as_str())
            .timeout(self.timeout)
            .connect_timeout(self.connect_timeout);

        if let Some(certificate) = anchor.to_certificate()? {
            builder = builder.tls_certs_merge([certificate]);
        }

        Ok(builder.build()?)
    }
}

impl Default for HttpsVersionSource {
    fn default() -> Self {
        Self::new(&CheckerConfig::default())
    }
}

#[async_trait::async_trait]
impl VersionSource for HttpsVersionSource {
    async fn fetch_latest(&self, identifier: &str) -> Result<String, FetchError> {
        let url = self.location(identifier);
        let client = self.client()?;

        debug!("Fetching version file: {}", url);
        let response = client.get(&url).send().await?;

        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND || status == reqwest::StatusCode::GONE {
            return Err(FetchError::NotFound(url));
        }

        if status != reqwest::StatusCode::OK {
            warn!("Version host returned status {}: {}", status, url);
            return Err(FetchError::InvalidResponse(format!(
                "Unexpected status: {}",
                status
            )));
        }

        let body = response.text().await.map_err(|e| {
            warn!("Failed to read version file response: {}", e);
            FetchError::InvalidResponse(e.to_string())
        })?;

        // Only the first line carries the version; the rest is free-form
        body.lines()
            .next()
            .map(str::to_string)
            .ok_or(FetchError::EmptyBody)
    }
}
