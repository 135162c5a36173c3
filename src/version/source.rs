//! Source trait for fetching the latest published version string

#[cfg(test)]
use mockall::automock;

use crate::version::error::FetchError;

/// Trait for fetching the latest version of an identifier from a remote source
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait VersionSource: Send + Sync {
    /// Fetches the latest version string for an identifier
    ///
    /// # Arguments
    /// * `identifier` - The mod or plugin identifier (e.g., "examplemod")
    ///
    /// # Returns
    /// * `Ok(String)` - The first line of the remote version file, unparsed
    /// * `Err(FetchError)` - If the connection, TLS setup, or read fails
    async fn fetch_latest(&self, identifier: &str) -> Result<String, FetchError>;
}
