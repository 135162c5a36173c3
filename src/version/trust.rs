//! Bundled trust anchor for the version file host
//!
//! The anchor extends the default root store; it never replaces it.

use std::io::ErrorKind;
use std::path::Path;

use tracing::{debug, warn};

use crate::version::error::FetchError;

/// Logical name of the bundled certificate resource
pub const TRUST_ANCHOR_FILE_NAME: &str = "_.github.io.crt";

const PEM_MARKER: &[u8] = b"-----BEGIN";

/// Raw certificate bytes, PEM or DER. Empty when no anchor is available.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrustAnchor {
    bytes: Vec<u8>,
}

impl TrustAnchor {
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
        }
    }

    /// Read the anchor from `path`.
    ///
    /// A missing or unreadable file yields an empty anchor, so the connection
    /// proceeds with default trust only.
    pub fn load(path: &Path) -> Self {
        match std::fs::read(path) {
            Ok(bytes) => {
                debug!("Loaded trust anchor from {}", path.display());
                Self { bytes }
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!(
                    "Trust anchor {} not found; using default trust store only",
                    path.display()
                );
                Self::default()
            }
            Err(e) => {
                warn!(
                    "Failed to read trust anchor {}: {}; using default trust store only",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.iter().all(u8::is_ascii_whitespace)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    fn is_pem(&self) -> bool {
        self.bytes
            .windows(PEM_MARKER.len())
            .any(|window| window == PEM_MARKER)
    }

    /// Convert into a certificate the HTTP client can add to its root store.
    ///
    /// Returns `Ok(None)` for an empty anchor.
    pub fn to_certificate(&self) -> Result<Option<reqwest::Certificate>, FetchError> {
        if self.is_empty() {
            return Ok(None);
        }

        let certificate = if self.is_pem() {
            reqwest::Certificate::from_pem(&self.bytes)
        } else {
            reqwest::Certificate::from_der(&self.bytes)
        };

        certificate
            .map(Some)
            .map_err(|e| FetchError::TrustAnchor(e.to_string()))
    }
}
