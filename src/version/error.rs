use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Semver string '{0}' is invalid")]
    InvalidFormat(String),
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Version file not found: {0}")]
    NotFound(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Version file is empty")]
    EmptyBody,

    #[error("Invalid trust anchor: {0}")]
    TrustAnchor(String),

    #[error("Failed to start runtime: {0}")]
    Runtime(#[from] std::io::Error),
}

/// API misuse by the host; always returned to the caller
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreconditionError {
    #[error("[{0}] update check has already been initialized")]
    AlreadyInitialized(String),

    #[error("[{0}] update check has not been initialized")]
    NotInitialized(String),

    #[error("[{0}] blocking update check called from within an async runtime")]
    InsideRuntime(String),
}
