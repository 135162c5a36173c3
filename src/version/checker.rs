//! Single update check for one identifier

use serde::Serialize;
use tracing::{info, warn};

use crate::config::{CheckerConfig, FailurePolicy};
use crate::version::error::{FetchError, PreconditionError};
use crate::version::semver::Version;
use crate::version::source::VersionSource;
use crate::version::sources::HttpsVersionSource;

/// Outcome of a completed update check
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCheckResult {
    /// First line of the remote version file, or empty if it could not be fetched
    pub latest_version: String,
    /// True when the current version is strictly older than the latest
    pub update_available: bool,
    pub current: Version,
    pub latest: Version,
}

/// Lifecycle of an [`UpdateChecker`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckState {
    Uninitialized,
    /// The fetch is in flight. A check whose future was dropped stays here.
    Checking,
    Succeeded(UpdateCheckResult),
    /// The fetch failed; the result holds the fallback values
    Failed(UpdateCheckResult),
}

/// Caller-owned update check for one identifier and current version.
///
/// Runs at most once. Accessors fail with [`PreconditionError::NotInitialized`]
/// until [`initialize`](Self::initialize) has completed.
pub struct UpdateChecker<S = HttpsVersionSource> {
    identifier: String,
    current_version: String,
    source: S,
    failure_policy: FailurePolicy,
    state: CheckState,
}

impl UpdateChecker<HttpsVersionSource> {
    /// Creates a checker that fetches over HTTPS as described by `config`
    pub fn new(
        identifier: impl Into<String>,
        current_version: impl Into<String>,
        config: &CheckerConfig,
    ) -> Self {
        Self::with_source(identifier, current_version, HttpsVersionSource::new(config))
            .failure_policy(config.failure_policy)
    }
}

impl<S: VersionSource> UpdateChecker<S> {
    pub fn with_source(
        identifier: impl Into<String>,
        current_version: impl Into<String>,
        source: S,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            current_version: current_version.into(),
            source,
            failure_policy: FailurePolicy::default(),
            state: CheckState::Uninitialized,
        }
    }

    pub fn failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn state(&self) -> &CheckState {
        &self.state
    }

    /// Fetches the latest version and compares it with the current one.
    ///
    /// Network and parse failures never surface here; they are logged and
    /// folded into the result. Only a repeated call is an error.
    pub async fn initialize(&mut self) -> Result<&UpdateCheckResult, PreconditionError> {
        self.begin()?;

        let fetched = self.source.fetch_latest(&self.identifier).await;
        self.complete(fetched);

        self.result()
    }

    /// Blocking variant of [`initialize`](Self::initialize) for hosts without a runtime.
    ///
    /// Returns [`PreconditionError::InsideRuntime`] when called from within a
    /// tokio runtime; use [`initialize`](Self::initialize) there instead.
    pub fn initialize_blocking(&mut self) -> Result<&UpdateCheckResult, PreconditionError> {
        if tokio::runtime::Handle::try_current().is_ok() {
            return Err(PreconditionError::InsideRuntime(self.identifier.clone()));
        }
        self.begin()?;

        let fetched = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(FetchError::from)
            .and_then(|runtime| runtime.block_on(self.source.fetch_latest(&self.identifier)));
        self.complete(fetched);

        self.result()
    }

    pub fn result(&self) -> Result<&UpdateCheckResult, PreconditionError> {
        match &self.state {
            CheckState::Succeeded(result) | CheckState::Failed(result) => Ok(result),
            CheckState::Uninitialized | CheckState::Checking => Err(
                PreconditionError::NotInitialized(self.identifier.clone()),
            ),
        }
    }

    pub fn latest_version(&self) -> Result<&str, PreconditionError> {
        self.result().map(|result| result.latest_version.as_str())
    }

    pub fn is_update_available(&self) -> Result<bool, PreconditionError> {
        self.result().map(|result| result.update_available)
    }

    fn begin(&mut self) -> Result<(), PreconditionError> {
        if !matches!(self.state, CheckState::Uninitialized) {
            return Err(PreconditionError::AlreadyInitialized(
                self.identifier.clone(),
            ));
        }

        self.state = CheckState::Checking;
        Ok(())
    }

    fn complete(&mut self, fetched: Result<String, FetchError>) {
        let current = Version::parse(&self.identifier, &self.current_version);

        let (result, fetched_ok) = match fetched {
            Ok(latest_version) => {
                let latest = Version::parse(&self.identifier, &latest_version);
                let result = UpdateCheckResult {
                    latest_version,
                    update_available: current < latest,
                    current,
                    latest,
                };
                (result, true)
            }
            Err(e) => {
                warn!("{}", failure_line(&self.identifier, &e));
                let result = UpdateCheckResult {
                    latest_version: String::new(),
                    update_available: self.failure_policy == FailurePolicy::UpdateAvailable,
                    current,
                    latest: Version::INVALID,
                };
                (result, false)
            }
        };

        info!("{}", summary_line(&self.identifier, &result));

        self.state = if fetched_ok {
            CheckState::Succeeded(result)
        } else {
            CheckState::Failed(result)
        };
    }
}

/// `[<id>] Failed to access or read version file: <err>`
fn failure_line(identifier: &str, error: &FetchError) -> String {
    format!(
        "[{}] Failed to access or read version file: {}",
        identifier, error
    )
}

/// `[<id>] isUpdateAvailable = <bool>; (current:<v1>)<op>(latest:<v2>)`
fn summary_line(identifier: &str, result: &UpdateCheckResult) -> String {
    let sign = if result.update_available { "<" } else { ">=" };
    format!(
        "[{}] isUpdateAvailable = {}; (current:{}){}(latest:{})",
        identifier, result.update_available, result.current, sign, result.latest
    )
}
