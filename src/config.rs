use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::version::trust::TRUST_ANCHOR_FILE_NAME;

// =============================================================================
// Network-related constants
// =============================================================================

/// Location of the published `<identifier>-version.txt` files
pub const DEFAULT_BASE_URL: &str =
    "https://raw.githubusercontent.com/jonuuh-mc/UpdateChecker/refs/heads/master/src/main/resources";

/// Timeout for the whole request in milliseconds (10 seconds)
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Timeout for establishing the connection in milliseconds (5 seconds)
pub const DEFAULT_CONNECT_TIMEOUT_MS: u64 = 5_000;

pub const DEFAULT_USER_AGENT: &str = "update-checker";

/// Environment variable naming the directory that holds bundled resources
pub const RESOURCE_DIR_ENV: &str = "UPDATE_CHECKER_RESOURCE_DIR";

/// What to report when the version file could not be fetched
#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum FailurePolicy {
    /// Report no update; the host stays quiet when offline
    #[default]
    NoUpdate,
    /// Report an update; the host nags the user to check manually
    UpdateAvailable,
}

/// Update check configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct CheckerConfig {
    /// URL prefix; the identifier is appended as `/<identifier>-version.txt`
    pub base_url: String,
    /// Request timeout in milliseconds
    pub timeout_ms: u64,
    /// Connect timeout in milliseconds
    pub connect_timeout_ms: u64,
    pub user_agent: String,
    /// Explicit trust anchor location, overriding the resource directory lookup
    pub trust_anchor_path: Option<PathBuf>,
    pub failure_policy: FailurePolicy,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            connect_timeout_ms: DEFAULT_CONNECT_TIMEOUT_MS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            trust_anchor_path: None,
            failure_policy: FailurePolicy::default(),
        }
    }
}

impl CheckerConfig {
    /// Resolves where the trust anchor should be read from.
    ///
    /// Order: `trust_anchor_path`, then `$UPDATE_CHECKER_RESOURCE_DIR`,
    /// then the directory of the running executable.
    pub fn resolve_trust_anchor_path(&self) -> PathBuf {
        let exe_dir = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf));

        trust_anchor_path_with_env(
            self.trust_anchor_path.as_deref(),
            std::env::var(RESOURCE_DIR_ENV).ok(),
            exe_dir,
        )
    }
}

/// Returns the path to the optional config file.
/// Uses the platform config directory (e.g. ~/.config/update-checker/config.json),
/// or ./update-checker/config.json if it is unknown.
pub fn config_path() -> PathBuf {
    config_path_with_dir(dirs::config_dir())
}

fn config_path_with_dir(config_dir: Option<PathBuf>) -> PathBuf {
    config_dir
        .unwrap_or_else(|| PathBuf::from("."))
        .join("update-checker")
        .join("config.json")
}

fn trust_anchor_path_with_env(
    explicit: Option<&Path>,
    resource_dir: Option<String>,
    exe_dir: Option<PathBuf>,
) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }

    resource_dir
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
        .or(exe_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join(TRUST_ANCHOR_FILE_NAME)
}
