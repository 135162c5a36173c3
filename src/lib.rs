//! Checks whether a newer version of a mod or plugin has been published.
//!
//! ```no_run
//! use update_checker::{CheckerConfig, UpdateChecker};
//!
//! let mut checker = UpdateChecker::new("examplemod", "1.0.0", &CheckerConfig::default());
//! checker.initialize_blocking()?;
//!
//! if checker.is_update_available()? {
//!     println!("Update available: {}", checker.latest_version()?);
//! }
//! # Ok::<(), update_checker::PreconditionError>(())
//! ```

pub mod config;
pub mod logging;
pub mod version;

pub use config::{CheckerConfig, FailurePolicy};
pub use version::checker::{CheckState, UpdateCheckResult, UpdateChecker};
pub use version::error::{FetchError, ParseError, PreconditionError};
pub use version::semver::Version;
pub use version::source::VersionSource;
pub use version::sources::HttpsVersionSource;
pub use version::trust::TrustAnchor;
