//! Update check for a single identifier
//!
//! This module fetches the published version of an identifier, compares it
//! with the version the host is running, and reports whether an update exists.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Checker   │────▶│   Source    │────▶│ TrustAnchor │
//! │ (orchestr.) │     │  (fetch)    │     │ (extra root)│
//! └─────────────┘     └─────────────┘     └─────────────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │   Version   │
//! │ (parse/cmp) │
//! └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`checker`]: `UpdateChecker` state machine and `UpdateCheckResult`
//! - [`semver`]: `major.minor.patch` parsing, ordering and formatting
//! - [`source`]: `VersionSource` trait for fetching the latest version string
//! - [`sources`]: Concrete sources (HTTPS)
//! - [`trust`]: Bundled trust anchor loading
//! - [`error`]: Parse, fetch and precondition errors

pub mod checker;
pub mod error;
pub mod semver;
pub mod source;
pub mod sources;
pub mod trust;
