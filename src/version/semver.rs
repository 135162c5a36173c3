use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use tracing::warn;

use crate::version::error::ParseError;

/// Accepted version format: exactly three dot-separated non-negative integers
static VERSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+\.[0-9]+\.[0-9]+$").unwrap());

/// A `major.minor.patch` version triple.
///
/// Field order matters: the derived `Ord` compares major, then minor, then patch.
/// Malformed input maps to [`Version::INVALID`], whose components are all `-1`,
/// so it sorts below every well-formed version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Version {
    pub major: i64,
    pub minor: i64,
    pub patch: i64,
}

impl Version {
    /// Sentinel for version strings that failed to parse
    pub const INVALID: Version = Version {
        major: -1,
        minor: -1,
        patch: -1,
    };

    pub const fn new(major: i64, minor: i64, patch: i64) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Parse a version string, falling back to [`Version::INVALID`].
    ///
    /// Never fails. A malformed string is reported as a warning tagged with
    /// `identifier` and the sentinel is returned instead.
    pub fn parse(identifier: &str, version: &str) -> Self {
        match version.parse::<Version>() {
            Ok(parsed) => parsed,
            Err(e) => {
                warn!("[{}] {}", identifier, e);
                Self::INVALID
            }
        }
    }

    pub fn is_valid(&self) -> bool {
        *self != Self::INVALID
    }

    /// Compare two versions component by component
    pub fn compare(&self, other: &Version) -> Ordering {
        self.cmp(other)
    }
}

impl FromStr for Version {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !VERSION_RE.is_match(s) {
            return Err(ParseError::InvalidFormat(s.to_string()));
        }

        let mut parts = s.split('.').map(|part| {
            part.parse::<i64>()
                .map_err(|_| ParseError::InvalidFormat(s.to_string()))
        });

        // The regex guarantees exactly three parts
        let (Some(major), Some(minor), Some(patch)) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(ParseError::InvalidFormat(s.to_string()));
        };

        Ok(Self::new(major?, minor?, patch?))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}
