//! Version value types extracted from the manifest
//!
//! The compatibility table only shows MAJOR.MINOR, so dependency versions
//! are reduced to that form regardless of how precisely the manifest pins
//! them. The crate's own version keeps both the short table form and the
//! full release form.

use regex::Regex;
use semver::Version;
use serde::Serialize;
use std::fmt;

/// A MAJOR.MINOR pair as shown in the compatibility table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MinorVersion {
    pub major: u64,
    pub minor: u64,
}

impl MinorVersion {
    /// Creates a new MAJOR.MINOR pair
    pub fn new(major: u64, minor: u64) -> Self {
        Self { major, minor }
    }

    /// Extract the leading MAJOR.MINOR pair from a version requirement
    /// string, e.g. `0.13.2`, `^0.13` or `=0.13.0-rc.1` all yield `0.13`.
    pub fn from_req_str(s: &str) -> Option<Self> {
        let re = Regex::new(r"(\d+)\.(\d+)").ok()?;
        let caps = re.captures(s)?;
        let major = caps.get(1)?.as_str().parse().ok()?;
        let minor = caps.get(2)?.as_str().parse().ok()?;
        Some(Self { major, minor })
    }
}

impl fmt::Display for MinorVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// The crate's own version in both table and release forms
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CrateVersion {
    full: Version,
}

impl CrateVersion {
    /// Parse a full MAJOR.MINOR.PATCH version string
    pub fn parse(s: &str) -> Result<Self, semver::Error> {
        Ok(Self {
            full: Version::parse(s)?,
        })
    }

    /// The MAJOR.MINOR form used in the compatibility table
    pub fn short(&self) -> MinorVersion {
        MinorVersion::new(self.full.major, self.full.minor)
    }

    /// The full MAJOR.MINOR.PATCH form used in changelog headings
    pub fn long(&self) -> String {
        format!(
            "{}.{}.{}",
            self.full.major, self.full.minor, self.full.patch
        )
    }
}

impl fmt::Display for CrateVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.full)
    }
}

/// A tracked dependency and its table version
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DepVersion {
    /// Dependency name as declared in the manifest
    pub name: String,
    /// MAJOR.MINOR extracted from the version requirement
    pub version: MinorVersion,
}

/// Versions extracted from the manifest for one gate run
///
/// Immutable after extraction; dependency order matches the
/// compatibility table column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionSet {
    pub crate_version: CrateVersion,
    pub deps: Vec<DepVersion>,
}
