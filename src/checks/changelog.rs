//! Changelog check for leftover unreleased sections
//!
//! This is an inverted check: the changelog fails when it still contains
//! an `## [Unreleased]` header, because that section must have been
//! replaced with a dated release heading before the release is cut.

use crate::checks::{file_label, read_doc, DocCheck};
use crate::domain::{CheckResult, VersionSet};
use crate::error::CheckError;
use chrono::NaiveDate;
use regex::Regex;
use std::path::Path;

/// The placeholder section header that must be gone before a release
pub const UNRELEASED_HEADER: &str = "## [Unreleased]";

/// A dated release heading like `## [2.4.0] - 2024-01-01`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseHeading {
    pub version: String,
    pub date: NaiveDate,
}

/// Find the first dated release heading in the changelog.
///
/// Changelogs are reverse-chronological, so the first heading with a
/// valid date is the latest release.
pub fn latest_release(text: &str) -> Option<ReleaseHeading> {
    let re = Regex::new(r"(?m)^## \[(\d+\.\d+\.\d+)\] - (\d{4}-\d{2}-\d{2})").ok()?;
    for caps in re.captures_iter(text) {
        let version = caps.get(1)?.as_str().to_string();
        if let Ok(date) = NaiveDate::parse_from_str(caps.get(2)?.as_str(), "%Y-%m-%d") {
            return Some(ReleaseHeading { version, date });
        }
    }
    None
}

/// Checks that the changelog no longer carries an unreleased section
pub struct ChangelogCheck;

impl DocCheck for ChangelogCheck {
    fn name(&self) -> &'static str {
        "changelog"
    }

    fn run(&self, path: &Path, versions: &VersionSet) -> Result<CheckResult, CheckError> {
        let text = read_doc(path)?;
        let label = file_label(path);

        if text.contains(UNRELEASED_HEADER) {
            return Ok(CheckResult::failed(
                self.name(),
                &label,
                format!("{} still contains an [Unreleased] header", label),
            ));
        }

        let mut result = CheckResult::passed(
            self.name(),
            &label,
            format!("{} doesn't contain an [Unreleased] header", label),
        );

        // Informational only, never gates
        if let Some(release) = latest_release(&text) {
            let crate_long = versions.crate_version.long();
            let detail = if release.version == crate_long {
                format!("latest entry is {} ({})", release.version, release.date)
            } else {
                format!(
                    "latest entry is {} ({}), crate version is {}",
                    release.version, release.date, crate_long
                )
            };
            result = result.with_detail(detail);
        }

        Ok(result)
    }
}
