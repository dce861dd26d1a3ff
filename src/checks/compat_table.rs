//! Compatibility table check for the README
//!
//! The README is expected to carry a markdown table mapping crate versions
//! to compatible dependency versions:
//!
//! | crate | leptos | bevy |
//! |-------|--------|------|
//! | 2.4   | 0.6    | 0.13 |
//!
//! The check passes when at least one row matches the current version set,
//! column for column.

use crate::checks::{file_label, read_doc, DocCheck};
use crate::domain::{CheckResult, VersionSet};
use crate::error::CheckError;
use regex::Regex;
use std::path::Path;

/// Checks that the README compatibility table has a row for the
/// current versions
pub struct CompatTableCheck;

impl CompatTableCheck {
    /// Build the row pattern for the given version set.
    ///
    /// A matching row starts with the crate version cell (an optional extra
    /// prefix inside the cell is allowed), followed by one cell per tracked
    /// dependency in table order, each tolerating trailing whitespace. The
    /// last cell only needs to begin with its version token, so any further
    /// columns are ignored. Version tokens are escaped, so `2.4` cannot
    /// match a `2.41` cell.
    fn row_pattern(versions: &VersionSet) -> String {
        let mut pattern = format!(
            r"^\| (.* )?{}",
            regex::escape(&versions.crate_version.short().to_string())
        );
        for dep in &versions.deps {
            pattern.push_str(r"\s*\| ");
            pattern.push_str(&regex::escape(&dep.version.to_string()));
        }
        pattern
    }

    /// Find the first table row matching the current version set
    fn find_matching_row<'a>(versions: &VersionSet, text: &'a str) -> Option<&'a str> {
        let re = Regex::new(&Self::row_pattern(versions)).expect("invalid row pattern");
        text.lines().find(|line| re.is_match(line))
    }
}

impl DocCheck for CompatTableCheck {
    fn name(&self) -> &'static str {
        "compat-table"
    }

    fn run(&self, path: &Path, versions: &VersionSet) -> Result<CheckResult, CheckError> {
        let text = read_doc(path)?;
        let label = file_label(path);

        match Self::find_matching_row(versions, &text) {
            Some(row) => Ok(CheckResult::passed(
                self.name(),
                &label,
                format!(
                    "{} contains the current crate version in the compatibility table",
                    label
                ),
            )
            .with_detail(format!("matched row: {}", row.trim_end()))),
            None => Ok(CheckResult::failed(
                self.name(),
                &label,
                format!(
                    "{} doesn't contain the current crate version in the compatibility table",
                    label
                ),
            )),
        }
    }
}
