//! Documentation checks run by the release gate
//!
//! Each check reads one documentation file, validates it against the
//! extracted version set, and returns a pass/fail result. Checks never
//! modify their input files.

mod changelog;
mod compat_table;

pub use changelog::ChangelogCheck;
pub use compat_table::CompatTableCheck;

use crate::domain::{CheckResult, VersionSet};
use crate::error::CheckError;
use std::path::Path;

/// Trait for a single documentation check
pub trait DocCheck {
    /// Short identifier used in reports
    fn name(&self) -> &'static str;

    /// Run the check against the given file
    fn run(&self, path: &Path, versions: &VersionSet) -> Result<CheckResult, CheckError>;
}

/// Read a documentation file fully into memory
pub(crate) fn read_doc(path: &Path) -> Result<String, CheckError> {
    std::fs::read_to_string(path).map_err(|e| CheckError::read(path, e))
}

/// Display name of a checked file, as shown in status lines
pub(crate) fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
