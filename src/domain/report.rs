//! Check result and report structures

use crate::domain::VersionSet;
use serde::Serialize;

/// Outcome of a single documentation check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckStatus {
    /// The check ran and the document agrees with the manifest
    Passed,
    /// The check ran and found an inconsistency
    Failed,
    /// The check never ran because an earlier check failed
    Skipped,
}

/// Result of one check against one documentation file
#[derive(Debug, Clone, Serialize)]
pub struct CheckResult {
    /// Short identifier of the check (e.g. `compat-table`)
    pub name: &'static str,
    /// Display name of the file the check ran against
    pub file: String,
    pub status: CheckStatus,
    /// Human-readable status line
    pub message: String,
    /// Additional context shown in verbose mode
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl CheckResult {
    /// Creates a passed result
    pub fn passed(name: &'static str, file: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name,
            file: file.into(),
            status: CheckStatus::Passed,
            message: message.into(),
            detail: None,
        }
    }

    /// Creates a failed result
    pub fn failed(name: &'static str, file: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name,
            file: file.into(),
            status: CheckStatus::Failed,
            message: message.into(),
            detail: None,
        }
    }

    /// Creates a skipped result for a check that never ran
    pub fn skipped(name: &'static str, file: impl Into<String>) -> Self {
        let file = file.into();
        Self {
            name,
            status: CheckStatus::Skipped,
            message: format!("{} check skipped after an earlier failure", file),
            file,
            detail: None,
        }
    }

    /// Attach a verbose detail line
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

/// Full report for one gate run
#[derive(Debug, Clone, Serialize)]
pub struct GateReport {
    /// Versions extracted from the manifest
    pub versions: VersionSet,
    /// Per-check results in execution order
    pub checks: Vec<CheckResult>,
}

impl GateReport {
    /// True when no check failed
    pub fn passed(&self) -> bool {
        self.checks.iter().all(|c| c.status != CheckStatus::Failed)
    }
}
