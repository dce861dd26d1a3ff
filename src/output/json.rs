//! JSON output formatter for machine processing
//!
//! Serializes the full gate report to stdout; nothing is written to
//! stderr in JSON mode. The exit code still carries the verdict.

use crate::domain::{CheckResult, GateReport};
use crate::output::OutputFormatter;
use serde::Serialize;
use std::io::Write;

/// JSON formatter for machine-readable output
pub struct JsonFormatter;

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// JSON representation of the full report
#[derive(Serialize)]
struct JsonOutput<'a> {
    /// Overall verdict, mirrors the exit code
    passed: bool,
    /// Versions extracted from the manifest
    versions: JsonVersions,
    /// Per-check results in execution order
    checks: &'a [CheckResult],
}

/// JSON representation of the extracted versions
#[derive(Serialize)]
struct JsonVersions {
    /// Full crate version (MAJOR.MINOR.PATCH)
    crate_version: String,
    /// Crate version as shown in the compatibility table
    crate_version_short: String,
    /// Tracked dependencies in table column order
    deps: Vec<JsonDep>,
}

/// JSON representation of one tracked dependency
#[derive(Serialize)]
struct JsonDep {
    name: String,
    version: String,
}

impl OutputFormatter for JsonFormatter {
    fn format(
        &self,
        report: &GateReport,
        out: &mut dyn Write,
        _err: &mut dyn Write,
    ) -> std::io::Result<()> {
        let output = JsonOutput {
            passed: report.passed(),
            versions: JsonVersions {
                crate_version: report.versions.crate_version.long(),
                crate_version_short: report.versions.crate_version.short().to_string(),
                deps: report
                    .versions
                    .deps
                    .iter()
                    .map(|d| JsonDep {
                        name: d.name.clone(),
                        version: d.version.to_string(),
                    })
                    .collect(),
            },
            checks: &report.checks,
        };

        serde_json::to_writer_pretty(&mut *out, &output)?;
        writeln!(out)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CheckResult, CrateVersion, DepVersion, MinorVersion, VersionSet};

    fn sample_report(checks: Vec<CheckResult>) -> GateReport {
        GateReport {
            versions: VersionSet {
                crate_version: CrateVersion::parse("2.4.0").unwrap(),
                deps: vec![DepVersion {
                    name: "leptos".to_string(),
                    version: MinorVersion::new(0, 6),
                }],
            },
            checks,
        }
    }

    fn render(report: &GateReport) -> serde_json::Value {
        let mut out = Vec::new();
        let mut err = Vec::new();
        JsonFormatter::new().format(report, &mut out, &mut err).unwrap();
        assert!(err.is_empty());
        serde_json::from_slice(&out).unwrap()
    }

    #[test]
    fn test_json_passed_report() {
        let report = sample_report(vec![CheckResult::passed("compat-table", "README.md", "ok")]);
        let json = render(&report);

        assert_eq!(json["passed"], true);
        assert_eq!(json["versions"]["crate_version"], "2.4.0");
        assert_eq!(json["versions"]["crate_version_short"], "2.4");
        assert_eq!(json["versions"]["deps"][0]["name"], "leptos");
        assert_eq!(json["versions"]["deps"][0]["version"], "0.6");
        assert_eq!(json["checks"][0]["status"], "passed");
    }

    #[test]
    fn test_json_failed_report() {
        let report = sample_report(vec![
            CheckResult::failed("compat-table", "README.md", "no matching row"),
            CheckResult::skipped("changelog", "CHANGELOG.md"),
        ]);
        let json = render(&report);

        assert_eq!(json["passed"], false);
        assert_eq!(json["checks"][0]["status"], "failed");
        assert_eq!(json["checks"][1]["status"], "skipped");
    }

    #[test]
    fn test_json_detail_is_optional() {
        let report = sample_report(vec![
            CheckResult::passed("changelog", "CHANGELOG.md", "ok").with_detail("latest entry"),
        ]);
        let json = render(&report);
        assert_eq!(json["checks"][0]["detail"], "latest entry");

        let report = sample_report(vec![CheckResult::passed("changelog", "CHANGELOG.md", "ok")]);
        let json = render(&report);
        assert!(json["checks"][0].get("detail").is_none());
    }
}
