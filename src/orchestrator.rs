//! Gate orchestrator for coordinating the check sequence
//!
//! Workflow: read manifest → extract versions → compatibility table →
//! changelog. Fatal errors abort the run before any verdict. A failed
//! check short-circuits the rest: later checks are recorded as skipped
//! and never read their files.

use crate::checks::{ChangelogCheck, CompatTableCheck, DocCheck};
use crate::cli::CliArgs;
use crate::domain::{CheckResult, CheckStatus, GateReport};
use crate::error::CheckError;
use crate::manifest;
use std::path::PathBuf;

/// Orchestrator for running the release gate
pub struct Orchestrator {
    /// CLI arguments for configuration
    args: CliArgs,
}

impl Orchestrator {
    /// Create a new orchestrator with the given CLI arguments
    pub fn new(args: CliArgs) -> Self {
        Self { args }
    }

    /// Run the gate and produce a report
    pub fn run(&self) -> Result<GateReport, CheckError> {
        // Step 1: extract versions from the manifest
        let manifest_path = self.args.manifest_path();
        let content = manifest::read_manifest(&manifest_path)?;
        let versions =
            manifest::extract_versions(&manifest_path, &content, &self.args.tracked_deps())?;

        // Step 2: run the documentation checks in order
        let checks: Vec<(Box<dyn DocCheck>, PathBuf)> = vec![
            (Box::new(CompatTableCheck), self.args.readme_path()),
            (Box::new(ChangelogCheck), self.args.changelog_path()),
        ];

        let mut results = Vec::with_capacity(checks.len());
        let mut failed = false;
        for (check, path) in checks {
            // Later checks never run once a gate check has failed
            if failed {
                results.push(CheckResult::skipped(
                    check.name(),
                    crate::checks::file_label(&path),
                ));
                continue;
            }

            let result = check.run(&path, &versions)?;
            failed = result.status == CheckStatus::Failed;
            results.push(result);
        }

        Ok(GateReport {
            versions,
            checks: results,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    const MANIFEST: &str = r#"
[package]
name = "leptos-bevy-canvas"
version = "2.4.0"

[dependencies]
leptos = "0.6.1"
bevy = { version = "0.13.2", default-features = false }
"#;

    const README_OK: &str = "\
| Crate | Leptos | Bevy |
|-------|--------|------|
| 2.4   | 0.6    | 0.13 |
";

    const CHANGELOG_OK: &str = "# Changelog\n\n## [2.4.0] - 2024-01-01\n\n- released\n";

    fn project(manifest: &str, readme: &str, changelog: &str) -> TempDir {
        let dir = tempfile::tempdir().expect("Failed to create temp directory");
        fs::write(dir.path().join("Cargo.toml"), manifest).unwrap();
        fs::write(dir.path().join("README.md"), readme).unwrap();
        fs::write(dir.path().join("CHANGELOG.md"), changelog).unwrap();
        dir
    }

    fn run_in(dir: &TempDir) -> Result<GateReport, CheckError> {
        let args = CliArgs::parse_from(["relcheck", dir.path().to_str().unwrap()]);
        Orchestrator::new(args).run()
    }

    #[test]
    fn test_all_checks_pass() {
        let dir = project(MANIFEST, README_OK, CHANGELOG_OK);
        let report = run_in(&dir).unwrap();

        assert!(report.passed());
        assert_eq!(report.checks.len(), 2);
        assert!(report
            .checks
            .iter()
            .all(|c| c.status == CheckStatus::Passed));
    }

    #[test]
    fn test_compat_failure_skips_changelog() {
        let readme = "| 2.3 | 0.6 | 0.13 |\n";
        let dir = project(MANIFEST, readme, CHANGELOG_OK);
        let report = run_in(&dir).unwrap();

        assert!(!report.passed());
        assert_eq!(report.checks[0].status, CheckStatus::Failed);
        assert_eq!(report.checks[1].status, CheckStatus::Skipped);
    }

    #[test]
    fn test_compat_failure_never_reads_changelog() {
        // The skipped check must not touch its file at all
        let readme = "| 2.3 | 0.6 | 0.13 |\n";
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("Cargo.toml"), MANIFEST).unwrap();
        fs::write(dir.path().join("README.md"), readme).unwrap();
        // No CHANGELOG.md on disk

        let report = run_in(&dir).unwrap();
        assert_eq!(report.checks[1].status, CheckStatus::Skipped);
    }

    #[test]
    fn test_unreleased_changelog_fails() {
        let changelog = "# Changelog\n\n## [Unreleased]\n\n- pending\n";
        let dir = project(MANIFEST, README_OK, changelog);
        let report = run_in(&dir).unwrap();

        assert!(!report.passed());
        assert_eq!(report.checks[0].status, CheckStatus::Passed);
        assert_eq!(report.checks[1].status, CheckStatus::Failed);
    }

    #[test]
    fn test_missing_manifest_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let err = run_in(&dir).unwrap_err();
        assert!(matches!(err, CheckError::Read { .. }));
    }

    #[test]
    fn test_missing_readme_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("Cargo.toml"), MANIFEST).unwrap();
        let err = run_in(&dir).unwrap_err();
        assert!(matches!(err, CheckError::Read { .. }));
    }

    #[test]
    fn test_custom_tracked_deps() {
        let manifest = r#"
[package]
name = "test"
version = "1.2.0"

[dependencies]
axum = "0.7.5"
"#;
        let readme = "| 1.2 | 0.7 |\n";
        let dir = project(manifest, readme, "# Changelog\n");

        let args = CliArgs::parse_from([
            "relcheck",
            dir.path().to_str().unwrap(),
            "--dep",
            "axum",
        ]);
        let report = Orchestrator::new(args).run().unwrap();
        assert!(report.passed());
    }

    #[test]
    fn test_inputs_never_modified() {
        let dir = project(MANIFEST, README_OK, CHANGELOG_OK);
        let before = (
            fs::read_to_string(dir.path().join("Cargo.toml")).unwrap(),
            fs::read_to_string(dir.path().join("README.md")).unwrap(),
            fs::read_to_string(dir.path().join("CHANGELOG.md")).unwrap(),
        );

        run_in(&dir).unwrap();

        let after = (
            fs::read_to_string(dir.path().join("Cargo.toml")).unwrap(),
            fs::read_to_string(dir.path().join("README.md")).unwrap(),
            fs::read_to_string(dir.path().join("CHANGELOG.md")).unwrap(),
        );
        assert_eq!(before, after);
    }
}
