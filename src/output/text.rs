//! Text output formatter for human-readable display
//!
//! This module provides:
//! - The extracted-versions line for operator visibility
//! - [OK] lines on stdout, [Failed] lines on stderr
//! - Skip notes and per-check details in verbose mode

use crate::domain::{CheckStatus, GateReport, VersionSet};
use crate::output::{OutputFormatter, Verbosity};
use colored::Colorize;
use std::io::Write;

/// Text formatter for human-readable output
pub struct TextFormatter {
    /// Verbosity level
    verbosity: Verbosity,
    /// Whether to use colors
    color: bool,
}

impl TextFormatter {
    /// Create a new text formatter
    pub fn new(verbosity: Verbosity) -> Self {
        Self {
            verbosity,
            color: true,
        }
    }

    /// Create a new text formatter with color option
    pub fn with_color(verbosity: Verbosity, color: bool) -> Self {
        Self { verbosity, color }
    }

    fn ok_label(&self) -> String {
        if self.color {
            "[OK]".green().to_string()
        } else {
            "[OK]".to_string()
        }
    }

    fn failed_label(&self) -> String {
        if self.color {
            "[Failed]".red().bold().to_string()
        } else {
            "[Failed]".to_string()
        }
    }

    fn skipped_label(&self) -> String {
        if self.color {
            "[Skipped]".dimmed().to_string()
        } else {
            "[Skipped]".to_string()
        }
    }

    /// The extracted-versions line, e.g.
    /// `Found crate version 2.4 (leptos 0.6, bevy 0.13)`
    fn versions_line(versions: &VersionSet) -> String {
        let short = versions.crate_version.short();
        if versions.deps.is_empty() {
            return format!("Found crate version {}", short);
        }

        let deps: Vec<String> = versions
            .deps
            .iter()
            .map(|d| format!("{} {}", d.name, d.version))
            .collect();
        format!("Found crate version {} ({})", short, deps.join(", "))
    }
}

impl OutputFormatter for TextFormatter {
    fn format(
        &self,
        report: &GateReport,
        out: &mut dyn Write,
        err: &mut dyn Write,
    ) -> std::io::Result<()> {
        let quiet = self.verbosity == Verbosity::Quiet;
        let verbose = self.verbosity == Verbosity::Verbose;

        if !quiet {
            writeln!(out, "{}", Self::versions_line(&report.versions))?;
        }

        for check in &report.checks {
            match check.status {
                CheckStatus::Passed => {
                    if !quiet {
                        writeln!(out, "{} {}", self.ok_label(), check.message)?;
                        if verbose {
                            if let Some(detail) = &check.detail {
                                writeln!(out, "  {}", detail)?;
                            }
                        }
                    }
                }
                CheckStatus::Failed => {
                    writeln!(err, "{} {}", self.failed_label(), check.message)?;
                }
                CheckStatus::Skipped => {
                    if verbose {
                        writeln!(out, "{} {}", self.skipped_label(), check.message)?;
                    }
                }
            }
        }

        Ok(())
    }
}
