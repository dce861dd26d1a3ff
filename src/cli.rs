//! CLI argument parsing module for relcheck

use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Default compatibility table columns, in table order.
const DEFAULT_DEPS: [&str; 2] = ["leptos", "bevy"];

/// Release documentation consistency checker
#[derive(Parser, Debug, Clone)]
#[command(
    name = "relcheck",
    version,
    about = "Checks README and CHANGELOG against Cargo.toml versions"
)]
pub struct CliArgs {
    /// Project directory containing the manifest and docs (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Manifest file, relative to the project directory
    #[arg(long, default_value = "Cargo.toml")]
    pub manifest: PathBuf,

    /// README file containing the compatibility table
    #[arg(long, default_value = "README.md")]
    pub readme: PathBuf,

    /// Changelog file checked for a leftover unreleased section
    #[arg(long, default_value = "CHANGELOG.md")]
    pub changelog: PathBuf,

    /// Tracked dependency column of the compatibility table, in table order
    /// (can be specified multiple times; default: leptos, bevy)
    #[arg(long = "dep", action = ArgAction::Append)]
    pub deps: Vec<String>,

    // Output options
    /// Output the report in JSON format
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Enable quiet mode - minimal output
    #[arg(short, long)]
    pub quiet: bool,
}

impl CliArgs {
    /// Tracked dependency names, falling back to the default columns
    pub fn tracked_deps(&self) -> Vec<String> {
        if self.deps.is_empty() {
            DEFAULT_DEPS.iter().map(|s| s.to_string()).collect()
        } else {
            self.deps.clone()
        }
    }

    /// Full path to the manifest file
    pub fn manifest_path(&self) -> PathBuf {
        self.path.join(&self.manifest)
    }

    /// Full path to the README file
    pub fn readme_path(&self) -> PathBuf {
        self.path.join(&self.readme)
    }

    /// Full path to the changelog file
    pub fn changelog_path(&self) -> PathBuf {
        self.path.join(&self.changelog)
    }
}
