//! Application error types using thiserror
//!
//! Only fatal conditions live here: unreadable files, malformed manifests,
//! and version patterns the extractor could not find. A failed documentation
//! check is not an error - it is a failed `CheckResult` in the report.

use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors that abort a run before a verdict is reached
#[derive(Error, Debug)]
pub enum CheckError {
    /// Failed to read an input file
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Manifest is not valid TOML
    #[error("failed to parse TOML in {path}: {message}")]
    TomlParse { path: PathBuf, message: String },

    /// The manifest has no package version declaration
    #[error("no package version declaration found in {path}")]
    CrateVersionMissing { path: PathBuf },

    /// The package version does not parse as MAJOR.MINOR.PATCH
    #[error("invalid package version '{value}' in {path}: {message}")]
    InvalidCrateVersion {
        path: PathBuf,
        value: String,
        message: String,
    },

    /// A tracked dependency has no version declaration in the manifest
    #[error("no version declaration found for dependency '{name}' in {path}")]
    DepVersionMissing { name: String, path: PathBuf },

    /// A tracked dependency's version requirement has no MAJOR.MINOR prefix
    #[error("could not extract MAJOR.MINOR from '{value}' for dependency '{name}'")]
    UnparsableDepVersion { name: String, value: String },
}

impl CheckError {
    /// Creates a new Read error
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CheckError::Read {
            path: path.into(),
            source,
        }
    }

    /// Creates a new TomlParse error
    pub fn toml_parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        CheckError::TomlParse {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Creates a new DepVersionMissing error
    pub fn dep_version_missing(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        CheckError::DepVersionMissing {
            name: name.into(),
            path: path.into(),
        }
    }

    /// Creates a new UnparsableDepVersion error
    pub fn unparsable_dep_version(name: impl Into<String>, value: impl Into<String>) -> Self {
        CheckError::UnparsableDepVersion {
            name: name.into(),
            value: value.into(),
        }
    }
}
