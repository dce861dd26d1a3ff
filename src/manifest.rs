//! Cargo.toml version extraction
//!
//! Pulls the versions the docs are checked against:
//! - the crate's own `version` from `[package]`
//! - the MAJOR.MINOR of each tracked dependency, whether declared as
//!   `dep = "0.13.2"` or `dep = { version = "0.13.2", ... }`
//!
//! Dependency declarations are searched across `[dependencies]`,
//! `[dev-dependencies]` and `[build-dependencies]`.

use crate::domain::{CrateVersion, DepVersion, MinorVersion, VersionSet};
use crate::error::CheckError;
use std::path::Path;
use toml::Value;

/// Dependency tables searched for tracked dependencies, in order
const DEPENDENCY_TABLES: [&str; 3] = ["dependencies", "dev-dependencies", "build-dependencies"];

/// Read the manifest file fully into memory
pub fn read_manifest(path: &Path) -> Result<String, CheckError> {
    std::fs::read_to_string(path).map_err(|e| CheckError::read(path, e))
}

/// Extract the version set from the manifest text
///
/// Every tracked dependency must have a resolvable version declaration;
/// the first missing one aborts the run with an error naming it.
pub fn extract_versions(
    path: &Path,
    content: &str,
    tracked: &[String],
) -> Result<VersionSet, CheckError> {
    let toml: Value = toml::from_str(content)
        .map_err(|e: toml::de::Error| CheckError::toml_parse(path, e.to_string()))?;

    let version_str = toml
        .get("package")
        .and_then(|p| p.get("version"))
        .and_then(|v| v.as_str())
        .ok_or_else(|| CheckError::CrateVersionMissing {
            path: path.to_path_buf(),
        })?;

    let crate_version =
        CrateVersion::parse(version_str).map_err(|e| CheckError::InvalidCrateVersion {
            path: path.to_path_buf(),
            value: version_str.to_string(),
            message: e.to_string(),
        })?;

    let mut deps = Vec::with_capacity(tracked.len());
    for name in tracked {
        let raw = find_dependency_version(&toml, name)
            .ok_or_else(|| CheckError::dep_version_missing(name, path))?;
        let version = MinorVersion::from_req_str(&raw)
            .ok_or_else(|| CheckError::unparsable_dep_version(name, &raw))?;
        deps.push(DepVersion {
            name: name.clone(),
            version,
        });
    }

    Ok(VersionSet {
        crate_version,
        deps,
    })
}

/// Look up a dependency's version requirement string in the manifest
fn find_dependency_version(toml: &Value, name: &str) -> Option<String> {
    for table_name in DEPENDENCY_TABLES {
        let Some(deps) = toml.get(table_name).and_then(|d| d.as_table()) else {
            continue;
        };
        match deps.get(name) {
            // Simple string: package = "1.0.0"
            Some(Value::String(s)) => return Some(s.clone()),
            // Inline table: package = { version = "1.0.0", features = [...] }
            Some(Value::Table(t)) => {
                if let Some(v) = t.get("version").and_then(|v| v.as_str()) {
                    return Some(v.to_string());
                }
            }
            _ => {}
        }
    }
    None
}
