//! Workflow directory scanning
//!
//! Finds `.yml`/`.yaml` files directly inside one directory (no recursion,
//! hidden files included), parses each one, and accumulates action usage
//! counts across all of them. Directory listing failures are always fatal;
//! what happens to an unreadable or unparsable file is up to
//! [`ParseFailureMode`].

use std::fs;
use std::path::{Path, PathBuf};

use serde_yaml::Value;
use thiserror::Error;
use tracing::{info, warn};

use crate::parser::{self, UsageCounts};

/// How to react when a matched file cannot be read or parsed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseFailureMode {
    /// Log a warning and continue with the remaining files
    Skip,
    /// Stop the scan and surface the error
    Abort,
}

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Failed to list {}: {source}", .path.display())]
    List {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },
}

/// Scans `dir` for workflow files and returns the usage counts, keyed by raw
/// action reference in first-seen order.
pub fn scan_dir(dir: &Path, mode: ParseFailureMode) -> Result<UsageCounts, ScanError> {
    let mut usage = UsageCounts::new();
    let mut parsed_files = 0usize;

    let entries = fs::read_dir(dir).map_err(|source| ScanError::List {
        path: dir.to_path_buf(),
        source,
    })?;

    for entry in entries {
        let entry = entry.map_err(|source| ScanError::List {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();

        if !is_workflow_file(&path) {
            continue;
        }

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(source) => match mode {
                ParseFailureMode::Skip => {
                    warn!("Skipping unreadable file {}: {}", path.display(), source);
                    continue;
                }
                ParseFailureMode::Abort => return Err(ScanError::Read { path, source }),
            },
        };

        let doc: Value = match serde_yaml::from_str(&content) {
            Ok(doc) => doc,
            Err(source) => match mode {
                ParseFailureMode::Skip => {
                    warn!("Skipping invalid YAML in {}: {}", path.display(), source);
                    continue;
                }
                ParseFailureMode::Abort => return Err(ScanError::Parse { path, source }),
            },
        };

        parser::collect_uses(&doc, &mut usage);
        parsed_files += 1;
    }

    info!(
        "Found {} distinct action references across {} workflow files",
        usage.len(),
        parsed_files
    );

    Ok(usage)
}

/// A workflow file is any regular file whose name ends in `.yml` or `.yaml`.
/// Directories with a matching name are ignored.
fn is_workflow_file(path: &Path) -> bool {
    if !path.is_file() {
        return false;
    }

    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.ends_with(".yml") || name.ends_with(".yaml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_file(dir: &Path, name: &str, content: &str) {
        let mut file = fs::File::create(dir.join(name)).unwrap();
        file.write_all(content.as_bytes()).unwrap();
    }

    fn workflow(uses: &[&str]) -> String {
        let steps = uses
            .iter()
            .map(|reference| format!("      - uses: {}\n", reference))
            .collect::<String>();
        format!("jobs:\n  build:\n    steps:\n{}", steps)
    }

    #[test]
    fn scans_yml_and_yaml_and_ignores_other_extensions() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), "ci.yml", &workflow(&["actions/checkout@v3"]));
        write_file(dir.path(), "release.yaml", &workflow(&["actions/setup-node@v2"]));
        write_file(dir.path(), "notes.txt", "uses: actions/checkout@v3");
        write_file(dir.path(), "ci.yml.bak", &workflow(&["actions/cache@v2"]));

        let usage = scan_dir(dir.path(), ParseFailureMode::Skip).unwrap();

        assert_eq!(usage.len(), 2);
        assert_eq!(usage.get("actions/checkout@v3"), Some(&1));
        assert_eq!(usage.get("actions/setup-node@v2"), Some(&1));
    }

    #[test]
    fn accumulates_counts_across_files() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), "a.yml", &workflow(&["actions/checkout@v3"]));
        write_file(dir.path(), "b.yml", &workflow(&["actions/checkout@v3"]));

        let usage = scan_dir(dir.path(), ParseFailureMode::Skip).unwrap();

        assert_eq!(usage.get("actions/checkout@v3"), Some(&2));
    }

    #[test]
    fn does_not_recurse_into_subdirectories() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("workflows");
        fs::create_dir(&nested).unwrap();
        write_file(&nested, "ci.yml", &workflow(&["actions/checkout@v3"]));

        let usage = scan_dir(dir.path(), ParseFailureMode::Skip).unwrap();

        assert!(usage.is_empty());
    }

    #[test]
    fn scans_hidden_files() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), ".ci.yml", &workflow(&["actions/checkout@v3"]));

        let usage = scan_dir(dir.path(), ParseFailureMode::Skip).unwrap();

        assert_eq!(usage.get("actions/checkout@v3"), Some(&1));
    }

    #[test]
    fn directory_with_workflow_name_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("ci.yml")).unwrap();
        write_file(dir.path(), "real.yml", &workflow(&["actions/checkout@v3"]));

        let usage = scan_dir(dir.path(), ParseFailureMode::Skip).unwrap();

        assert_eq!(usage.len(), 1);
    }

    #[test]
    fn skip_mode_continues_past_invalid_yaml() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), "broken.yml", "jobs: {unclosed");
        write_file(dir.path(), "good.yml", &workflow(&["actions/checkout@v3"]));

        let usage = scan_dir(dir.path(), ParseFailureMode::Skip).unwrap();

        assert_eq!(usage.get("actions/checkout@v3"), Some(&1));
        assert_eq!(usage.len(), 1);
    }

    #[test]
    fn abort_mode_stops_on_invalid_yaml() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), "broken.yml", "jobs: {unclosed");

        let result = scan_dir(dir.path(), ParseFailureMode::Abort);

        assert!(matches!(result, Err(ScanError::Parse { .. })));
    }

    #[test]
    fn missing_directory_is_an_error_in_both_modes() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");

        assert!(matches!(
            scan_dir(&missing, ParseFailureMode::Skip),
            Err(ScanError::List { .. })
        ));
        assert!(matches!(
            scan_dir(&missing, ParseFailureMode::Abort),
            Err(ScanError::List { .. })
        ));
    }

    #[test]
    fn empty_directory_yields_empty_usage() {
        let dir = tempfile::tempdir().unwrap();

        let usage = scan_dir(dir.path(), ParseFailureMode::Skip).unwrap();

        assert!(usage.is_empty());
    }

    #[test]
    fn non_workflow_yaml_contributes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), "config.yml", "services:\n  - name: api\n");

        let usage = scan_dir(dir.path(), ParseFailureMode::Skip).unwrap();

        assert!(usage.is_empty());
    }
}
