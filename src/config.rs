use std::path::PathBuf;
use std::time::Duration;

/// Default per-request timeout in seconds for release lookups
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Runtime settings assembled from CLI flags and the environment.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Directory scanned for workflow files
    pub dir: PathBuf,
    /// GitHub API token, sent as `Authorization: token <value>` when present
    pub token: Option<String>,
    /// Per-request timeout for release lookups
    pub timeout: Duration,
    /// Abort the scan on the first unreadable or unparsable file
    pub strict: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            token: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            strict: false,
        }
    }
}
