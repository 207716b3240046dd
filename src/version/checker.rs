//! Version checker logic
//!
//! Fans out one lookup task per distinct reference and joins them in map-key
//! order. Completion order never shows in the results.

use std::sync::Arc;

use futures::future::join_all;
use tracing::error;

use crate::parser::workflow::UsageCounts;
use crate::version::compare::is_outdated;
use crate::version::registry::Registry;
use crate::version::types::{ActionRef, LatestVersion};

/// A reference whose pinned version no longer matches the latest release
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutdatedAction {
    pub identity: String,
    pub current: String,
    pub latest: LatestVersion,
}

/// Checks every distinct reference in a usage map against the registry
pub struct VersionChecker {
    registry: Arc<dyn Registry>,
}

impl VersionChecker {
    pub fn new(registry: Arc<dyn Registry>) -> Self {
        Self { registry }
    }

    /// Resolves all distinct references concurrently and returns the stale
    /// ones in the map's key order.
    ///
    /// Lookup failures never surface as errors here: each one is logged and
    /// degraded to [`LatestVersion::Unresolved`], and the affected reference
    /// is reported with an unknown latest version.
    pub async fn check(&self, usage: &UsageCounts) -> Vec<OutdatedAction> {
        let handles: Vec<_> = usage
            .keys()
            .map(|raw| {
                let registry = Arc::clone(&self.registry);
                let reference = ActionRef::parse(raw);

                tokio::spawn(async move {
                    let latest = match registry.fetch_latest_version(&reference.identity).await {
                        Ok(version) => LatestVersion::Resolved(version),
                        Err(e) => {
                            error!(
                                "Error fetching latest version for {}: {}",
                                reference.identity, e
                            );
                            LatestVersion::Unresolved
                        }
                    };

                    if is_outdated(reference.version.as_deref(), &latest) {
                        Some(OutdatedAction {
                            identity: reference.identity,
                            current: reference.version.unwrap_or_default(),
                            latest,
                        })
                    } else {
                        None
                    }
                })
            })
            .collect();

        let mut outdated = Vec::new();
        for result in join_all(handles).await {
            match result {
                Ok(Some(action)) => outdated.push(action),
                Ok(None) => {}
                Err(e) => error!("Lookup task failed: {}", e),
            }
        }

        outdated
    }
}
