//! Registry trait for fetching the latest published action version

use crate::version::error::RegistryError;

/// Trait for fetching the latest release of an action from a registry
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait Registry: Send + Sync {
    /// Fetches the latest published version for an action identity
    ///
    /// # Arguments
    /// * `identity` - The action's `owner/repo` lookup key (e.g. "actions/checkout")
    ///
    /// # Returns
    /// * `Ok(version)` - The latest release tag
    /// * `Err(RegistryError)` - If the fetch fails
    async fn fetch_latest_version(&self, identity: &str) -> Result<String, RegistryError>;
}
