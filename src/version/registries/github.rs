//! GitHub Releases API implementation

use std::time::Duration;

use crate::version::error::RegistryError;
use crate::version::registry::Registry;
use serde::Deserialize;
use tracing::warn;

/// Default base URL for the GitHub API
const DEFAULT_BASE_URL: &str = "https://api.github.com";

/// Response from the releases/latest endpoint
#[derive(Debug, Deserialize)]
struct LatestRelease {
    tag_name: String,
}

/// Registry implementation for the GitHub Releases API
pub struct GitHubRegistry {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl GitHubRegistry {
    /// Creates a registry client against the public GitHub API
    pub fn new(token: Option<String>, timeout: Duration) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL, token, timeout)
    }

    /// Creates a registry client with a custom base URL
    pub fn with_base_url(base_url: &str, token: Option<String>, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent("actions-outdated")
                .timeout(timeout)
                .build()
                .expect("Failed to create HTTP client"),
            base_url: base_url.to_string(),
            token,
        }
    }
}

#[async_trait::async_trait]
impl Registry for GitHubRegistry {
    async fn fetch_latest_version(&self, identity: &str) -> Result<String, RegistryError> {
        let url = format!("{}/repos/{}/releases/latest", self.base_url, identity);

        let mut request = self.client.get(&url);
        if let Some(token) = &self.token {
            request = request.header("Authorization", format!("token {}", token));
        }

        let response = request.send().await?;

        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(RegistryError::NotFound(identity.to_string()));
        }

        if !status.is_success() {
            warn!("GitHub API returned status {}: {}", status, url);
            return Err(RegistryError::InvalidResponse(format!(
                "Unexpected status: {}",
                status
            )));
        }

        let release: LatestRelease = response.json().await.map_err(|e| {
            warn!("Failed to parse GitHub releases response: {}", e);
            RegistryError::InvalidResponse(e.to_string())
        })?;

        Ok(release.tag_name)
    }
}
