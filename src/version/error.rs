use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("No release found for {0}")]
    NotFound(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}
