//! Registry implementations for fetching action versions

pub mod github;

pub use github::GitHubRegistry;
