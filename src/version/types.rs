//! Common types for version checking

/// A `uses:` reference split into its registry identity and pinned version.
///
/// The raw form is `identity@version`, where identity is `owner/repo` with an
/// optional sub-path. The split happens on the first `@`; a reference without
/// one carries no pinned version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionRef {
    /// The reference exactly as it appeared in the workflow
    pub raw: String,
    /// Registry lookup key (`owner/repo`, sub-path kept as-is)
    pub identity: String,
    /// Pinned version, absent when the reference has no `@`
    pub version: Option<String>,
}

impl ActionRef {
    /// Splits a raw reference on the first `@`
    pub fn parse(raw: &str) -> Self {
        match raw.split_once('@') {
            Some((identity, version)) => Self {
                raw: raw.to_string(),
                identity: identity.to_string(),
                version: Some(version.to_string()),
            },
            None => Self {
                raw: raw.to_string(),
                identity: raw.to_string(),
                version: None,
            },
        }
    }
}

/// Outcome of a latest-release lookup.
///
/// A failed lookup degrades to `Unresolved` instead of an error, so one
/// broken identity never halts the run. The literal `Unknown` text shown to
/// the user is attached at the reporting boundary, not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LatestVersion {
    Resolved(String),
    Unresolved,
}
