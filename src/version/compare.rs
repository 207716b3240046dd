//! Textual staleness comparison for pinned versions
//!
//! The rule is deliberately string-based, no semver parsing:
//! - a bare pin like `v3` is compared by major component only;
//! - a dotted pin like `1.2.3` must match the latest release exactly;
//! - an unpinned reference is never stale.

use crate::version::types::LatestVersion;

/// Major component of a version string: everything before the first `.`,
/// or the whole string when it contains none
fn major(version: &str) -> &str {
    version.split_once('.').map_or(version, |(major, _)| major)
}

/// Decides whether a pinned version is stale against a lookup outcome.
///
/// `pinned` is the version part of the reference; `None` and the empty
/// string both mean "no pin" and are never flagged. An `Unresolved` lookup
/// flags every pinned reference, so failed identities still show up in the
/// report instead of being hidden.
pub fn is_outdated(pinned: Option<&str>, latest: &LatestVersion) -> bool {
    let Some(current) = pinned.filter(|v| !v.is_empty()) else {
        return false;
    };

    match latest {
        LatestVersion::Resolved(latest) => {
            if current.contains('.') {
                current != latest
            } else {
                major(current) != major(latest)
            }
        }
        LatestVersion::Unresolved => true,
    }
}
