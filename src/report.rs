//! Plain-text report rendering
//!
//! The table header pads the Name column to the longest identity seen in the
//! scan plus two, while data rows pad to a fixed 40/20. The mismatch is part
//! of the output contract, as is printing the header even when every action
//! is current. Padding is a minimum; long values are never truncated.

use crate::parser::UsageCounts;
use crate::version::{ActionRef, LatestVersion, OutdatedAction};

/// Renders the outdated-actions table, or the header plus a fallback line
/// when `outdated` is empty.
pub fn render(usage: &UsageCounts, outdated: &[OutdatedAction]) -> String {
    let name_width = usage
        .keys()
        .map(|raw| ActionRef::parse(raw).identity.len())
        .max()
        .unwrap_or(0)
        + 2;

    let mut out = String::new();
    out.push_str(&format!(
        "{:<name_width$}{:<20}{}\n",
        "Name", "Current Version", "New Version"
    ));

    if outdated.is_empty() {
        out.push_str("No new versions found.\n");
        return out;
    }

    for action in outdated {
        out.push_str(&format!(
            "{:<40}{:<20}{}\n",
            action.identity,
            action.current,
            latest_text(&action.latest)
        ));
    }

    out
}

/// Text shown in the New Version column
fn latest_text(latest: &LatestVersion) -> &str {
    match latest {
        LatestVersion::Resolved(version) => version,
        LatestVersion::Unresolved => "Unknown",
    }
}
