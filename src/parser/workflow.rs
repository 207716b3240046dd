//! GitHub Actions workflow extraction
//!
//! Walks `jobs -> <job> -> steps -> <step> -> uses` in a parsed document and
//! counts every action reference. Anything that does not match that shape is
//! skipped silently: workflow files in the wild are heterogeneous, and a
//! missing or oddly typed field is not an error.

use indexmap::IndexMap;
use serde_yaml::Value;

/// Occurrence count per raw action reference, in first-seen order.
///
/// Iteration order is insertion order, which is what keeps the final report
/// deterministic for a given scan. The checker dedups by key; the counts
/// themselves are informational.
pub type UsageCounts = IndexMap<String, u32>;

/// Records every `uses:` string of one parsed workflow document into `usage`
pub fn collect_uses(doc: &Value, usage: &mut UsageCounts) {
    let Some(jobs) = doc.get("jobs").and_then(Value::as_mapping) else {
        return;
    };

    for job in jobs.values() {
        let Some(steps) = job.get("steps").and_then(Value::as_sequence) else {
            continue;
        };

        for step in steps {
            if let Some(uses) = step.get("uses").and_then(Value::as_str) {
                *usage.entry(uses.to_string()).or_insert(0) += 1;
            }
        }
    }
}
