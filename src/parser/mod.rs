//! Parser layer
//! - workflow.rs: GitHub Actions workflow extraction (jobs -> steps -> uses)

pub mod workflow;

pub use workflow::{UsageCounts, collect_uses};
