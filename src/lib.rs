//! Reports outdated GitHub Actions referenced by the workflow files in a
//! directory, using the GitHub Releases API to find the latest version of
//! each action.

pub mod config;
pub mod log;
pub mod parser;
pub mod report;
pub mod scanner;
pub mod version;
