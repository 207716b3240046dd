// Version management layer
// - checker.rs: Outdated action detection
// - compare.rs: Pinned-vs-latest staleness rule
// - error.rs: Registry error types
// - registry.rs: Registry trait definition
// - types.rs: Common types (ActionRef, LatestVersion)
// - registries/: Registry implementations
//   - github.rs: GitHub Releases API

pub mod checker;
pub mod compare;
pub mod error;
pub mod registries;
pub mod registry;
pub mod types;

pub use checker::{OutdatedAction, VersionChecker};
pub use error::RegistryError;
pub use registries::GitHubRegistry;
pub use registry::Registry;
pub use types::{ActionRef, LatestVersion};
