//! Domain Entities
//!
//! Core data of a render run: what the source tree contains, what each
//! template depends on, which variables templates see, and what was produced.

mod dependency_chain;
mod environment;
mod manifest;
mod source_entry;

pub use dependency_chain::DependencyChain;
pub use environment::{Environment, EnvironmentSet, DEFAULT_ENVIRONMENT};
pub use manifest::{normalize_manifest_path, RenderManifest};
pub use source_entry::SourceEntry;
