//! Repository implementations

mod manifest;

pub use manifest::{TomlManifestRepository, MANIFEST_FILE};
