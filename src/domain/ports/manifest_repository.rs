//! ManifestRepository port - persistence of the render manifest
//!
//! Lets `clean` find outputs produced by an earlier process without knowing
//! about the on-disk format.

use std::path::Path;

use crate::domain::entities::RenderManifest;

/// Result type for manifest operations
pub type ManifestResult<T> = Result<T, ManifestError>;

/// Manifest operation errors
#[derive(Debug)]
pub enum ManifestError {
    /// Manifest exists but cannot be parsed
    InvalidFormat(String),
    /// Manifest was written by an incompatible version
    VersionMismatch { found: u32, expected: u32 },
    /// I/O error
    Io(std::io::Error),
}

impl std::fmt::Display for ManifestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ManifestError::InvalidFormat(msg) => write!(f, "Invalid manifest format: {}", msg),
            ManifestError::VersionMismatch { found, expected } => write!(
                f,
                "Manifest version {} is not supported (expected {})",
                found, expected
            ),
            ManifestError::Io(err) => write!(f, "Manifest I/O error: {}", err),
        }
    }
}

impl std::error::Error for ManifestError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ManifestError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ManifestError {
    fn from(err: std::io::Error) -> Self {
        ManifestError::Io(err)
    }
}

/// Abstract repository for manifest persistence
///
/// Manifests are keyed by the output root they describe.
pub trait ManifestRepository {
    /// Load the manifest for `output_root`; `None` when nothing was persisted
    fn load(&self, output_root: &Path) -> ManifestResult<Option<RenderManifest>>;

    /// Persist the manifest for `output_root`
    fn save(&self, manifest: &RenderManifest, output_root: &Path) -> ManifestResult<()>;

    /// Forget the persisted manifest for `output_root`
    fn remove(&self, output_root: &Path) -> ManifestResult<()>;
}
