//! TOML Manifest Repository
//!
//! Implements the ManifestRepository port using TOML format.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::entities::{normalize_manifest_path, RenderManifest};
use crate::domain::ports::file_system::FileSystem;
use crate::domain::ports::manifest_repository::{
    ManifestError, ManifestRepository, ManifestResult,
};
use crate::domain::ports::FsError;
use crate::infrastructure::fs::LocalFs;

/// File name of the manifest inside the output root
pub const MANIFEST_FILE: &str = ".pageit-manifest.toml";

/// TOML-based manifest repository
///
/// Stores the manifest as `.pageit-manifest.toml` in the output root.
#[derive(Debug, Clone, Default)]
pub struct TomlManifestRepository {
    fs: LocalFs,
}

impl TomlManifestRepository {
    pub fn new() -> Self {
        Self { fs: LocalFs::new() }
    }

    /// Location of the manifest for an output root
    pub fn manifest_path(output_root: &Path) -> PathBuf {
        output_root.join(MANIFEST_FILE)
    }
}

/// TOML representation of the manifest
#[derive(Debug, Clone, Serialize, Deserialize)]
struct TomlManifest {
    version: u32,
    #[serde(default)]
    outputs: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    failed: Vec<String>,
}

fn to_io(err: FsError) -> ManifestError {
    match err {
        FsError::Io { source, .. } => ManifestError::Io(source),
        other => ManifestError::Io(std::io::Error::other(other.to_string())),
    }
}

impl ManifestRepository for TomlManifestRepository {
    fn load(&self, output_root: &Path) -> ManifestResult<Option<RenderManifest>> {
        let path = Self::manifest_path(output_root);
        if !self.fs.exists(&path) {
            return Ok(None);
        }

        let bytes = self.fs.read(&path).map_err(to_io)?;
        let content =
            String::from_utf8(bytes).map_err(|e| ManifestError::InvalidFormat(e.to_string()))?;
        let toml_manifest: TomlManifest =
            toml::from_str(&content).map_err(|e| ManifestError::InvalidFormat(e.to_string()))?;

        if toml_manifest.version != RenderManifest::VERSION {
            return Err(ManifestError::VersionMismatch {
                found: toml_manifest.version,
                expected: RenderManifest::VERSION,
            });
        }

        let mut manifest = RenderManifest::new();
        for output in toml_manifest.outputs {
            manifest.record(PathBuf::from(output));
        }
        for failed in toml_manifest.failed {
            manifest.record_failed(PathBuf::from(failed));
        }
        Ok(Some(manifest))
    }

    fn save(&self, manifest: &RenderManifest, output_root: &Path) -> ManifestResult<()> {
        let toml_manifest = TomlManifest {
            version: RenderManifest::VERSION,
            outputs: manifest.outputs().map(normalize_manifest_path).collect(),
            failed: manifest.failed().map(normalize_manifest_path).collect(),
        };
        let content = toml::to_string_pretty(&toml_manifest)
            .map_err(|e| ManifestError::InvalidFormat(e.to_string()))?;
        self.fs
            .write_atomic(&Self::manifest_path(output_root), content.as_bytes())
            .map_err(to_io)
    }

    fn remove(&self, output_root: &Path) -> ManifestResult<()> {
        let path = Self::manifest_path(output_root);
        if !self.fs.exists(&path) {
            return Ok(());
        }
        self.fs.remove(&path).map_err(to_io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn load_missing_manifest_is_none() {
        let dir = tempdir().unwrap();
        let repo = TomlManifestRepository::new();
        assert!(repo.load(dir.path()).unwrap().is_none());
    }

    #[test]
    fn saved_manifest_loads_back() {
        let dir = tempdir().unwrap();
        let repo = TomlManifestRepository::new();
        let mut manifest = RenderManifest::new();
        manifest.record("index.html");
        manifest.record("css/site.css");
        manifest.record_failed("broken.html");

        repo.save(&manifest, dir.path()).unwrap();
        let loaded = repo.load(dir.path()).unwrap().unwrap();
        assert_eq!(loaded, manifest);

        let raw = std::fs::read_to_string(dir.path().join(MANIFEST_FILE)).unwrap();
        assert!(raw.contains("version = 1"));
        assert!(raw.contains("css/site.css"));
    }

    #[test]
    fn version_mismatch_is_rejected() {
        let dir = tempdir().unwrap();
        std::fs::write(
            dir.path().join(MANIFEST_FILE),
            "version = 99\noutputs = []\n",
        )
        .unwrap();

        let err = TomlManifestRepository::new().load(dir.path()).unwrap_err();
        assert!(matches!(
            err,
            ManifestError::VersionMismatch {
                found: 99,
                expected: 1
            }
        ));
    }

    #[test]
    fn garbage_is_invalid_format() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join(MANIFEST_FILE), "not = [toml").unwrap();
        let err = TomlManifestRepository::new().load(dir.path()).unwrap_err();
        assert!(matches!(err, ManifestError::InvalidFormat(_)));
    }

    #[test]
    fn remove_is_idempotent() {
        let dir = tempdir().unwrap();
        let repo = TomlManifestRepository::new();
        repo.save(&RenderManifest::new(), dir.path()).unwrap();
        repo.remove(dir.path()).unwrap();
        repo.remove(dir.path()).unwrap();
        assert!(!dir.path().join(MANIFEST_FILE).exists());
    }
}
