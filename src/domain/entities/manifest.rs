//! Render manifest entity
//!
//! Records every output path a run produced, relative to the output root.
//! It's a pure data structure; persistence is handled by `ManifestRepository`.

use std::collections::BTreeSet;
use std::path::{Component, Path, PathBuf};

/// Normalize a relative output path for storage (always forward slashes).
pub fn normalize_manifest_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Set of output paths produced by a render run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderManifest {
    outputs: BTreeSet<PathBuf>,
    failed: BTreeSet<PathBuf>,
}

impl RenderManifest {
    /// Current manifest format version
    pub const VERSION: u32 = 1;

    pub fn new() -> Self {
        Self::default()
    }

    /// Record an output path (copied, rendered, or already current)
    pub fn record(&mut self, output: impl Into<PathBuf>) {
        self.outputs.insert(output.into());
    }

    /// Record an output that currently holds an error page.
    ///
    /// Failed outputs are re-rendered on the next run even if they look newer
    /// than their inputs.
    pub fn record_failed(&mut self, output: impl Into<PathBuf>) {
        let output = output.into();
        self.outputs.insert(output.clone());
        self.failed.insert(output);
    }

    pub fn contains(&self, output: &Path) -> bool {
        self.outputs.contains(output)
    }

    pub fn is_failed(&self, output: &Path) -> bool {
        self.failed.contains(output)
    }

    /// Output paths in lexical order
    pub fn outputs(&self) -> impl Iterator<Item = &Path> {
        self.outputs.iter().map(PathBuf::as_path)
    }

    pub fn failed(&self) -> impl Iterator<Item = &Path> {
        self.failed.iter().map(PathBuf::as_path)
    }

    pub fn len(&self) -> usize {
        self.outputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outputs.is_empty()
    }

    /// True when `output` is a plain relative path that cannot leave the
    /// output root (no `..`, no root or prefix component).
    pub fn is_contained(output: &Path) -> bool {
        !output.as_os_str().is_empty()
            && output
                .components()
                .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_deduplicates_and_sorts() {
        let mut manifest = RenderManifest::new();
        manifest.record("b.html");
        manifest.record("a.html");
        manifest.record("b.html");

        let outputs: Vec<_> = manifest.outputs().collect();
        assert_eq!(outputs, vec![Path::new("a.html"), Path::new("b.html")]);
    }

    #[test]
    fn failed_outputs_are_also_outputs() {
        let mut manifest = RenderManifest::new();
        manifest.record_failed("broken.html");
        assert!(manifest.contains(Path::new("broken.html")));
        assert!(manifest.is_failed(Path::new("broken.html")));
        assert_eq!(manifest.len(), 1);
    }

    #[test]
    fn containment_rejects_escapes() {
        assert!(RenderManifest::is_contained(Path::new("css/site.css")));
        assert!(!RenderManifest::is_contained(Path::new("../etc/passwd")));
        assert!(!RenderManifest::is_contained(Path::new("/etc/passwd")));
        assert!(!RenderManifest::is_contained(Path::new("")));
    }

    #[test]
    fn normalize_uses_forward_slashes() {
        assert_eq!(
            normalize_manifest_path(Path::new("css/site.css")),
            "css/site.css"
        );
    }
}
