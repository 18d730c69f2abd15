//! Source entry snapshot

use std::path::{Path, PathBuf};

use crate::domain::value_objects::{Classification, EntryKind};

/// A filesystem node under the source root, as seen during one traversal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceEntry {
    relative_path: PathBuf,
    kind: EntryKind,
    classification: Classification,
}

impl SourceEntry {
    pub fn new(relative_path: impl Into<PathBuf>, kind: EntryKind, classification: Classification) -> Self {
        Self {
            relative_path: relative_path.into(),
            kind,
            classification,
        }
    }

    /// Path relative to the source root
    pub fn relative_path(&self) -> &Path {
        &self.relative_path
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    pub fn classification(&self) -> Classification {
        self.classification
    }

    pub fn is_template(&self) -> bool {
        self.classification == Classification::Template
    }

    pub fn is_excluded(&self) -> bool {
        self.classification == Classification::ExcludedDirectory
    }
}
