//! Path classification service
//!
//! Decides, per source entry, whether it is a template, a template-only
//! directory, or a passthrough file, and where its output goes.

use std::path::{Path, PathBuf};

use crate::domain::entities::SourceEntry;
use crate::domain::value_objects::{Classification, EntryKind, TemplateMarker};
use crate::error::{PageitError, PageitResult};

/// Classifies source entries by the configured template marker
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathClassifier {
    marker: TemplateMarker,
}

impl PathClassifier {
    pub fn new(marker: TemplateMarker) -> Self {
        Self { marker }
    }

    pub fn marker(&self) -> &TemplateMarker {
        &self.marker
    }

    /// Classify an entry by its file name.
    pub fn classify(&self, name: &str, kind: EntryKind) -> Classification {
        match (kind, self.marker.matches(name)) {
            (EntryKind::Directory, true) => Classification::ExcludedDirectory,
            (EntryKind::File, true) => Classification::Template,
            (_, false) => Classification::Passthrough,
        }
    }

    /// Build a `SourceEntry` snapshot for a path relative to the source root
    pub fn entry(&self, relative_path: &Path, kind: EntryKind) -> SourceEntry {
        let name = relative_path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default();
        let classification = self.classify(&name, kind);
        SourceEntry::new(relative_path, kind, classification)
    }

    /// Output path (relative to the output root) for an entry.
    ///
    /// Excluded directories have none. Templates lose their marker; a
    /// template whose name is only the marker is a configuration error.
    pub fn output_path(&self, entry: &SourceEntry) -> PageitResult<Option<PathBuf>> {
        match entry.classification() {
            Classification::ExcludedDirectory => Ok(None),
            Classification::Passthrough => Ok(Some(entry.relative_path().to_path_buf())),
            Classification::Template => {
                let path = entry.relative_path();
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy())
                    .unwrap_or_default();
                match self.marker.strip(&name) {
                    Some(stripped) if !stripped.is_empty() => Ok(Some(path.with_file_name(stripped))),
                    _ => Err(PageitError::EmptyOutputName {
                        template: path.to_path_buf(),
                    }),
                }
            }
        }
    }
}
