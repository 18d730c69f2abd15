//! Render planning service
//!
//! Walks the source tree once, classifies every entry, resolves dependency
//! chains for templates and checks that no two entries claim the same output.
//! Nothing is written here: every configuration error surfaces before the
//! first output is touched.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::entities::{DependencyChain, RenderManifest, SourceEntry};
use crate::domain::ports::{FileSystem, TemplateEngine};
use crate::domain::services::{DependencyResolver, PathClassifier};
use crate::domain::value_objects::{Classification, EntryKind};
use crate::error::{PageitError, PageitResult};

/// What the engine will do with one source entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlannedAction {
    /// Template-only directory; its subtree is never visited
    SkipDirectory,
    /// Passthrough directory, mirrored implicitly by the files below it
    Directory,
    /// Passthrough file, copied byte for byte
    Copy,
    /// Template file with its resolved dependency chain
    Render { chain: DependencyChain },
}

/// A planned action for a single source entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedEntry {
    /// Classified source entry (path relative to the source root)
    pub entry: SourceEntry,
    /// Output path relative to the output root; `None` for skipped directories
    pub output: Option<PathBuf>,
    pub action: PlannedAction,
}

impl PlannedEntry {
    pub fn source(&self) -> &Path {
        self.entry.relative_path()
    }

    /// Does this entry produce an output file?
    pub fn produces_file(&self) -> bool {
        matches!(
            self.action,
            PlannedAction::Copy | PlannedAction::Render { .. }
        )
    }
}

/// Result of planning a render run, in traversal order
#[derive(Debug, Clone, Default)]
pub struct RenderPlan {
    pub entries: Vec<PlannedEntry>,
}

impl RenderPlan {
    pub fn templates(&self) -> impl Iterator<Item = &PlannedEntry> {
        self.entries
            .iter()
            .filter(|e| matches!(e.action, PlannedAction::Render { .. }))
    }

    pub fn passthrough_files(&self) -> impl Iterator<Item = &PlannedEntry> {
        self.entries
            .iter()
            .filter(|e| matches!(e.action, PlannedAction::Copy))
    }

    /// Every output file this plan would produce
    pub fn manifest(&self) -> RenderManifest {
        let mut manifest = RenderManifest::new();
        for entry in self.entries.iter().filter(|e| e.produces_file()) {
            if let Some(output) = &entry.output {
                manifest.record(output.clone());
            }
        }
        manifest
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Builds a `RenderPlan` for a source tree
pub struct Planner<'a, F: FileSystem + ?Sized, E: TemplateEngine + ?Sized> {
    fs: &'a F,
    engine: &'a E,
    classifier: &'a PathClassifier,
    excluded: Vec<PathBuf>,
}

impl<'a, F: FileSystem + ?Sized, E: TemplateEngine + ?Sized> Planner<'a, F, E> {
    pub fn new(fs: &'a F, engine: &'a E, classifier: &'a PathClassifier) -> Self {
        Self {
            fs,
            engine,
            classifier,
            excluded: Vec::new(),
        }
    }

    /// Absolute directories that are never traversed (the output root, tmp dir)
    pub fn with_excluded(mut self, excluded: Vec<PathBuf>) -> Self {
        self.excluded = excluded;
        self
    }

    /// Plan a full run over `source_root` (absolute).
    pub fn plan(&self, source_root: &Path) -> PageitResult<RenderPlan> {
        let mut entries = Vec::new();
        self.walk(source_root, Path::new(""), &mut entries)?;

        check_collisions(&entries)?;

        let mut resolver = DependencyResolver::new(self.engine);
        let mut plan = RenderPlan::default();
        for (entry, output) in entries {
            let action = match entry.classification() {
                Classification::ExcludedDirectory => PlannedAction::SkipDirectory,
                Classification::Passthrough if entry.kind() == EntryKind::Directory => {
                    PlannedAction::Directory
                }
                Classification::Passthrough => PlannedAction::Copy,
                Classification::Template => {
                    let chain = resolver.resolve(&source_root.join(entry.relative_path()))?;
                    PlannedAction::Render { chain }
                }
            };
            plan.entries.push(PlannedEntry {
                entry,
                output,
                action,
            });
        }

        debug!(entries = plan.len(), "planned render");
        Ok(plan)
    }

    fn walk(
        &self,
        dir: &Path,
        relative: &Path,
        out: &mut Vec<(SourceEntry, Option<PathBuf>)>,
    ) -> PageitResult<()> {
        for child in self.fs.list_dir(dir)? {
            if self.excluded.iter().any(|ex| ex == &child.path) {
                debug!(path = %child.path.display(), "skip output directory");
                continue;
            }

            let rel = relative.join(&child.name);
            let kind = if child.is_dir {
                EntryKind::Directory
            } else {
                EntryKind::File
            };
            let entry = self.classifier.entry(&rel, kind);
            let output = self.classifier.output_path(&entry)?;

            // Linked directories are never entered, so a link to an ancestor cannot loop
            let descend = kind == EntryKind::Directory && !entry.is_excluded() && !child.is_symlink;
            if entry.is_excluded() {
                debug!(path = %rel.display(), "skip template directory");
            } else if child.is_symlink && child.is_dir {
                debug!(path = %rel.display(), "skip linked directory");
            }
            out.push((entry, output));
            if descend {
                self.walk(&child.path, &rel, out)?;
            }
        }
        Ok(())
    }
}

/// Reject two entries that map to the same output path.
///
/// Directories take part too: a template rendering to `docs` collides with
/// a passthrough directory `docs/`.
fn check_collisions(entries: &[(SourceEntry, Option<PathBuf>)]) -> PageitResult<()> {
    let mut claimed: BTreeMap<&Path, &Path> = BTreeMap::new();
    for (entry, output) in entries {
        let Some(output) = output else { continue };
        if let Some(first) = claimed.insert(output.as_path(), entry.relative_path()) {
            return Err(PageitError::OutputCollision {
                first: first.to_path_buf(),
                second: entry.relative_path().to_path_buf(),
                output: output.clone(),
            });
        }
    }
    Ok(())
}
