//! Render report types

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::entities::RenderManifest;

/// What happened to one source entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum EntryAction {
    /// Passthrough file copied
    Copied,
    /// Template rendered
    Rendered,
    /// Output already current
    Fresh,
    /// Template failed; its output holds a diagnostic page
    ErrorPage { message: String },
    /// Template-only directory, subtree skipped
    SkippedDirectory,
}

impl EntryAction {
    /// Short verb used for human output
    pub fn label(&self) -> &'static str {
        match self {
            EntryAction::Copied => "copy",
            EntryAction::Rendered => "render",
            EntryAction::Fresh => "fresh",
            EntryAction::ErrorPage { .. } => "error",
            EntryAction::SkippedDirectory => "skip",
        }
    }
}

/// Outcome for a single source entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryOutcome {
    /// Source path relative to the source root
    pub source: PathBuf,
    /// Output path relative to the output root
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
    #[serde(flatten)]
    pub action: EntryAction,
}

impl EntryOutcome {
    pub fn new(source: &Path, output: Option<&Path>, action: EntryAction) -> Self {
        Self {
            source: source.to_path_buf(),
            output: output.map(Path::to_path_buf),
            action,
        }
    }
}

/// Result of one render run
#[derive(Debug, Clone, Default)]
pub struct RenderReport {
    /// Per-entry outcomes in traversal order
    pub entries: Vec<EntryOutcome>,
    /// Every output the run produced or found current
    pub manifest: RenderManifest,
    pub dry_run: bool,
}

impl RenderReport {
    fn count(&self, pred: impl Fn(&EntryAction) -> bool) -> usize {
        self.entries.iter().filter(|e| pred(&e.action)).count()
    }

    pub fn rendered(&self) -> usize {
        self.count(|a| matches!(a, EntryAction::Rendered))
    }

    pub fn copied(&self) -> usize {
        self.count(|a| matches!(a, EntryAction::Copied))
    }

    pub fn fresh(&self) -> usize {
        self.count(|a| matches!(a, EntryAction::Fresh))
    }

    pub fn errors(&self) -> usize {
        self.count(|a| matches!(a, EntryAction::ErrorPage { .. }))
    }

    /// Entries whose output holds an error page
    pub fn failures(&self) -> impl Iterator<Item = &EntryOutcome> {
        self.entries
            .iter()
            .filter(|e| matches!(e.action, EntryAction::ErrorPage { .. }))
    }

    pub fn is_success(&self) -> bool {
        self.errors() == 0
    }

    /// Look up the outcome for a source path
    pub fn outcome(&self, source: &Path) -> Option<&EntryOutcome> {
        self.entries.iter().find(|e| e.source == source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> RenderReport {
        RenderReport {
            entries: vec![
                EntryOutcome::new(
                    Path::new("a.html.tera"),
                    Some(Path::new("a.html")),
                    EntryAction::Rendered,
                ),
                EntryOutcome::new(Path::new("b.css"), Some(Path::new("b.css")), EntryAction::Copied),
                EntryOutcome::new(
                    Path::new("c.html.tera"),
                    Some(Path::new("c.html")),
                    EntryAction::ErrorPage {
                        message: "boom".to_string(),
                    },
                ),
                EntryOutcome::new(Path::new("_layouts.tera"), None, EntryAction::SkippedDirectory),
            ],
            ..RenderReport::default()
        }
    }

    #[test]
    fn counts_by_action() {
        let report = report();
        assert_eq!(report.rendered(), 1);
        assert_eq!(report.copied(), 1);
        assert_eq!(report.fresh(), 0);
        assert_eq!(report.errors(), 1);
        assert!(!report.is_success());
        assert_eq!(report.failures().count(), 1);
    }

    #[test]
    fn outcome_serializes_flat() {
        let report = report();
        let json = serde_json::to_value(&report.entries[2]).unwrap();
        assert_eq!(json["action"], "error_page");
        assert_eq!(json["message"], "boom");
        assert_eq!(json["output"], "c.html");

        let json = serde_json::to_value(&report.entries[3]).unwrap();
        assert_eq!(json["action"], "skipped_directory");
        assert!(json.get("output").is_none());
    }
}
