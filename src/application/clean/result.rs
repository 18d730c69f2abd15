//! Clean result types

use std::path::PathBuf;

use serde::Serialize;

/// Why a manifest entry was not deleted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// Already gone
    Missing,
    /// Path would escape the output root
    OutsideOutput,
    /// Path is a directory, not a generated file
    Directory,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::Missing => write!(f, "missing"),
            SkipReason::OutsideOutput => write!(f, "outside output root"),
            SkipReason::Directory => write!(f, "directory"),
        }
    }
}

/// A manifest entry that was left alone
#[derive(Debug, Clone, Serialize)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: SkipReason,
}

impl SkippedFile {
    pub fn new(path: PathBuf, reason: SkipReason) -> Self {
        Self { path, reason }
    }
}

/// Result of a clean operation
#[derive(Debug, Clone, Default, Serialize)]
pub struct CleanResult {
    /// Files deleted (or that would be deleted in a dry run)
    pub deleted: Vec<PathBuf>,
    pub skipped: Vec<SkippedFile>,
    pub errors: Vec<String>,
    pub dry_run: bool,
}

impl CleanResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_deleted(&mut self, path: PathBuf) {
        self.deleted.push(path);
    }

    pub fn add_skipped(&mut self, path: PathBuf, reason: SkipReason) {
        self.skipped.push(SkippedFile::new(path, reason));
    }

    pub fn add_error(&mut self, error: String) {
        self.errors.push(error);
    }

    /// Manifest entries considered
    pub fn total_count(&self) -> usize {
        self.deleted.len() + self.skipped.len() + self.errors.len()
    }

    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_include_every_bucket() {
        let mut result = CleanResult::new();
        result.add_deleted(PathBuf::from("index.html"));
        result.add_skipped(PathBuf::from("gone.html"), SkipReason::Missing);
        assert_eq!(result.total_count(), 2);
        assert!(result.is_success());

        result.add_error("Failed to delete x".to_string());
        assert!(!result.is_success());
    }

    #[test]
    fn skip_reason_display() {
        assert_eq!(SkipReason::OutsideOutput.to_string(), "outside output root");
    }
}
