//! Classification of source tree entries

use serde::Serialize;

/// Whether a filesystem node is a file or a directory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    File,
    Directory,
}

/// What the render engine does with a source entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    /// Template-only directory; its subtree never reaches the output
    ExcludedDirectory,
    /// File rendered through the template engine
    Template,
    /// File copied byte-for-byte (or a directory mirrored into the output)
    Passthrough,
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Classification::ExcludedDirectory => write!(f, "excluded directory"),
            Classification::Template => write!(f, "template"),
            Classification::Passthrough => write!(f, "passthrough"),
        }
    }
}
