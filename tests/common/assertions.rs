//! Assertion helpers for output trees.

use std::path::Path;

/// All files below `dir`, relative and sorted
pub fn list_all_files(dir: &Path) -> Vec<String> {
    let mut files = Vec::new();
    collect(dir, dir, &mut files);
    files.sort();
    files
}

fn collect(root: &Path, dir: &Path, files: &mut Vec<String>) {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect(root, &path, files);
        } else if let Ok(rel) = path.strip_prefix(root) {
            files.push(rel.to_string_lossy().replace('\\', "/"));
        }
    }
}

/// Assert that an output file exists, listing what does on failure.
#[macro_export]
macro_rules! assert_output {
    ($env:expr, $path:expr) => {
        let full_path = $env.output_path($path);
        assert!(
            full_path.exists(),
            "Expected output '{}', but it doesn't exist.\nOutputs found:\n  {}",
            $path,
            $crate::common::list_all_files(&$env.output_path("")).join("\n  ")
        );
    };
}

/// Assert that an output file does not exist.
#[macro_export]
macro_rules! assert_no_output {
    ($env:expr, $path:expr) => {
        let full_path = $env.output_path($path);
        assert!(
            !full_path.exists(),
            "Expected output '{}' to NOT exist, but it does.",
            $path
        );
    };
}
