//! Clean Use Case
//!
//! Deletes every manifest entry that still exists under the output root.

use std::path::Path;

use tracing::{debug, info};

use crate::domain::entities::RenderManifest;
use crate::domain::ports::FileSystem;

use super::options::CleanOptions;
use super::result::{CleanResult, SkipReason};

/// Clean use case - removes outputs recorded in a manifest
pub struct CleanUseCase<FS>
where
    FS: FileSystem,
{
    fs: FS,
}

impl<FS> CleanUseCase<FS>
where
    FS: FileSystem,
{
    pub fn new(fs: FS) -> Self {
        Self { fs }
    }

    /// Delete (or, in a dry run, list) the outputs of `manifest`.
    ///
    /// Deletion failures are collected; the remaining entries are still
    /// processed.
    pub fn execute(
        &self,
        output_root: &Path,
        manifest: &RenderManifest,
        options: &CleanOptions,
    ) -> CleanResult {
        let mut result = CleanResult {
            dry_run: options.dry_run,
            ..CleanResult::default()
        };

        for relative in manifest.outputs() {
            if !RenderManifest::is_contained(relative) {
                debug!(path = %relative.display(), "refusing to clean path outside output root");
                result.add_skipped(relative.to_path_buf(), SkipReason::OutsideOutput);
                continue;
            }

            let path = output_root.join(relative);
            if !self.fs.exists(&path) {
                result.add_skipped(relative.to_path_buf(), SkipReason::Missing);
                continue;
            }
            if self.fs.is_dir(&path) {
                result.add_skipped(relative.to_path_buf(), SkipReason::Directory);
                continue;
            }

            if !options.dry_run {
                if let Err(e) = self.fs.remove(&path) {
                    result.add_error(format!("Failed to delete {}: {}", path.display(), e));
                    continue;
                }
                info!(path = %relative.display(), "deleted");
            }
            result.add_deleted(relative.to_path_buf());
        }

        result
    }
}
