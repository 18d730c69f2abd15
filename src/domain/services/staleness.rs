//! Staleness tracking
//!
//! An output is stale when it is missing or older than the newest input in
//! its template's dependency chain. Modification times and per-template
//! verdicts are cached for one run only.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use tracing::debug;

use crate::domain::entities::DependencyChain;
use crate::domain::ports::FileSystem;

/// Decides whether outputs need to be regenerated
pub struct StalenessTracker<'a, F: FileSystem + ?Sized> {
    fs: &'a F,
    ignore_mtime: bool,
    mtimes: HashMap<PathBuf, Option<SystemTime>>,
    records: HashMap<PathBuf, bool>,
}

impl<'a, F: FileSystem + ?Sized> StalenessTracker<'a, F> {
    pub fn new(fs: &'a F, ignore_mtime: bool) -> Self {
        Self {
            fs,
            ignore_mtime,
            mtimes: HashMap::new(),
            records: HashMap::new(),
        }
    }

    /// Is the output of this template chain out of date?
    pub fn is_stale(&mut self, chain: &DependencyChain, output: &Path) -> bool {
        if self.ignore_mtime {
            return true;
        }
        if let Some(&stale) = self.records.get(chain.template()) {
            return stale;
        }

        let newest_input = self.newest(chain.iter());
        let stale = self.compare(output, newest_input);
        debug!(
            template = %chain.template().display(),
            dependencies = chain.len(),
            stale,
            "staleness"
        );
        self.records.insert(chain.template().to_path_buf(), stale);
        stale
    }

    /// Is a passthrough copy out of date?
    pub fn is_file_stale(&mut self, source: &Path, output: &Path) -> bool {
        if self.ignore_mtime {
            return true;
        }
        let newest_input = self.mtime(source);
        self.compare(output, newest_input)
    }

    /// Newest modification time across a set of inputs; absent inputs are ignored
    pub fn newest<'p>(&mut self, inputs: impl Iterator<Item = &'p Path>) -> Option<SystemTime> {
        inputs.filter_map(|p| self.mtime(p)).max()
    }

    fn compare(&self, output: &Path, newest_input: Option<SystemTime>) -> bool {
        // Output mtime is read fresh: it changes during the run
        match (self.fs.modified(output), newest_input) {
            (None, _) => true,
            (Some(_), None) => false,
            (Some(out), Some(input)) => out < input,
        }
    }

    fn mtime(&mut self, path: &Path) -> Option<SystemTime> {
        if let Some(cached) = self.mtimes.get(path) {
            return *cached;
        }
        let mtime = self.fs.modified(path);
        self.mtimes.insert(path.to_path_buf(), mtime);
        mtime
    }
}
