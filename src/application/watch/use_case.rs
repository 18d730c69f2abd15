//! Watch Use Case implementation

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::channel;
use std::sync::Arc;
use std::time::{Duration, Instant};

use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
use sha2::{Digest, Sha256};
use tracing::debug;

use crate::application::render::RenderReport;
use crate::error::{PageitError, PageitResult};

use super::event::{WatchEvent, WatchOptions, WatcherState, STARTUP_COOLDOWN_MS};

/// SHA-256 of file content, hex encoded
pub fn content_hash(content: &[u8]) -> String {
    format!("{:x}", Sha256::digest(content))
}

/// Watch Use Case
///
/// Blocks the calling thread; run it on a dedicated thread (or a blocking
/// task) when a server runs alongside.
pub struct WatchUseCase {
    options: WatchOptions,
}

impl WatchUseCase {
    pub fn new(options: WatchOptions) -> Self {
        let options = WatchOptions {
            source: canonical_or_self(&options.source),
            ignored: options.ignored.iter().map(|p| canonical_or_self(p)).collect(),
        };
        Self { options }
    }

    pub fn options(&self) -> &WatchOptions {
        &self.options
    }

    /// Watch until `running` is cleared.
    ///
    /// `on_change` receives the changed paths after each debounce window and
    /// performs the render. Its errors are reported as events; the loop keeps
    /// going. Only failing to set up the watcher is fatal.
    pub fn start<R, E>(&self, running: Arc<AtomicBool>, mut on_change: R, on_event: E) -> PageitResult<()>
    where
        R: FnMut(&[PathBuf]) -> PageitResult<RenderReport>,
        E: Fn(WatchEvent),
    {
        let source = &self.options.source;
        let (tx, rx) = channel();

        let mut watcher = RecommendedWatcher::new(
            move |res: Result<Event, notify::Error>| {
                if let Ok(event) = res {
                    for path in event.paths {
                        let _ = tx.send(path);
                    }
                }
            },
            Config::default(),
        )
        .map_err(|e| PageitError::watch(source, e))?;

        watcher
            .watch(source, RecursiveMode::Recursive)
            .map_err(|e| PageitError::watch(source, e))?;

        on_event(WatchEvent::WatchStarted {
            source: source.display().to_string(),
        });

        let mut content_hashes = self.snapshot_hashes();
        let mut state = WatcherState::new();

        // notify sometimes reports existing files right after registration
        let cooldown_end = Instant::now() + Duration::from_millis(STARTUP_COOLDOWN_MS);
        while Instant::now() < cooldown_end {
            let _ = rx.recv_timeout(Duration::from_millis(50));
        }

        while running.load(Ordering::SeqCst) {
            if let Ok(path) = rx.recv_timeout(Duration::from_millis(50)) {
                if self.is_relevant_change(&path, &mut content_hashes) {
                    state.add_change(path);
                }
            }

            if state.should_render() {
                let changes = state.take_changes();
                for path in &changes {
                    on_event(WatchEvent::FileChanged {
                        path: path.display().to_string(),
                    });
                }

                on_event(WatchEvent::RenderStarted);
                match on_change(&changes) {
                    Ok(report) => on_event(WatchEvent::RenderComplete {
                        rendered: report.rendered(),
                        copied: report.copied(),
                        fresh: report.fresh(),
                        errors: report.errors(),
                    }),
                    Err(e) => on_event(WatchEvent::Error {
                        message: e.to_string(),
                    }),
                }
            }
        }

        on_event(WatchEvent::Shutdown);
        Ok(())
    }

    /// Did this path really change? Updates the hash record as a side effect.
    fn is_relevant_change(&self, path: &Path, hashes: &mut HashMap<PathBuf, String>) -> bool {
        if self.options.is_ignored(path) {
            return false;
        }
        if path.is_dir() {
            return false;
        }

        match std::fs::read(path) {
            Ok(content) => {
                let hash = content_hash(&content);
                if hashes.get(path) == Some(&hash) {
                    debug!(path = %path.display(), "content unchanged");
                    return false;
                }
                hashes.insert(path.to_path_buf(), hash);
                true
            }
            // Deleted (or renamed away): relevant only if we knew it
            Err(_) => hashes.remove(path).is_some(),
        }
    }

    /// Hashes of every file currently under the source, outside ignored dirs
    fn snapshot_hashes(&self) -> HashMap<PathBuf, String> {
        let mut hashes = HashMap::new();
        let mut stack = vec![self.options.source.clone()];
        while let Some(dir) = stack.pop() {
            let Ok(entries) = std::fs::read_dir(&dir) else {
                continue;
            };
            for entry in entries.flatten() {
                let path = entry.path();
                if self.options.is_ignored(&path) {
                    continue;
                }
                let linked = entry.file_type().is_ok_and(|t| t.is_symlink());
                if path.is_dir() {
                    if !linked {
                        stack.push(path);
                    }
                } else if let Ok(content) = std::fs::read(&path) {
                    hashes.insert(path, content_hash(&content));
                }
            }
        }
        hashes
    }
}

fn canonical_or_self(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
}
