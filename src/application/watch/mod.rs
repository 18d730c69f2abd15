//! Watch Use Case
//!
//! Continuous "edit, rebuild, view" loop:
//! - File system monitoring (via `notify` crate)
//! - Debouncing (100ms default)
//! - Content-hash filtering of editor save noise
//! - Re-running the render engine through a caller-supplied callback
//!
//! Changes under the output root (and tmp dir) are ignored so the loop
//! never triggers itself.

mod event;
mod use_case;


pub use event::{WatchEvent, WatchOptions, WatcherState, DEBOUNCE_MS, STARTUP_COOLDOWN_MS};
pub use use_case::{content_hash, WatchUseCase};
