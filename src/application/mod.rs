//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `RenderEngine` - Plans and runs an incremental render, cleans prior output
//! - `CleanUseCase` - Removes outputs recorded in a manifest
//! - `WatchUseCase` - Re-runs the render engine on source changes

pub mod clean;
pub mod render;
pub mod watch;

pub use clean::{CleanOptions, CleanResult, CleanUseCase, SkipReason, SkippedFile};
pub use render::{
    render_error_page, EntryAction, EntryOutcome, RenderEngine, RenderOptions, RenderReport,
};
pub use watch::{
    content_hash, WatchEvent, WatchOptions, WatchUseCase, WatcherState, DEBOUNCE_MS,
    STARTUP_COOLDOWN_MS,
};
