//! Pageit - incremental static site renderer
//!
//! Pageit walks a source directory, copies plain files into an output tree
//! and renders Tera templates in their place. Only outputs older than their
//! inputs (including layouts and includes) are regenerated.
//!
//! ## Architecture
//!
//! - `domain` - Classification, dependency chains, staleness and planning
//! - `application` - Render, clean and watch use cases
//! - `infrastructure` - Local file system, Tera, YAML config, TOML manifest, HTTP
//! - `presentation` - CLI definition and use case wiring

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{
    CleanResult, EntryAction, EntryOutcome, RenderEngine, RenderOptions, RenderReport,
    WatchEvent, WatchOptions, WatchUseCase,
};
pub use domain::entities::{Environment, EnvironmentSet, RenderManifest, DEFAULT_ENVIRONMENT};
pub use domain::value_objects::TemplateMarker;
pub use error::{PageitError, PageitResult};
