//! Render Use Case
//!
//! The incremental render engine: plan the tree, copy passthrough files,
//! render stale templates, and record what the output root now holds.

mod error_page;
mod options;
mod result;
mod use_case;

pub use error_page::render_error_page;
pub use options::RenderOptions;
pub use result::{EntryAction, EntryOutcome, RenderReport};
pub use use_case::RenderEngine;
