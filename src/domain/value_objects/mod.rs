//! Domain Value Objects
//!
//! Immutable value types that describe how source entries are recognised.

mod classification;
mod marker;

pub use classification::{Classification, EntryKind};
pub use marker::{TemplateMarker, DEFAULT_EXTENSION};
