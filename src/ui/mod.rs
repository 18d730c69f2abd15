//! Terminal output for the pageit binary.
//!
//! Views return strings; commands decide where they go. In `--json` mode
//! commands emit NDJSON through `json` instead.

pub mod blocks;
pub mod context;
pub mod json;
pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod views;
