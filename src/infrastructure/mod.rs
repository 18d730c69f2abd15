//! Infrastructure Layer
//!
//! Concrete implementations of domain ports and the outer adapters.
//!
//! ## Structure
//!
//! - `fs/` - Local file system with atomic writes
//! - `template/` - Tera template engine
//! - `repositories/` - TOML manifest persistence
//! - `config/` - YAML environment documents and config discovery
//! - `serve/` - Static HTTP server for the output root

pub mod config;
pub mod fs;
pub mod repositories;
pub mod serve;
pub mod template;

pub use fs::LocalFs;
pub use repositories::{TomlManifestRepository, MANIFEST_FILE};
pub use template::TeraEngine;
