//! Domain Layer
//!
//! The render rules of Pageit, kept apart from concrete I/O.
//!
//! ## Structure
//!
//! - `entities/` - Source entries, dependency chains, environments, manifests
//! - `value_objects/` - Template marker and entry classification
//! - `services/` - Path classification, dependency resolution, staleness
//! - `ports/` - Interfaces implemented by the infrastructure layer
//!
//! All file access goes through the `FileSystem` and `TemplateEngine` ports,
//! so services can be exercised against temporary directories in tests.

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
