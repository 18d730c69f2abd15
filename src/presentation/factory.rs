//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::path::Path;

use crate::application::{RenderEngine, RenderOptions};
use crate::infrastructure::{LocalFs, TeraEngine, TomlManifestRepository};

/// Type alias for the render engine with all concrete dependencies
pub type ConcreteRenderEngine = RenderEngine<TeraEngine, LocalFs, TomlManifestRepository>;

/// Create a render engine for `source` writing into `output`
pub fn create_render_engine(
    source: &Path,
    output: &Path,
    options: RenderOptions,
) -> ConcreteRenderEngine {
    RenderEngine::new(
        source,
        output,
        TeraEngine::new(source),
        LocalFs::new(),
        TomlManifestRepository::new(),
        options,
    )
}
