//! TemplateEngine port - the templating capability
//!
//! The engine only needs two things from a template library: the immediate
//! includes/parents of a template, and a way to render it with variables.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::entities::{DependencyChain, Environment};

/// Describes the template being rendered; exposed to templates as `page`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageInfo {
    /// Template path relative to the source root
    pub path: String,
    /// Template file name
    pub name: String,
    /// Output path relative to the output root
    pub output: String,
}

/// Everything a single render call sees
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    /// Resolved environment, bound to `site`
    pub site: &'a Environment,
    /// Current page, bound to `page`
    pub page: &'a PageInfo,
}

/// A failure raised while rendering one template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateError {
    /// Top-level message
    pub message: String,
    /// Underlying causes, outermost first
    pub causes: Vec<String>,
}

impl TemplateError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            causes: Vec::new(),
        }
    }

    /// Build from an error and its `source()` chain
    pub fn from_error(err: &dyn std::error::Error) -> Self {
        let mut causes = Vec::new();
        let mut current = err.source();
        while let Some(cause) = current {
            causes.push(cause.to_string());
            current = cause.source();
        }
        Self {
            message: err.to_string(),
            causes,
        }
    }

    /// Message plus causes on one line
    pub fn detail(&self) -> String {
        std::iter::once(self.message.as_str())
            .chain(self.causes.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(": ")
    }
}

impl std::fmt::Display for TemplateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for TemplateError {}

/// Templating capability used by the render engine
pub trait TemplateEngine {
    /// Immediate dependencies (includes, parents, imports) of a template.
    ///
    /// Returns absolute paths. A template that does not exist has none.
    fn dependencies(&self, template: &Path) -> std::io::Result<Vec<PathBuf>>;

    /// Render a template whose dependency chain has already been resolved
    fn render(
        &self,
        chain: &DependencyChain,
        context: RenderContext<'_>,
    ) -> Result<String, TemplateError>;
}
