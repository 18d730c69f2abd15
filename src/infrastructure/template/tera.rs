//! Tera-backed template engine
//!
//! Template names are paths relative to the source root with forward
//! slashes, so `{% extends "_layouts.tera/base.html" %}` refers to
//! `<source>/_layouts.tera/base.html` from any directory.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;
use tera::{Context, Tera};

use crate::domain::entities::{normalize_manifest_path, DependencyChain};
use crate::domain::ports::{RenderContext, TemplateEngine, TemplateError};

/// `{% extends "x" %}`, `{% include "x" %}`, `{% import "x" as m %}`
fn dependency_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r#"\{%-?\s*(?:extends|include|import)\s+["']([^"']+)["']"#)
            .expect("dependency pattern is valid")
    })
}

/// `{# ... #}` comments and `{% raw %}...{% endraw %}` blocks
fn inert_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?s)\{#.*?#\}|\{%-?\s*raw\s*-?%\}.*?\{%-?\s*endraw\s*-?%\}")
            .expect("inert pattern is valid")
    })
}

/// Renders templates with Tera
#[derive(Debug, Clone)]
pub struct TeraEngine {
    root: PathBuf,
}

impl TeraEngine {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Name under which a file is registered with Tera
    pub fn template_name(&self, path: &Path) -> String {
        match path.strip_prefix(&self.root) {
            Ok(relative) => normalize_manifest_path(relative),
            Err(_) => normalize_manifest_path(path),
        }
    }

    /// Path a template name refers to
    pub fn resolve_name(&self, name: &str) -> PathBuf {
        self.root.join(name.trim_start_matches('/'))
    }
}

/// Names referenced by extends/include/import declarations, in source order.
///
/// Declarations inside comments and raw blocks are not references.
pub fn referenced_names(source: &str) -> Vec<String> {
    let live = inert_pattern().replace_all(source, "");
    dependency_pattern()
        .captures_iter(&live)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

impl TemplateEngine for TeraEngine {
    fn dependencies(&self, template: &Path) -> std::io::Result<Vec<PathBuf>> {
        let source = match std::fs::read_to_string(template) {
            Ok(source) => source,
            // Unreadable text fails later, in render, for this template only
            Err(e)
                if matches!(
                    e.kind(),
                    std::io::ErrorKind::NotFound | std::io::ErrorKind::InvalidData
                ) =>
            {
                return Ok(Vec::new())
            }
            Err(e) => return Err(e),
        };

        let mut deps: Vec<PathBuf> = Vec::new();
        for name in referenced_names(&source) {
            let path = self.resolve_name(&name);
            if !deps.contains(&path) {
                deps.push(path);
            }
        }
        Ok(deps)
    }

    fn render(
        &self,
        chain: &DependencyChain,
        context: RenderContext<'_>,
    ) -> Result<String, TemplateError> {
        // A fresh instance per render: one broken template cannot affect others
        let mut tera = Tera::default();
        tera.autoescape_on(Vec::new());

        let mut sources = Vec::new();
        for path in chain.iter() {
            match std::fs::read_to_string(path) {
                Ok(source) => {
                    let name = self.template_name(path);
                    // Root-relative references (`/_layouts/base.html`) name the same file
                    sources.push((format!("/{name}"), source.clone()));
                    sources.push((name, source));
                }
                // Missing includes are reported by Tera when referenced
                Err(e) if e.kind() == std::io::ErrorKind::NotFound && path != chain.template() => {}
                Err(e) => {
                    return Err(TemplateError {
                        message: format!("cannot read {}", path.display()),
                        causes: vec![e.to_string()],
                    })
                }
            }
        }
        tera.add_raw_templates(sources)
            .map_err(|e| TemplateError::from_error(&e))?;

        let mut ctx = Context::new();
        ctx.insert("site", context.site);
        ctx.insert("page", context.page);

        tera.render(&self.template_name(chain.template()), &ctx)
            .map_err(|e| TemplateError::from_error(&e))
    }
}
