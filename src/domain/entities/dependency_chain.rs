//! Dependency chain entity

use std::path::{Path, PathBuf};

/// A template together with every template it transitively includes or
/// inherits from.
///
/// Dependencies are ordered by discovery and never contain the template
/// itself; cycles are rejected before a chain is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyChain {
    template: PathBuf,
    dependencies: Vec<PathBuf>,
}

impl DependencyChain {
    pub fn new(template: impl Into<PathBuf>, dependencies: Vec<PathBuf>) -> Self {
        Self {
            template: template.into(),
            dependencies,
        }
    }

    /// Chain for a template with no includes
    pub fn standalone(template: impl Into<PathBuf>) -> Self {
        Self::new(template, Vec::new())
    }

    pub fn template(&self) -> &Path {
        &self.template
    }

    pub fn dependencies(&self) -> &[PathBuf] {
        &self.dependencies
    }

    /// The template followed by its dependencies
    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        std::iter::once(self.template.as_path()).chain(self.dependencies.iter().map(PathBuf::as_path))
    }

    /// Number of dependencies (excluding the template itself)
    pub fn len(&self) -> usize {
        self.dependencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dependencies.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iter_yields_template_first() {
        let chain = DependencyChain::new(
            "/site/index.html.tera",
            vec![PathBuf::from("/site/_layouts.tera/base.html")],
        );
        let all: Vec<_> = chain.iter().collect();
        assert_eq!(all[0], Path::new("/site/index.html.tera"));
        assert_eq!(all[1], Path::new("/site/_layouts.tera/base.html"));
        assert_eq!(chain.len(), 1);
    }

    #[test]
    fn standalone_chain_is_empty() {
        let chain = DependencyChain::standalone("/site/a.tera");
        assert!(chain.is_empty());
        assert_eq!(chain.iter().count(), 1);
    }
}
