//! Dependency chain resolution
//!
//! Walks the include/inheritance graph reported by the template engine and
//! produces the transitive closure for one template. Direct dependencies are
//! cached for the lifetime of the resolver (one render run).

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::entities::DependencyChain;
use crate::domain::ports::{FsError, TemplateEngine};
use crate::error::{PageitError, PageitResult};

/// Resolves `DependencyChain`s, rejecting cycles
pub struct DependencyResolver<'a, E: TemplateEngine + ?Sized> {
    engine: &'a E,
    direct: HashMap<PathBuf, Vec<PathBuf>>,
}

impl<'a, E: TemplateEngine + ?Sized> DependencyResolver<'a, E> {
    pub fn new(engine: &'a E) -> Self {
        Self {
            engine,
            direct: HashMap::new(),
        }
    }

    /// Transitive dependencies of `template` in depth-first discovery order.
    pub fn resolve(&mut self, template: &Path) -> PageitResult<DependencyChain> {
        let mut stack = Vec::new();
        let mut visited = HashSet::new();
        let mut order = Vec::new();
        self.visit(template, &mut stack, &mut visited, &mut order)?;

        // First entry is the template itself
        order.remove(0);
        debug!(
            template = %template.display(),
            dependencies = order.len(),
            "resolved dependency chain"
        );
        Ok(DependencyChain::new(template, order))
    }

    fn visit(
        &mut self,
        path: &Path,
        stack: &mut Vec<PathBuf>,
        visited: &mut HashSet<PathBuf>,
        order: &mut Vec<PathBuf>,
    ) -> PageitResult<()> {
        if let Some(start) = stack.iter().position(|p| p == path) {
            let mut chain: Vec<PathBuf> = stack[start..].to_vec();
            chain.push(path.to_path_buf());
            return Err(PageitError::DependencyCycle { chain });
        }
        if !visited.insert(path.to_path_buf()) {
            return Ok(());
        }
        order.push(path.to_path_buf());

        let direct = self.direct_dependencies(path)?;
        stack.push(path.to_path_buf());
        for dep in &direct {
            self.visit(dep, stack, visited, order)?;
        }
        stack.pop();
        Ok(())
    }

    fn direct_dependencies(&mut self, path: &Path) -> PageitResult<Vec<PathBuf>> {
        if let Some(cached) = self.direct.get(path) {
            return Ok(cached.clone());
        }
        let deps = self
            .engine
            .dependencies(path)
            .map_err(|e| FsError::from_io(path, e))?;
        for dep in &deps {
            debug!(template = %path.display(), depends_on = %dep.display(), "dependency");
        }
        self.direct.insert(path.to_path_buf(), deps.clone());
        Ok(deps)
    }
}
