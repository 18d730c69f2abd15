//! Site environments
//!
//! A configuration document maps environment names to variable sets. The
//! `default` set is always the base; a named environment replaces its keys
//! one level deep.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value;

use crate::error::{PageitError, PageitResult};

/// Name of the base environment
pub const DEFAULT_ENVIRONMENT: &str = "default";

/// Resolved variables exposed to templates as `site`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Environment {
    values: BTreeMap<String, Value>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_values(values: BTreeMap<String, Value>) -> Self {
        Self { values }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn values(&self) -> &BTreeMap<String, Value> {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Shallow merge: every top-level key of `other` replaces ours.
    pub fn merged_with(&self, other: &Environment) -> Environment {
        let mut values = self.values.clone();
        for (key, value) in &other.values {
            values.insert(key.clone(), value.clone());
        }
        Environment { values }
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Environment {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

/// Every environment defined by a configuration document
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnvironmentSet {
    origin: Option<PathBuf>,
    environments: BTreeMap<String, Environment>,
}

impl EnvironmentSet {
    /// No configuration document; only `default` (empty) resolves
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new(origin: Option<PathBuf>, environments: BTreeMap<String, Environment>) -> Self {
        Self {
            origin,
            environments,
        }
    }

    /// File the environments were loaded from, if any
    pub fn origin(&self) -> Option<&Path> {
        self.origin.as_deref()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.environments.keys().map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.environments.contains_key(name)
    }

    /// Resolve the variables for `name`.
    ///
    /// A missing `default` entry is treated as empty. A missing named
    /// environment is a configuration error.
    pub fn resolve(&self, name: &str) -> PageitResult<Environment> {
        let base = self
            .environments
            .get(DEFAULT_ENVIRONMENT)
            .cloned()
            .unwrap_or_default();

        if name == DEFAULT_ENVIRONMENT {
            return Ok(base);
        }

        match self.environments.get(name) {
            Some(overrides) => Ok(base.merged_with(overrides)),
            None => Err(PageitError::EnvironmentNotFound {
                name: name.to_string(),
                config: self
                    .origin
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "configuration (no file loaded)".to_string()),
            }),
        }
    }
}
