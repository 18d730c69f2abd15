//! YAML environment documents
//!
//! ```yaml
//! default:
//!   title: My Site
//! ci:
//!   base_url: https://ci.example.com
//! ```
//!
//! Each top-level key names an environment; its mapping becomes the `site`
//! variable once merged over `default`.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use crate::domain::entities::{Environment, EnvironmentSet};
use crate::domain::ports::FsError;
use crate::error::{PageitError, PageitResult};

/// Configuration file looked up when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "pageit.yml";

type RawDocument = BTreeMap<String, Option<BTreeMap<String, Value>>>;

/// Parse a configuration document. `file` is used for error messages and
/// recorded as the set's origin.
pub fn parse_environments(content: &str, file: &Path) -> PageitResult<EnvironmentSet> {
    if is_blank(content) {
        return Ok(EnvironmentSet::new(Some(file.to_path_buf()), BTreeMap::new()));
    }
    let raw: Option<RawDocument> =
        serde_yaml_ng::from_str(content).map_err(|source| PageitError::Yaml {
            file: file.to_path_buf(),
            source,
        })?;

    let environments = raw
        .unwrap_or_default()
        .into_iter()
        .map(|(name, values)| {
            (
                name,
                Environment::from_values(values.unwrap_or_default()),
            )
        })
        .collect();

    Ok(EnvironmentSet::new(Some(file.to_path_buf()), environments))
}

/// Nothing but whitespace, comments, or document markers
fn is_blank(content: &str) -> bool {
    content.lines().map(str::trim).all(|line| {
        line.is_empty() || line.starts_with('#') || line == "---" || line == "..."
    })
}

/// Load environments from `path`, or an empty set when there is no file.
pub fn load_environments(path: Option<&Path>) -> PageitResult<EnvironmentSet> {
    let Some(path) = path else {
        debug!("no configuration file, using empty default environment");
        return Ok(EnvironmentSet::empty());
    };
    let content = fs::read_to_string(path).map_err(|e| FsError::from_io(path, e))?;
    let set = parse_environments(&content, path)?;
    debug!(
        config = %path.display(),
        environments = set.names().count(),
        "loaded configuration"
    );
    Ok(set)
}

/// Places searched for `pageit.yml`, most specific first:
/// working directory, source directory, next to the executable, user config dir.
pub fn config_candidates(source_root: &Path) -> Vec<PathBuf> {
    let mut candidates = Vec::new();
    if let Ok(cwd) = std::env::current_dir() {
        candidates.push(cwd.join(DEFAULT_CONFIG_FILE));
    }
    candidates.push(source_root.join(DEFAULT_CONFIG_FILE));
    if let Some(exe_dir) = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
    {
        candidates.push(exe_dir.join(DEFAULT_CONFIG_FILE));
    }
    if let Some(config_dir) = dirs::config_dir() {
        candidates.push(config_dir.join("pageit").join(DEFAULT_CONFIG_FILE));
    }
    candidates.dedup();
    candidates
}

/// Find the configuration file to use.
///
/// An explicit path must exist. Otherwise the first existing candidate
/// wins; finding none is not an error.
pub fn discover_config(explicit: Option<&Path>, source_root: &Path) -> PageitResult<Option<PathBuf>> {
    if let Some(path) = explicit {
        if !path.is_file() {
            return Err(PageitError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }
        return Ok(Some(path.to_path_buf()));
    }
    Ok(config_candidates(source_root)
        .into_iter()
        .find(|candidate| candidate.is_file()))
}
