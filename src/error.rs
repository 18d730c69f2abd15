//! Error types for Pageit
//!
//! Uses `thiserror` for library errors. The binary wraps these in `anyhow`
//! at the command boundary.

use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::domain::ports::{FsError, ManifestError};

/// Result type alias for Pageit operations
pub type PageitResult<T> = Result<T, PageitError>;

/// Main error type for Pageit operations
#[derive(Error, Debug)]
pub enum PageitError {
    /// `--env` names an environment the configuration does not define
    #[error("environment '{name}' not found in {config}")]
    EnvironmentNotFound { name: String, config: String },

    /// Two source entries map to the same output path
    #[error("output collision: {first} and {second} both produce {output}")]
    OutputCollision {
        first: PathBuf,
        second: PathBuf,
        output: PathBuf,
    },

    /// Stripping the template marker leaves nothing to name the output
    #[error("template {template} has an empty output name once the marker is removed")]
    EmptyOutputName { template: PathBuf },

    /// A template includes or inherits from itself
    #[error("dependency cycle: {}", display_chain(.chain))]
    DependencyCycle { chain: Vec<PathBuf> },

    /// A template failed to render and error pages are disabled
    #[error("cannot render {template}: {message}")]
    Render { template: PathBuf, message: String },

    /// File system failure while reading sources or writing outputs
    #[error(transparent)]
    Fs(#[from] FsError),

    /// Persisted manifest could not be read or written
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    /// Configuration document is not valid YAML
    #[error("invalid configuration in {file}: {source}")]
    Yaml {
        file: PathBuf,
        #[source]
        source: serde_yaml_ng::Error,
    },

    /// Explicitly requested configuration file does not exist
    #[error("configuration file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Source directory does not exist
    #[error("source directory not found: {path}")]
    SourceNotFound { path: PathBuf },

    /// File watcher could not be started
    #[error("cannot watch {path}: {message}")]
    Watch { path: PathBuf, message: String },

    /// Static server could not be started
    #[error("cannot serve {root} on port {port}: {message}")]
    Serve {
        root: PathBuf,
        port: u16,
        message: String,
    },
}

impl PageitError {
    /// Configuration errors abort before any traversal takes place.
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            PageitError::EnvironmentNotFound { .. }
                | PageitError::OutputCollision { .. }
                | PageitError::EmptyOutputName { .. }
                | PageitError::DependencyCycle { .. }
                | PageitError::Yaml { .. }
                | PageitError::ConfigNotFound { .. }
        )
    }

    pub(crate) fn watch(path: &Path, err: impl std::fmt::Display) -> Self {
        PageitError::Watch {
            path: path.to_path_buf(),
            message: err.to_string(),
        }
    }
}

fn display_chain(chain: &[PathBuf]) -> String {
    chain
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(" -> ")
}
