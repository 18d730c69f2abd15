//! Template marker value object
//!
//! A marker is either a suffix (`index.html.tera`) or a prefix
//! (`tera.index.html`). One convention is active per run.

use std::fmt;

/// Default suffix used to recognise templates
pub const DEFAULT_EXTENSION: &str = ".tera";

/// Marker convention used to recognise templates and template-only directories
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TemplateMarker {
    /// Names ending with the given string (e.g. `.tera`)
    Suffix(String),
    /// Names starting with the given string (e.g. `tera.`)
    Prefix(String),
}

impl TemplateMarker {
    pub fn suffix(ext: impl Into<String>) -> Self {
        TemplateMarker::Suffix(ext.into())
    }

    pub fn prefix(prefix: impl Into<String>) -> Self {
        TemplateMarker::Prefix(prefix.into())
    }

    /// The raw marker string
    pub fn as_str(&self) -> &str {
        match self {
            TemplateMarker::Suffix(s) | TemplateMarker::Prefix(s) => s,
        }
    }

    /// Check whether a file or directory name carries the marker.
    ///
    /// An empty marker never matches; otherwise every name would be a template.
    pub fn matches(&self, name: &str) -> bool {
        match self {
            TemplateMarker::Suffix(ext) => !ext.is_empty() && name.ends_with(ext.as_str()),
            TemplateMarker::Prefix(prefix) => {
                !prefix.is_empty() && name.starts_with(prefix.as_str())
            }
        }
    }

    /// Remove the marker from a name.
    ///
    /// Returns `None` when the name does not carry the marker.
    ///
    /// ```
    /// use pageit::domain::value_objects::TemplateMarker;
    ///
    /// let marker = TemplateMarker::suffix(".tera");
    /// assert_eq!(marker.strip("index.html.tera"), Some("index.html"));
    /// assert_eq!(marker.strip("style.css"), None);
    /// ```
    pub fn strip<'a>(&self, name: &'a str) -> Option<&'a str> {
        if !self.matches(name) {
            return None;
        }
        match self {
            TemplateMarker::Suffix(ext) => name.strip_suffix(ext.as_str()),
            TemplateMarker::Prefix(prefix) => name.strip_prefix(prefix.as_str()),
        }
    }
}

impl Default for TemplateMarker {
    fn default() -> Self {
        TemplateMarker::Suffix(DEFAULT_EXTENSION.to_string())
    }
}

impl fmt::Display for TemplateMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateMarker::Suffix(ext) => write!(f, "*{}", ext),
            TemplateMarker::Prefix(prefix) => write!(f, "{}*", prefix),
        }
    }
}
