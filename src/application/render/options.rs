//! Render options

use std::path::PathBuf;

use crate::domain::value_objects::TemplateMarker;

/// Immutable settings for one render engine
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// How templates and template-only directories are recognized
    pub marker: TemplateMarker,
    /// Record actions without touching the output root
    pub dry_run: bool,
    /// Treat every output as stale
    pub ignore_mtime: bool,
    /// Propagate render failures instead of writing an error page
    pub no_error_page: bool,
    /// Also write rendered template text under this directory
    pub tmp_dir: Option<PathBuf>,
}

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_marker(mut self, marker: TemplateMarker) -> Self {
        self.marker = marker;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_ignore_mtime(mut self, ignore_mtime: bool) -> Self {
        self.ignore_mtime = ignore_mtime;
        self
    }

    pub fn with_no_error_page(mut self, no_error_page: bool) -> Self {
        self.no_error_page = no_error_page;
        self
    }

    pub fn with_tmp_dir(mut self, tmp_dir: Option<PathBuf>) -> Self {
        self.tmp_dir = tmp_dir;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_fields() {
        let options = RenderOptions::new()
            .with_marker(TemplateMarker::prefix("tera."))
            .with_dry_run(true)
            .with_ignore_mtime(true)
            .with_no_error_page(true)
            .with_tmp_dir(Some(PathBuf::from("/tmp/pageit")));

        assert_eq!(options.marker, TemplateMarker::prefix("tera."));
        assert!(options.dry_run);
        assert!(options.ignore_mtime);
        assert!(options.no_error_page);
        assert_eq!(options.tmp_dir, Some(PathBuf::from("/tmp/pageit")));
    }

    #[test]
    fn defaults_render_everything_with_error_pages() {
        let options = RenderOptions::default();
        assert_eq!(options.marker, TemplateMarker::default());
        assert!(!options.dry_run);
        assert!(!options.no_error_page);
    }
}
