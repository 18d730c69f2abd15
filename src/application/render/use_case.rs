//! Render Use Case
//!
//! Orchestrates one incremental render:
//! 1. Plan the source tree (classification, collisions, dependency chains)
//! 2. Copy stale passthrough files
//! 3. Render stale templates, substituting an error page on failure
//! 4. Persist the manifest of produced outputs
//!
//! Every configuration error is raised by the planning step, before the
//! output root is touched.

use std::path::{Path, PathBuf};

use tracing::{debug, error, info, warn};

use crate::application::clean::{CleanOptions, CleanResult, CleanUseCase};
use crate::domain::entities::{
    normalize_manifest_path, DependencyChain, Environment, RenderManifest,
};
use crate::domain::ports::{
    FileSystem, ManifestRepository, PageInfo, RenderContext, TemplateEngine,
};
use crate::domain::services::{
    PathClassifier, PlannedAction, PlannedEntry, Planner, RenderPlan, StalenessTracker,
};
use crate::error::{PageitError, PageitResult};

use super::error_page::render_error_page;
use super::options::RenderOptions;
use super::result::{EntryAction, EntryOutcome, RenderReport};

/// The incremental render engine
///
/// Parameterized by its ports so tests can swap the template engine or
/// manifest storage. `run` may be called any number of times; each call
/// recomputes staleness from scratch.
pub struct RenderEngine<E, F, M>
where
    E: TemplateEngine,
    F: FileSystem,
    M: ManifestRepository,
{
    source_root: PathBuf,
    output_root: PathBuf,
    engine: E,
    fs: F,
    manifests: M,
    options: RenderOptions,
    classifier: PathClassifier,
}

impl<E, F, M> RenderEngine<E, F, M>
where
    E: TemplateEngine,
    F: FileSystem,
    M: ManifestRepository,
{
    pub fn new(
        source_root: impl Into<PathBuf>,
        output_root: impl Into<PathBuf>,
        engine: E,
        fs: F,
        manifests: M,
        options: RenderOptions,
    ) -> Self {
        let classifier = PathClassifier::new(options.marker.clone());
        Self {
            source_root: source_root.into(),
            output_root: output_root.into(),
            engine,
            fs,
            manifests,
            options,
            classifier,
        }
    }

    pub fn source_root(&self) -> &Path {
        &self.source_root
    }

    pub fn output_root(&self) -> &Path {
        &self.output_root
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Directories never traversed as sources: the output root and tmp dir
    pub fn excluded_paths(&self) -> Vec<PathBuf> {
        let mut excluded = vec![self.output_root.clone()];
        if let Some(tmp) = &self.options.tmp_dir {
            excluded.push(tmp.clone());
        }
        excluded
    }

    /// Classify the source tree and resolve every dependency chain
    pub fn plan(&self) -> PageitResult<RenderPlan> {
        if !self.fs.is_dir(&self.source_root) {
            return Err(PageitError::SourceNotFound {
                path: self.source_root.clone(),
            });
        }
        Planner::new(&self.fs, &self.engine, &self.classifier)
            .with_excluded(self.excluded_paths())
            .plan(&self.source_root)
    }

    /// Outputs the current source tree would produce
    pub fn planned_manifest(&self) -> PageitResult<RenderManifest> {
        Ok(self.plan()?.manifest())
    }

    /// Run a full render pass with `site` bound into every template.
    pub fn run(&self, site: &Environment) -> PageitResult<RenderReport> {
        let plan = self.plan()?;
        let previous = self.load_previous();

        let mut report = RenderReport {
            dry_run: self.options.dry_run,
            ..RenderReport::default()
        };
        let mut tracker = StalenessTracker::new(&self.fs, self.options.ignore_mtime);

        if !self.options.dry_run {
            self.fs.create_dir_all(&self.output_root)?;
        }

        for planned in &plan.entries {
            let outcome = match (&planned.action, planned.output.as_deref()) {
                (PlannedAction::SkipDirectory, _) => {
                    EntryOutcome::new(planned.source(), None, EntryAction::SkippedDirectory)
                }
                (PlannedAction::Directory, _) => continue,
                (PlannedAction::Copy, Some(output)) => {
                    let action = self.copy(planned.source(), output, &mut tracker)?;
                    report.manifest.record(output);
                    EntryOutcome::new(planned.source(), Some(output), action)
                }
                (PlannedAction::Render { chain }, Some(output)) => {
                    let forced = previous.as_ref().is_some_and(|m| m.is_failed(output));
                    let action = self.render(planned, chain, output, site, forced, &mut tracker)?;
                    if matches!(action, EntryAction::ErrorPage { .. }) {
                        report.manifest.record_failed(output);
                    } else {
                        report.manifest.record(output);
                    }
                    EntryOutcome::new(planned.source(), Some(output), action)
                }
                (_, None) => continue,
            };
            report.entries.push(outcome);
        }

        if !self.options.dry_run {
            let persisted = self.with_leftovers(&report.manifest, previous.as_ref());
            self.manifests.save(&persisted, &self.output_root)?;
        }

        info!(
            rendered = report.rendered(),
            copied = report.copied(),
            fresh = report.fresh(),
            errors = report.errors(),
            dry_run = self.options.dry_run,
            "render complete"
        );
        Ok(report)
    }

    /// Delete the outputs recorded in `manifest`
    pub fn clean(&self, manifest: &RenderManifest) -> CleanResult {
        let options = CleanOptions::new().with_dry_run(self.options.dry_run);
        CleanUseCase::new(&self.fs).execute(&self.output_root, manifest, &options)
    }

    /// Delete everything a previous run produced.
    ///
    /// Uses the persisted manifest when there is one, otherwise the outputs
    /// the current source tree would produce. The persisted manifest is only
    /// dropped once every deletion succeeded, so a failed clean can be retried.
    pub fn clean_previous(&self) -> PageitResult<CleanResult> {
        let manifest = match self.load_previous() {
            Some(manifest) => manifest,
            None => self.planned_manifest()?,
        };
        let result = self.clean(&manifest);
        if !self.options.dry_run && result.is_success() {
            self.manifests.remove(&self.output_root)?;
        }
        Ok(result)
    }

    fn load_previous(&self) -> Option<RenderManifest> {
        match self.manifests.load(&self.output_root) {
            Ok(manifest) => manifest,
            Err(e) => {
                warn!(output = %self.output_root.display(), error = %e, "ignoring unreadable manifest");
                None
            }
        }
    }

    /// This run's outputs plus earlier outputs still on disk, so a later
    /// clean also removes outputs whose source has since been deleted.
    fn with_leftovers(
        &self,
        current: &RenderManifest,
        previous: Option<&RenderManifest>,
    ) -> RenderManifest {
        let mut persisted = current.clone();
        for old in previous.into_iter().flat_map(RenderManifest::outputs) {
            if !current.contains(old)
                && RenderManifest::is_contained(old)
                && self.fs.exists(&self.output_root.join(old))
            {
                persisted.record(old);
            }
        }
        persisted
    }

    fn copy(
        &self,
        source: &Path,
        output: &Path,
        tracker: &mut StalenessTracker<'_, F>,
    ) -> PageitResult<EntryAction> {
        let src = self.source_root.join(source);
        let dest = self.output_root.join(output);

        if !tracker.is_file_stale(&src, &dest) {
            debug!(path = %source.display(), "fresh");
            return Ok(EntryAction::Fresh);
        }
        if !self.options.dry_run {
            let bytes = self.fs.read(&src)?;
            self.fs.write_atomic(&dest, &bytes)?;
        }
        info!(path = %source.display(), "copy");
        Ok(EntryAction::Copied)
    }

    fn render(
        &self,
        planned: &PlannedEntry,
        chain: &DependencyChain,
        output: &Path,
        site: &Environment,
        forced: bool,
        tracker: &mut StalenessTracker<'_, F>,
    ) -> PageitResult<EntryAction> {
        let source = planned.source();
        let dest = self.output_root.join(output);

        if !forced && !tracker.is_stale(chain, &dest) {
            debug!(path = %source.display(), "fresh");
            return Ok(EntryAction::Fresh);
        }
        if self.options.dry_run {
            info!(path = %source.display(), "render (dry run)");
            return Ok(EntryAction::Rendered);
        }

        let page = PageInfo {
            path: normalize_manifest_path(source),
            name: source
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
            output: normalize_manifest_path(output),
        };
        let context = RenderContext { site, page: &page };

        match self.engine.render(chain, context) {
            Ok(text) => {
                if let Some(tmp) = &self.options.tmp_dir {
                    self.fs.write_atomic(&tmp.join(output), text.as_bytes())?;
                }
                self.fs.write_atomic(&dest, text.as_bytes())?;
                info!(path = %source.display(), output = %output.display(), "render");
                Ok(EntryAction::Rendered)
            }
            Err(err) if self.options.no_error_page => {
                error!(path = %source.display(), error = %err.detail(), "render failed");
                Err(PageitError::Render {
                    template: source.to_path_buf(),
                    message: err.detail(),
                })
            }
            Err(err) => {
                warn!(path = %source.display(), error = %err.detail(), "render failed, writing error page");
                let html = render_error_page(source, &err);
                self.fs.write_atomic(&dest, html.as_bytes())?;
                Ok(EntryAction::ErrorPage {
                    message: err.detail(),
                })
            }
        }
    }
}
