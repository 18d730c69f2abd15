//! Render command UI views

use std::path::Path;

use pageit::application::{EntryAction, EntryOutcome, RenderReport};

use crate::ui::blocks::header::CommandHeader;
use crate::ui::blocks::summary::ResultSummary;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn render_render_header(
    source: &Path,
    output: &Path,
    config: Option<&Path>,
    environment: &str,
    dry_run: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let title = if dry_run {
        "Pageit Render (Dry Run)"
    } else {
        "Pageit Render"
    };
    let mut header = CommandHeader::new(Icon::Render, title);
    header.add("Source", source.display().to_string());
    header.add("Output", output.display().to_string());
    if let Some(config) = config {
        header.add("Config", config.display().to_string());
    }
    header.add("Environment", environment);
    header.render(supports_color, supports_unicode)
}

/// Should this outcome be listed at the given verbosity?
pub fn is_listed(outcome: &EntryOutcome, verbose: u8) -> bool {
    match outcome.action {
        EntryAction::Fresh | EntryAction::SkippedDirectory => verbose > 0,
        _ => true,
    }
}

pub fn render_entry(outcome: &EntryOutcome, supports_color: bool, supports_unicode: bool) -> String {
    let icon = match outcome.action {
        EntryAction::Rendered => Icon::Render,
        EntryAction::Copied => Icon::Copy,
        EntryAction::Fresh | EntryAction::SkippedDirectory => Icon::Fresh,
        EntryAction::ErrorPage { .. } => Icon::Error,
    }
    .colored(supports_color, supports_unicode);

    let label = format!("{:<6}", outcome.action.label());
    let label = match outcome.action {
        EntryAction::ErrorPage { .. } => ColoredText::error(label).render(supports_color),
        EntryAction::Fresh | EntryAction::SkippedDirectory => {
            ColoredText::dim(label).render(supports_color)
        }
        _ => label,
    };

    let mut line = format!("  {} {} {}", icon, label, outcome.source.display());
    if let Some(output) = &outcome.output {
        if output != &outcome.source {
            line.push_str(&format!(
                " {} {}",
                Icon::Arrow.colored(supports_color, supports_unicode),
                output.display()
            ));
        }
    }
    if let EntryAction::ErrorPage { message } = &outcome.action {
        let first = message.lines().next().unwrap_or_default();
        line.push_str(&format!(
            "\n      {}",
            ColoredText::dim(first).render(supports_color)
        ));
    }
    line.push('\n');
    line
}

pub fn render_render_result(
    report: &RenderReport,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let title = match (report.dry_run, report.is_success()) {
        (true, _) => "Dry Run Complete",
        (false, true) => "Render Complete",
        (false, false) => "Render Finished With Errors",
    };
    let mut summary = if report.is_success() {
        ResultSummary::success(title)
    } else {
        ResultSummary::partial(title)
    };

    summary.add_stat("rendered", report.rendered());
    summary.add_stat("copied", report.copied());
    summary.add_stat("fresh", report.fresh());
    if report.errors() > 0 {
        summary.add_stat("errors", report.errors());
        for failure in report.failures() {
            summary.add_warning(format!(
                "{}: error page written",
                failure.source.display()
            ));
        }
    }

    summary.render(supports_color, supports_unicode)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(action: EntryAction) -> EntryOutcome {
        EntryOutcome::new(
            Path::new("index.html.tera"),
            Some(Path::new("index.html")),
            action,
        )
    }

    #[test]
    fn header_shows_dry_run_and_environment() {
        let rendered = render_render_header(
            Path::new("site"),
            Path::new("site/output"),
            Some(Path::new("site/pageit.yml")),
            "ci",
            true,
            false,
            false,
        );
        assert!(rendered.contains("Pageit Render (Dry Run)"));
        assert!(rendered.contains("Config: site/pageit.yml"));
        assert!(rendered.contains("Environment: ci"));
    }

    #[test]
    fn entry_shows_source_and_output() {
        let line = render_entry(&outcome(EntryAction::Rendered), false, false);
        assert_eq!(line, "  [R] render index.html.tera [>] index.html\n");
    }

    #[test]
    fn error_entry_includes_first_message_line() {
        let line = render_entry(
            &outcome(EntryAction::ErrorPage {
                message: "Variable `title` not found\nmore".to_string(),
            }),
            false,
            false,
        );
        assert!(line.contains("[FAIL] error"));
        assert!(line.contains("Variable `title` not found"));
        assert!(!line.contains("more"));
    }

    #[test]
    fn fresh_entries_are_listed_only_when_verbose() {
        let fresh = outcome(EntryAction::Fresh);
        assert!(!is_listed(&fresh, 0));
        assert!(is_listed(&fresh, 1));
        assert!(is_listed(&outcome(EntryAction::Copied), 0));
    }

    #[test]
    fn result_counts_actions() {
        let report = RenderReport {
            entries: vec![
                outcome(EntryAction::Rendered),
                outcome(EntryAction::Fresh),
                outcome(EntryAction::ErrorPage {
                    message: "boom".to_string(),
                }),
            ],
            ..RenderReport::default()
        };
        let rendered = render_render_result(&report, false, false);
        assert!(rendered.contains("Render Finished With Errors"));
        assert!(rendered.contains("1 rendered, 0 copied, 1 fresh, 1 errors"));
        assert!(rendered.contains("index.html.tera: error page written"));
    }
}
