//! Clean command UI views

use std::path::Path;

use pageit::application::CleanResult;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::blocks::summary::ResultSummary;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn render_clean_header(
    output: &Path,
    dry_run: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let title = if dry_run {
        "Pageit Clean (Dry Run)"
    } else {
        "Pageit Clean"
    };
    let mut header = CommandHeader::new(Icon::Trash, title);
    header.add("Output", output.display().to_string());
    header.render(supports_color, supports_unicode)
}

/// List the files a clean removed (or would remove)
pub fn render_clean_files(result: &CleanResult, supports_color: bool) -> String {
    let mut out = String::new();
    if result.deleted.is_empty() {
        return out;
    }

    let heading = if result.dry_run {
        "Files to be deleted:"
    } else {
        "Deleted:"
    };
    out.push_str(&ColoredText::warning(heading).bold().render(supports_color));
    out.push('\n');
    for deleted in &result.deleted {
        out.push_str(&format!("  - {}\n", deleted.display()));
    }
    out
}

pub fn render_clean_result(
    result: &CleanResult,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let title = if result.dry_run {
        "Dry Run Complete"
    } else if result.deleted.is_empty() && result.errors.is_empty() {
        "Nothing to Clean"
    } else {
        "Clean Complete"
    };

    let mut summary = if result.is_success() {
        ResultSummary::success(title)
    } else {
        ResultSummary::partial(title)
    };

    if result.dry_run {
        summary.add_stat("files would be deleted", result.deleted.len());
    } else {
        summary.add_stat("files deleted", result.deleted.len());
    }
    if !result.skipped.is_empty() {
        summary.add_stat("skipped", result.skipped.len());
    }
    for error in &result.errors {
        summary.add_warning(error.as_str());
    }

    summary.render(supports_color, supports_unicode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pageit::application::SkipReason;
    use std::path::PathBuf;

    #[test]
    fn header_shows_dry_run_mode() {
        let rendered = render_clean_header(Path::new("site/output"), true, false, false);
        assert!(rendered.contains("[DEL] Pageit Clean (Dry Run)"));
        assert!(rendered.contains("Output: site/output"));
    }

    #[test]
    fn files_are_listed_with_dry_run_heading() {
        let mut result = CleanResult::new();
        result.dry_run = true;
        result.add_deleted(PathBuf::from("index.html"));
        let rendered = render_clean_files(&result, false);
        assert!(rendered.contains("Files to be deleted:"));
        assert!(rendered.contains("  - index.html"));
    }

    #[test]
    fn empty_result_reports_nothing_to_clean() {
        let mut result = CleanResult::new();
        result.add_skipped(PathBuf::from("gone.html"), SkipReason::Missing);
        let rendered = render_clean_result(&result, false, false);
        assert!(rendered.contains("Nothing to Clean"));
        assert!(rendered.contains("1 skipped"));
    }

    #[test]
    fn errors_make_the_summary_partial() {
        let mut result = CleanResult::new();
        result.add_error("Failed to delete index.html: permission denied".to_string());
        let rendered = render_clean_result(&result, false, false);
        assert!(rendered.starts_with("[WARN] Clean Complete"));
        assert!(rendered.contains("permission denied"));
    }
}
