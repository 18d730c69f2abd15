use anyhow::Result;

use pageit::application::RenderReport;

use crate::commands::site::Site;
use crate::ui::context::UiContext;
use crate::ui::json;
use crate::ui::views::render::{
    is_listed, render_entry, render_render_header, render_render_result,
};

pub fn cmd_render(site: &Site, ui: &UiContext) -> Result<RenderReport> {
    let engine = &site.engine;

    if ui.json {
        json::emit(json::start_event("render"))?;
    } else if ui.human() {
        print!(
            "{}",
            render_render_header(
                engine.source_root(),
                engine.output_root(),
                site.config.as_deref(),
                &site.env_name,
                engine.options().dry_run,
                ui.color,
                ui.unicode,
            )
        );
    }

    let report = engine.run(&site.environment)?;
    print_report(&report, ui)?;
    Ok(report)
}

/// Per-entry lines followed by the summary
pub fn print_report(report: &RenderReport, ui: &UiContext) -> Result<()> {
    if ui.json {
        for outcome in &report.entries {
            json::emit(json::entry_event(outcome))?;
        }
        json::emit(json::render_complete_event(report))?;
        return Ok(());
    }
    if !ui.human() {
        return Ok(());
    }

    for outcome in report.entries.iter().filter(|o| is_listed(o, ui.verbose)) {
        print!("{}", render_entry(outcome, ui.color, ui.unicode));
    }
    print!("{}", render_render_result(report, ui.color, ui.unicode));
    Ok(())
}
