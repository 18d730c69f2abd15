use anyhow::{bail, Result};

use pageit::application::CleanResult;

use crate::commands::site::Site;
use crate::ui::context::UiContext;
use crate::ui::json;
use crate::ui::views::clean::{render_clean_files, render_clean_header, render_clean_result};

pub fn cmd_clean(site: &Site, ui: &UiContext) -> Result<CleanResult> {
    let engine = &site.engine;

    if ui.json {
        json::emit(json::start_event("clean"))?;
    } else if ui.human() {
        print!(
            "{}",
            render_clean_header(
                engine.output_root(),
                engine.options().dry_run,
                ui.color,
                ui.unicode
            )
        );
    }

    let result = engine.clean_previous()?;

    if ui.json {
        json::emit(json::clean_complete_event(&result))?;
    } else if ui.human() {
        print!("{}", render_clean_files(&result, ui.color));
        print!("{}", render_clean_result(&result, ui.color, ui.unicode));
    }

    if !result.is_success() {
        bail!(
            "clean failed for {} of {} files",
            result.errors.len(),
            result.total_count()
        );
    }
    Ok(result)
}
