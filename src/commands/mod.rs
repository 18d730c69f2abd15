//! Command drivers for the pageit binary.
//!
//! One invocation runs, in order: clean (with `--clean`), render (unless
//! only cleaning), then the live mode (`--watch` and/or `--serve`).

pub mod clean;
pub mod live;
pub mod render;
pub mod site;

use anyhow::Result;

use pageit::presentation::Cli;

use crate::ui::context::UiContext;

pub fn run(cli: &Cli, ui: &UiContext) -> Result<()> {
    let site = site::prepare(cli)?;

    // Collisions and cycles must fail before clean deletes anything
    if cli.clean && cli.should_render() {
        site.engine.plan()?;
    }
    if cli.clean {
        clean::cmd_clean(&site, ui)?;
    }
    if cli.should_render() {
        render::cmd_render(&site, ui)?;
    }
    if cli.watch || cli.serve.is_some() {
        live::cmd_live(site, cli.watch, cli.serve, ui)?;
    }
    Ok(())
}
