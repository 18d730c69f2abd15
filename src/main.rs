//! Pageit CLI - incremental static site renderer
//!
//! Usage: pageit [PATH] [OPTIONS]
//!
//! Renders PATH into PATH/output by default. See `pageit --help`.

mod commands;
mod ui;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use pageit::presentation::Cli;

use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;

fn main() {
    let cli = Cli::parse();
    init_tracing(&cli);

    let ui = UiContext::new(cli.json, cli.verbose, cli.quiet, cli.color);
    if let Err(err) = commands::run(&cli, &ui) {
        if ui.json {
            let _ = crate::ui::json::emit(serde_json::json!({
                "event": "error",
                "message": format!("{err:#}"),
            }));
        } else {
            eprintln!("{} {:#}", Icon::Error.colored(ui.color, ui.unicode), err);
        }
        std::process::exit(1);
    }
}

/// `RUST_LOG` wins; otherwise the level follows `-q` / `-v`.
fn init_tracing(cli: &Cli) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "pageit={level},tower_http={level}",
            level = cli.log_level()
        ))
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
