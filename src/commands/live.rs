//! Watch and serve modes.
//!
//! Watch alone blocks the main thread. With `--serve` the server runs on a
//! tokio runtime and the watch loop on a blocking task; Ctrl+C stops both.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::sync::Notify;

use pageit::application::{WatchEvent, WatchOptions, WatchUseCase};
use pageit::infrastructure::serve;
use pageit::PageitResult;

use crate::commands::site::Site;
use crate::ui::context::UiContext;
use crate::ui::views::watch::{render_live_header, render_watch_event};

pub fn cmd_live(site: Site, watch: bool, port: Option<u16>, ui: &UiContext) -> Result<()> {
    let running = Arc::new(AtomicBool::new(true));
    let shutdown = Arc::new(Notify::new());
    {
        let running = running.clone();
        let shutdown = shutdown.clone();
        ctrlc::set_handler(move || {
            running.store(false, Ordering::SeqCst);
            shutdown.notify_one();
        })
        .context("failed to install Ctrl+C handler")?;
    }

    if ui.human() {
        print!(
            "{}",
            render_live_header(
                &site.engine.source_root().display().to_string(),
                &site.engine.output_root().display().to_string(),
                watch,
                port,
                ui.color,
                ui.unicode,
            )
        );
    }

    let Some(port) = port else {
        return watch_loop(&site, running, *ui).map_err(Into::into);
    };

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;
    runtime.block_on(serve_and_watch(
        Arc::new(site),
        port,
        watch,
        running,
        shutdown,
        *ui,
    ))
}

async fn serve_and_watch(
    site: Arc<Site>,
    port: u16,
    watch: bool,
    running: Arc<AtomicBool>,
    shutdown: Arc<Notify>,
    ui: UiContext,
) -> Result<()> {
    let root = site.engine.output_root().to_path_buf();
    let listener = serve::bind(&root, port).await?;

    let watcher = watch.then(|| {
        let site = site.clone();
        let running = running.clone();
        let shutdown = shutdown.clone();
        tokio::task::spawn_blocking(move || {
            let result = watch_loop(&site, running, ui);
            if result.is_err() {
                shutdown.notify_one();
            }
            result
        })
    });

    let stop = shutdown.clone();
    let served = serve::serve_on(listener, root, async move { stop.notified().await }).await;

    running.store(false, Ordering::SeqCst);
    if let Some(task) = watcher {
        task.await.context("watch task panicked")??;
    }
    served?;
    Ok(())
}

fn watch_loop(site: &Site, running: Arc<AtomicBool>, ui: UiContext) -> PageitResult<()> {
    let options = WatchOptions::new(site.engine.source_root().to_path_buf())
        .with_ignored(site.engine.excluded_paths());

    WatchUseCase::new(options).start(
        running,
        |_changed| site.engine.run(&site.environment),
        |event| print_watch_event(&event, &ui),
    )
}

fn print_watch_event(event: &WatchEvent, ui: &UiContext) {
    if ui.json {
        println!("{}", event.to_json());
        return;
    }

    let timestamp = chrono::Local::now().format("%H:%M:%S").to_string();
    let rendered = render_watch_event(&timestamp, event, ui.color, ui.unicode);
    match event {
        WatchEvent::Error { .. } => eprint!("{rendered}"),
        _ if ui.quiet => {}
        _ => print!("{rendered}"),
    }
}
