use pageit::application::WatchEvent;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;

pub fn render_live_header(
    source: &str,
    output: &str,
    watch: bool,
    port: Option<u16>,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let (icon, title) = match (watch, port) {
        (true, Some(_)) => (Icon::Watch, "Pageit Watch + Serve"),
        (true, None) => (Icon::Watch, "Pageit Watch"),
        (false, _) => (Icon::Serve, "Pageit Serve"),
    };
    let mut header = CommandHeader::new(icon, title);
    if watch {
        header.add("Source", source);
    }
    header.add("Output", output);
    if let Some(port) = port {
        header.add("Address", format!("http://localhost:{}/", port));
    }
    header.add("Hint", "Press Ctrl+C to stop");
    header.render(supports_color, supports_unicode)
}

pub fn render_watch_event(
    timestamp: &str,
    event: &WatchEvent,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let prefix = format!("[{}]", timestamp);

    match event {
        WatchEvent::WatchStarted { source } => format!(
            "{} {} Watching: {}\n",
            prefix,
            Icon::Watch.colored(supports_color, supports_unicode),
            source
        ),
        WatchEvent::FileChanged { path } => format!(
            "{} {} Changed: {}\n",
            prefix,
            Icon::Arrow.colored(supports_color, supports_unicode),
            path
        ),
        WatchEvent::RenderStarted => format!(
            "{} {} Rendering...\n",
            prefix,
            Icon::Progress.colored(supports_color, supports_unicode)
        ),
        WatchEvent::RenderComplete {
            rendered,
            copied,
            fresh,
            errors,
        } => {
            let icon = if *errors > 0 {
                Icon::Warning
            } else {
                Icon::Success
            }
            .colored(supports_color, supports_unicode);

            if *errors > 0 {
                format!(
                    "{} {} Render: {} rendered, {} copied, {} fresh, {} errors\n",
                    prefix, icon, rendered, copied, fresh, errors
                )
            } else {
                format!(
                    "{} {} Render: {} rendered, {} copied, {} fresh\n",
                    prefix, icon, rendered, copied, fresh
                )
            }
        }
        WatchEvent::Error { message } => format!(
            "{} {} Error: {}\n",
            prefix,
            Icon::Error.colored(supports_color, supports_unicode),
            message
        ),
        WatchEvent::Shutdown => format!(
            "\n{} {} Watch stopped.\n",
            prefix,
            Icon::Watch.colored(supports_color, supports_unicode)
        ),
    }
}
