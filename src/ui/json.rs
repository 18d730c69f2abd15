//! NDJSON output helpers.
//!
//! Every event is one JSON object per line on stdout and carries `event`
//! and `command` fields.

use serde::Serialize;
use serde_json::{json, Value};
use std::io::{self, Write};

use pageit::application::{CleanResult, EntryOutcome, RenderReport};

/// Write a single NDJSON event (one JSON object per line).
pub fn write_event(out: &mut impl Write, event: &Value) -> io::Result<()> {
    let line = serde_json::to_string(event).unwrap_or_else(|_| "{}".to_string());
    out.write_all(line.as_bytes())?;
    out.write_all(b"\n")?;
    Ok(())
}

/// Write a raw JSON value to stdout.
pub fn emit(event: Value) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_event(&mut out, &event)
}

/// Tag a serializable payload with `event` and `command` fields.
pub fn tagged<T: Serialize>(event: &str, command: &str, payload: &T) -> Value {
    let mut value = serde_json::to_value(payload).unwrap_or_else(|_| json!({}));
    if !value.is_object() {
        value = json!({ "value": value });
    }
    if let Some(obj) = value.as_object_mut() {
        obj.insert("event".to_string(), json!(event));
        obj.insert("command".to_string(), json!(command));
    }
    value
}

pub fn start_event(command: &str) -> Value {
    json!({
        "event": "start",
        "command": command,
        "version": env!("CARGO_PKG_VERSION"),
    })
}

pub fn entry_event(outcome: &EntryOutcome) -> Value {
    tagged("entry", "render", outcome)
}

pub fn render_complete_event(report: &RenderReport) -> Value {
    json!({
        "event": "complete",
        "command": "render",
        "success": report.is_success(),
        "dry_run": report.dry_run,
        "rendered": report.rendered(),
        "copied": report.copied(),
        "fresh": report.fresh(),
        "errors": report.errors(),
    })
}

pub fn clean_complete_event(result: &CleanResult) -> Value {
    tagged("complete", "clean", result)
}
