//! Structured JSONL diagnostics on stderr, one event per session phase.
//! Bespoke rather than a tracing subscriber, matching the harness's own
//! structured logging style.

use serde_json::{Value, json};

pub fn session_start(stage: &str) {
    emit(stage, "session_start", Value::Null);
}

pub fn session_end(stage: &str, ok: bool) {
    emit(stage, "session_end", json!({ "ok": ok }));
}

pub fn error(stage: &str, message: &str) {
    emit(stage, "error", json!({ "message": message }));
}

pub fn mem_delta(stage: &str, before: &crate::memprofile::MemSample, after: &crate::memprofile::MemSample) {
    emit(
        stage,
        "mem_profile",
        json!({ "before": before, "after": after }),
    );
}

fn emit(stage: &str, event: &str, extra: Value) {
    let line = json!({
        "stage": stage,
        "event": event,
        "extra": extra,
    });
    eprintln!("{line}");
}
