use std::io::Write;

use pingmock_events::types::Event;
use tokio::sync::broadcast;
use tokio::sync::broadcast::error::RecvError;
use tracing::warn;

/// Mirrors each accepted ping as one JSON line on stdout.
///
/// Runs detached from the request path: a slow or broken sink can lag or drop
/// lines but never blocks a handler or fails a response.
pub async fn run(mut receiver: broadcast::Receiver<Event>) {
    loop {
        match receiver.recv().await {
            Ok(event) => emit(&event),
            Err(RecvError::Lagged(skipped)) => {
                warn!(skipped, "sink fell behind, skipped events");
            }
            Err(RecvError::Closed) => break,
        }
    }
}

fn emit(event: &Event) {
    if let Ok(line) = serde_json::to_string(event) {
        let mut out = std::io::stdout().lock();
        let _ = writeln!(out, "{line}");
    }
}
