use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use pingmock_events::types::Event;
use serde::Serialize;

use crate::AppState;

#[derive(Debug, Serialize)]
pub struct LogsResponse {
    pub count: usize,
    pub events: Vec<Event>,
}

pub fn router(state: AppState) -> Router {
    Router::new().route("/logs", get(list_logs)).with_state(state)
}

pub(crate) async fn list_logs(State(state): State<AppState>) -> Json<LogsResponse> {
    let (count, events) = state.store.snapshot();
    Json(LogsResponse { count, events })
}
