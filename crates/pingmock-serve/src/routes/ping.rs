use std::net::SocketAddr;

use axum::body::Bytes;
use axum::extract::{ConnectInfo, State};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use pingmock_events::types::Event;
use serde::Serialize;
use serde_json::{Value, json};
use thiserror::Error;
use tracing::debug;

use crate::AppState;
use crate::routes::error::map_error;

pub const PING_PATH: &str = "/ping";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PingError {
    #[error("invalid json")]
    InvalidJson,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PingAck {
    pub ok: bool,
    pub received_at: DateTime<Utc>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(PING_PATH, post(receive_ping))
        .with_state(state)
}

pub(crate) async fn receive_ping(
    State(state): State<AppState>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    body: Bytes,
) -> Response {
    let payload = match parse_payload(&body) {
        Ok(payload) => payload,
        Err(err) => return map_error(&err).into_response(),
    };

    let event = Event {
        received_at: state.clock.now(),
        path: PING_PATH.to_string(),
        remote_address: peer.ip().to_string(),
        payload,
    };

    state.store.append(event.clone());
    // Sink emission is best-effort and never fails the ack.
    let _ = state.event_bus.publish(event.clone());
    debug!(remote = %event.remote_address, "ping recorded");

    Json(PingAck {
        ok: true,
        received_at: event.received_at,
    })
    .into_response()
}

/// An empty body counts as an empty object; anything else must parse as a
/// JSON value. Non-object values are accepted verbatim.
fn parse_payload(body: &[u8]) -> Result<Value, PingError> {
    if body.is_empty() {
        return Ok(json!({}));
    }
    serde_json::from_slice(body).map_err(|_| PingError::InvalidJson)
}
