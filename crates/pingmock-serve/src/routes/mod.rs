pub mod error;
pub mod health;
pub mod logs;
pub mod ping;

use std::time::Duration;

use axum::Router;
use axum::http::HeaderValue;
use axum::http::header::SERVER;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::AppState;

/// Exact-match dispatch: three known (method, path) pairs, everything else is
/// a 404. A wrong method on a known path is a miss too, not a 405.
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(health::router(state.clone()))
        .merge(logs::router(state.clone()))
        .merge(ping::router(state))
        .fallback(error::not_found)
        .method_not_allowed_fallback(error::not_found)
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .layer(TraceLayer::new_for_http())
        .layer(SetResponseHeaderLayer::overriding(
            SERVER,
            HeaderValue::from_static(concat!("pingmock/", env!("CARGO_PKG_VERSION"))),
        ))
}
