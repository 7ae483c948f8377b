pub mod routes;
pub mod sink;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use pingmock_events::bus::EventBus;
use pingmock_events::clock::Clock;
use pingmock_events::store::EventStore;
use thiserror::Error;
use tokio::net::TcpListener;
use tracing::info;

#[derive(Debug, Error)]
pub enum ServeError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        source: std::io::Error,
    },
    #[error("server error: {0}")]
    Io(std::io::Error),
}

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<EventStore>,
    pub event_bus: EventBus,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn new(store: Arc<EventStore>, event_bus: EventBus, clock: Arc<dyn Clock>) -> Self {
        Self {
            store,
            event_bus,
            clock,
        }
    }
}

pub fn app(state: AppState) -> Router {
    routes::router(state)
}

/// Binds the listening socket. A failure here is fatal to the caller: the
/// server never starts accepting and there is no retry.
pub async fn bind(addr: SocketAddr) -> Result<TcpListener, ServeError> {
    TcpListener::bind(addr)
        .await
        .map_err(|source| ServeError::Bind { addr, source })
}

/// Serves requests until a shutdown signal arrives, then drains: no new
/// connections are accepted while in-flight requests run to completion. The
/// per-request timeout layered onto the router bounds the drain.
pub async fn serve(listener: TcpListener, state: AppState) -> Result<(), ServeError> {
    tokio::spawn(sink::run(state.event_bus.subscribe()));
    let service = app(state).into_make_service_with_connect_info::<SocketAddr>();
    axum::serve(listener, service)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServeError::Io)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
    info!("shutdown signal received, draining in-flight requests");
}
