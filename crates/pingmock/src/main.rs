use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use clap::Parser;
use pingmock_events::bus::EventBus;
use pingmock_events::clock::SystemClock;
use pingmock_events::store::{DEFAULT_CAPACITY, EventStore};
use pingmock_serve::AppState;
use tracing::{error, info};

/// Local mock server for webhook ping callbacks.
#[derive(Parser)]
#[command(name = "pingmock", version)]
struct Cli {
    /// Address to bind.
    #[arg(long, default_value = "127.0.0.1")]
    host: IpAddr,
    /// Port to listen on.
    #[arg(long, default_value_t = 8787)]
    port: u16,
}

#[tokio::main]
async fn main() {
    init_tracing();
    let cli = Cli::parse();
    let addr = SocketAddr::new(cli.host, cli.port);

    let state = AppState::new(
        Arc::new(EventStore::new(DEFAULT_CAPACITY)),
        EventBus::new(1024),
        Arc::new(SystemClock::new()),
    );

    let listener = match pingmock_serve::bind(addr).await {
        Ok(listener) => listener,
        Err(err) => {
            error!("{err}");
            std::process::exit(1);
        }
    };

    println!("Mock server listening on http://{}:{}", cli.host, cli.port);
    println!("POST /ping  | GET /logs  | GET /health");

    if let Err(err) = pingmock_serve::serve(listener, state).await {
        error!("serve error: {err}");
        std::process::exit(1);
    }
    info!("shutdown complete");
}

/// Log lines go to stderr so stdout stays reserved for the banner and the
/// one-JSON-line-per-ping sink output.
fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
