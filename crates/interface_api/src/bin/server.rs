//! Car Insurance Core - API Server Binary
//!
//! Starts the HTTP API server and the background expiration worker.
//!
//! # Usage
//!
//! ```bash
//! # Run with default configuration
//! cargo run --bin car-insurance-api
//!
//! # Run with environment variables
//! API_HOST=0.0.0.0 API_PORT=8080 DATABASE_URL=postgres://... cargo run --bin car-insurance-api
//! ```
//!
//! # Environment Variables
//!
//! * `API_HOST` - Server host (default: 0.0.0.0)
//! * `API_PORT` - Server port (default: 8080)
//! * `API_DATABASE_URL` / `DATABASE_URL` - PostgreSQL connection string
//! * `API_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)
//! * `API_BUSINESS_TIMEZONE` - IANA zone business dates are read in (default: Europe/Bucharest)
//! * `API_EXPIRATION_INTERVAL_SECS` - Seconds between expiration runs (default: 10)

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;
use tokio::sync::watch;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use core_kernel::Timezone;
use domain_expiration::{ExpirationStore, ExpirationWorker};
use domain_registry::RegistryStore;
use infra_db::{create_pool_from_url, run_migrations, PostgresStore};
use interface_api::{config::ApiConfig, create_router};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = ApiConfig::from_env()?;

    init_tracing(&config.log_level);

    tracing::info!(
        host = %config.host,
        port = %config.port,
        business_timezone = %config.business_timezone,
        "Starting Car Insurance Core API Server"
    );

    let business_tz = Timezone::parse(&config.business_timezone)?;

    tracing::info!("Connecting to database...");
    let pool = create_pool_from_url(&config.database_url).await?;

    tracing::info!("Running database migrations...");
    run_migrations(&pool).await?;
    tracing::info!("Database ready");

    let store = Arc::new(PostgresStore::new(pool));

    // Background worker records policy expirations until shutdown
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let worker = ExpirationWorker::new(
        store.clone() as Arc<dyn ExpirationStore>,
        business_tz,
        Duration::from_secs(config.expiration_interval_secs),
    );
    let worker_handle = tokio::spawn(worker.run(shutdown_rx));

    let app = create_router(store as Arc<dyn RegistryStore>);

    let addr: SocketAddr = config.server_addr().parse()?;
    tracing::info!(%addr, "Server listening");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // Stop the worker once the server has drained
    let _ = shutdown_tx.send(true);
    worker_handle.await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
///
/// This enables graceful shutdown of the server, allowing in-flight
/// requests to complete before the process exits.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
