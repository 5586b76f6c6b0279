mod config;
mod dashboard;
mod db;
mod error;
mod types;
mod web;

use std::sync::Arc;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::db::{ConnectionProvider, RecordSource};
use crate::error::Result;
use crate::web::{router, WebState};

#[tokio::main]
async fn main() {
    let cfg = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {e}");
            std::process::exit(1);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&cfg.log_level))
        .init();

    if let Err(e) = run(cfg).await {
        error!("Fatal error: {e}");
        std::process::exit(1);
    }
}

async fn run(cfg: Config) -> Result<()> {
    // The connection is opened lazily by the first render cycle.
    let provider = Arc::new(ConnectionProvider::new(&cfg));
    let source = RecordSource::from_config(&cfg);
    info!(
        host = %cfg.db_host,
        database = %cfg.db_name,
        table = %source.table,
        limit = cfg.fetch_limit,
        "Dashboard configured"
    );

    let state = WebState {
        provider: Arc::clone(&provider),
        source,
        fetch_limit: cfg.fetch_limit,
    };
    let app = router(state);
    let bind_addr = format!("0.0.0.0:{}", cfg.dashboard_port);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!("Dashboard listening on http://{bind_addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!(
        connected = provider.is_connected().await,
        "Server stopped, releasing database connection"
    );
    provider.close().await;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl-C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                error!("Failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    info!("Shutdown signal received");
}
