//! Entry point for the `hunt-web` puzzle-hunt site server.
//!
//! This is the only place allowed to terminate the process: catalog and
//! listener failures here are deployment errors, and broken content must
//! never reach a serving process.

use std::sync::Arc;
use std::time::Duration;

use hunt_core::Catalog;
use hunt_web::{config::ServerConfig, routes::router, state::SiteState};
use tracing::info;

/// How long in-flight requests get to finish after a shutdown signal.
const SHUTDOWN_GRACE: Duration = Duration::from_secs(10);

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = ServerConfig::from_env();

    let catalog = match Catalog::load(&config.content_dir) {
        Ok(catalog) => catalog,
        Err(e) => {
            tracing::error!(content_dir = %config.content_dir.display(), error = %e, "failed to load puzzle catalog");
            std::process::exit(1);
        }
    };
    info!(puzzles = catalog.puzzles.len(), "catalog loaded");

    let site = Arc::new(SiteState::new(catalog, &config));
    let app = router(site);

    let listener = match tokio::net::TcpListener::bind(&config.listen_addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!(addr = %config.listen_addr, error = %e, "failed to bind");
            std::process::exit(1);
        }
    };

    info!(addr = %config.listen_addr, "hunt-web listening");

    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();
    let server = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = shutdown_rx.await;
            })
            .await
    });

    shutdown_signal().await;
    info!("shutdown signal received, draining in-flight requests");
    let _ = shutdown_tx.send(());

    match tokio::time::timeout(SHUTDOWN_GRACE, server).await {
        Ok(Ok(Ok(()))) => info!("server stopped"),
        Ok(Ok(Err(e))) => {
            tracing::error!(error = %e, "server error");
            std::process::exit(1);
        }
        Ok(Err(e)) => {
            tracing::error!(error = %e, "server task failed");
            std::process::exit(1);
        }
        Err(_) => {
            tracing::error!(
                grace_secs = SHUTDOWN_GRACE.as_secs(),
                "in-flight requests did not finish within the grace period, aborting"
            );
            std::process::exit(1);
        }
    }
}

/// Resolve when the process receives SIGINT or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install ctrl-c handler");
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
}
