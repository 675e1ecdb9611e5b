//! HTTP server initialization and runtime setup.
//!
//! Builds the upstream client and services, then runs the Axum server until
//! a shutdown signal arrives.

use crate::api::docs;
use crate::api::middleware::cors;
use crate::config::Config;
use crate::infrastructure::steam::SteamClient;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Steam client (shared connection pool)
/// - Catalogue and news services
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - The HTTP client cannot be built
/// - The CORS origin is not a valid header value
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let client = SteamClient::new(Duration::from_secs(config.upstream_timeout_secs))
        .context("Failed to build Steam client")?;
    tracing::info!("Steam client ready");

    let state = AppState::new(
        Arc::new(client),
        config.catalog_settings(),
        config.news_query(),
    );

    let cors = cors::layer(&config.cors_origin).context("Invalid CORS_ORIGIN")?;
    let app = app_router(state, cors);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");
    tracing::info!(
        "API docs at http://{addr}{}/index.html",
        docs::SWAGGER_UI_PATH
    );

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl-C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
