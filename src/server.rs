//! HTTP server initialization and runtime setup.
//!
//! Handles the database pool, migrations, the Discord client and the Axum
//! server lifecycle.

use crate::config::Config;
use crate::infrastructure::discord::{DiscordClient, DiscordCredentials};
use crate::infrastructure::persistence;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - SQLite connection pool (file created if missing)
/// - Apply migrations
/// - Discord OAuth client
/// - Axum HTTP server with graceful shutdown on Ctrl-C / SIGTERM
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = persistence::connect(
        &config.database_url,
        config.db_max_connections,
        config.db_connect_timeout(),
    )
    .await
    .with_context(|| format!("Failed to open database {}", config.database_url))?;
    tracing::info!("Connected to database");

    persistence::migrate(&pool)
        .await
        .context("Failed to apply migrations")?;
    tracing::info!("Migrations applied");

    let discord = DiscordClient::new(DiscordCredentials {
        client_id: config.discord_client_id.clone(),
        client_secret: config.discord_client_secret.clone(),
        redirect_uri: config.redirect_uri(),
    })
    .context("Failed to build Discord client")?;

    let state = AppState::new(
        pool.clone(),
        Arc::new(discord),
        config.domain.clone(),
        config.public_base_url(),
        config.cookie_secure,
    );

    let app = app_router(state, &config.assets_dir);

    let addr: SocketAddr = config
        .listen_addr()
        .parse()
        .with_context(|| format!("Invalid listen address {}", config.listen_addr()))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
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
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
