//! API Gateway Library
//!
//! The HTTP surface of the service: routes, the authentication gate and
//! request validation, wired to the in-process auth, store and analysis
//! services.

pub mod config;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use tracing::info;

use analysis_service_lib::build_summarizer;
use auth_service_lib::build_authenticator;
use store_service_lib::infra::Database;
use store_service_lib::repository::{ConfigurationStore, UserStore};
use store_service_lib::service::ConfigurationLookup;

use crate::config::GatewayConfig;
use crate::routes::create_router;
use crate::state::AppState;

/// Wire services onto a connected database.
pub fn build_state(config: &GatewayConfig, database: Database) -> common::AppResult<AppState> {
    let users = Arc::new(UserStore::new(database.get_connection()));
    let entries = Arc::new(ConfigurationStore::new(database.get_connection()));

    Ok(AppState::new(
        Arc::new(build_authenticator(&config.auth, users)),
        Arc::new(ConfigurationLookup::new(entries)),
        Arc::new(build_summarizer(&config.openai)?),
        database,
    ))
}

/// Run the HTTP server until Ctrl-C or SIGTERM, then close the pool.
pub async fn run_server(config: GatewayConfig) -> Result<(), Box<dyn std::error::Error>> {
    let database = Database::connect(&config.store).await?;
    let state = build_state(&config, database.clone())?;

    let app = create_router(state);

    let addr: SocketAddr = config.service.addr().parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(
        service = %config.service.service_name,
        environment = %config.service.environment,
        "Server running on http://{}",
        addr
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shutting down server...");
    database.close().await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
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

    info!("Received shutdown signal");
}
