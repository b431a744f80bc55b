//! REST server for user relationship creation
//!
//! This crate exposes the relationship endpoints over HTTP. The graph client
//! is injected through [`AppState`], so the same router runs against Neo4j in
//! production and against the in-memory client in tests.

#![deny(warnings)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]

pub mod api;
mod rest_server;

use anyhow::Context;
use std::future::Future;
use std::sync::Arc;
use tracing::info;
use usergraph_core::config::{Config, ServerConfig};
use usergraph_storage::Neo4jClientTrait;

pub use rest_server::{build_router, ApiError, AppState};

// Re-export error types from core
pub use usergraph_core::error::{Error, Result};

/// Run the REST server with the given configuration.
///
/// This:
/// 1. Validates the configuration and builds the relationship type allow-list
/// 2. Connects to Neo4j (or the in-memory graph when `storage.use_mock` is set)
/// 3. Serves HTTP until Ctrl+C, then shuts down gracefully
///
/// # Returns
///
/// Returns `Ok(())` on clean shutdown, or an error if startup fails.
pub async fn run_server(config: Config) -> Result<()> {
    config.validate()?;

    let allowed_types = config.relationships.allowed_relationship_types()?;
    let graph = usergraph_storage::create_neo4j_client(&config.storage).await?;

    if let Err(e) = graph.ping().await {
        tracing::warn!("Neo4j is not answering yet, continuing startup: {e:#}");
    }

    serve(&config.server, graph, allowed_types, shutdown_signal()).await
}

/// Serve the router until `shutdown` resolves
pub async fn serve<F>(
    server_config: &ServerConfig,
    graph: Arc<dyn Neo4jClientTrait>,
    allowed_types: usergraph_core::AllowedRelationshipTypes,
    shutdown: F,
) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let state = AppState::new(graph, allowed_types);
    let app = build_router(state, server_config);

    let addr = format!("{}:{}", server_config.host, server_config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {addr}"))
        .map_err(Error::Other)?;

    info!("REST server listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(Error::Io)?;

    info!("usergraph server shut down successfully");

    Ok(())
}

/// Resolves on Ctrl+C
async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received Ctrl+C, initiating graceful shutdown"),
        Err(e) => tracing::error!("Error setting up signal handler: {e}"),
    }
}
