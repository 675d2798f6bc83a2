//! # HTTP Server
//!
//! Combines the planet and observability routers behind a CORS layer and
//! serves them until Ctrl-C.

use std::io;
use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::observability::Logger;

use super::config::ServerConfig;
use super::observability_routes::observability_routes;
use super::planet_routes::planet_routes;
use super::state::AppState;

/// HTTP server for the exoplanet catalog
pub struct HttpServer {
    config: ServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server with a fresh, empty store
    pub fn with_config(config: ServerConfig) -> Self {
        Self::with_state(config, AppState::new())
    }

    /// Create a server around existing state
    pub fn with_state(config: ServerConfig, state: AppState) -> Self {
        let router = build_router(&config, state);
        Self { config, router }
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until Ctrl-C
    pub async fn start(self) -> Result<(), io::Error> {
        let addr: SocketAddr = self
            .config
            .socket_addr()
            .parse()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

        let listener = TcpListener::bind(addr).await?;
        let addr_text = addr.to_string();
        Logger::info("SERVER_STARTED", &[("addr", addr_text.as_str())]);

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Logger::info("SERVER_STOPPED", &[("addr", addr_text.as_str())]);
        Ok(())
    }
}

/// Build the combined router with all endpoints
pub fn build_router(config: &ServerConfig, state: AppState) -> Router {
    let cors = if config.cors_origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<_> = config
            .cors_origins
            .iter()
            .filter_map(|s| s.parse().ok())
            .collect();

        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    Router::new()
        .merge(observability_routes(state.clone()))
        .merge(planet_routes(state))
        .layer(cors)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        let reason = e.to_string();
        Logger::error("SIGNAL_HANDLER_FAILED", &[("reason", reason.as_str())]);
        // Without a signal handler, serve until the process is killed
        std::future::pending::<()>().await;
    }
    Logger::info("SHUTDOWN_REQUESTED", &[]);
}
