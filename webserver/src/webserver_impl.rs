//! Main webserver implementation
//!
//! The WebServer owns the lineup engine and the server state and is itself
//! the axum router state, so handlers reach both through one extractor.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::routing::{get, post};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use optimizer::{LineupEngine, PlayerSource};
use shared::{logging, process_info, ProcessId};

use crate::error::{WebServerError, WebServerResult};
use crate::state::WebServerState;
use crate::web::handlers::api;

/// Main webserver struct with dependency injection
pub struct WebServer<P>
where
    P: PlayerSource,
{
    state: Arc<WebServerState>,
    engine: Arc<LineupEngine<P>>,
}

// Manual impl: the source itself need not be Clone
impl<P> Clone for WebServer<P>
where
    P: PlayerSource,
{
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            engine: Arc::clone(&self.engine),
        }
    }
}

impl<P> WebServer<P>
where
    P: PlayerSource + 'static,
{
    pub fn new(bind_address: SocketAddr, request_timeout: Duration, engine: LineupEngine<P>) -> Self {
        Self {
            state: Arc::new(WebServerState::new(bind_address, request_timeout)),
            engine: Arc::new(engine),
        }
    }

    /// Build the Axum router with all routes
    pub fn build_router(&self) -> Router {
        Router::new()
            // API routes
            .route("/api/fanduel-players", get(api::get_players::<P>))
            .route("/api/fanduel-best-lineup", get(api::get_best_lineup::<P>))
            .route("/api/fanduel-build-lineups", post(api::build_lineups::<P>))
            // Health check
            .route("/health", get(api::health_check::<P>))
            .layer(
                ServiceBuilder::new()
                    .layer(TraceLayer::new_for_http())
                    // The browser client is served from another origin
                    .layer(CorsLayer::permissive())
                    .into_inner(),
            )
            .with_state(self.clone())
    }

    /// Serve until Ctrl+C
    pub async fn run(&self) -> WebServerResult<()> {
        let router = self.build_router();
        let bind_address = self.state.bind_address;

        let listener = tokio::net::TcpListener::bind(bind_address)
            .await
            .map_err(|e| WebServerError::ServerStartup(format!("Failed to bind to {}: {}", bind_address, e)))?;

        process_info!(ProcessId::current(), "🌐 Web server listening on http://{}", bind_address);

        let state = Arc::clone(&self.state);
        axum::serve(listener, router)
            .with_graceful_shutdown(async move {
                match tokio::signal::ctrl_c().await {
                    Ok(()) => logging::log_shutdown(ProcessId::current(), "Received Ctrl+C signal"),
                    Err(err) => logging::log_error(ProcessId::current(), "Signal handling", &err),
                }
                state.set_running(false);
            })
            .await
            .map_err(|e| WebServerError::ServerStartup(e.to_string()))?;

        Ok(())
    }

    pub fn state(&self) -> &Arc<WebServerState> {
        &self.state
    }

    pub fn engine(&self) -> &LineupEngine<P> {
        &self.engine
    }
}
