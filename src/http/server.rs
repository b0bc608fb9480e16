//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (timeout, body limit, request ID, tracing, access log)
//! - Serve on a bound listener until shutdown is signalled

use std::sync::Arc;
use std::time::Duration;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tower_http::{
    limit::RequestBodyLimitLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ServiceConfig;
use crate::http::handlers;
use crate::http::middleware::access_log;
use crate::http::request::{request_id_header, UuidRequestId};
use crate::lifecycle::ShutdownSignal;
use crate::riot::RiotService;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<dyn RiotService>,
}

/// HTTP server for the data service.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server backed by `service`.
    pub fn new(config: ServiceConfig, service: Arc<dyn RiotService>) -> Self {
        let state = AppState { service };
        let router = Self::build_router(&config, state);
        Self { router }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &ServiceConfig, state: AppState) -> Router {
        Router::new()
            .route("/health", post(handlers::health))
            .route("/api/v1/summoner", post(handlers::summoner))
            .route("/api/v1/matches", post(handlers::matches))
            .route(
                "/api/v1/summoner/{region}/{game_name}/{tag_line}",
                get(handlers::summoner_by_path),
            )
            .route("/api/v1/matches/{region}/{puuid}", get(handlers::matches_by_path))
            .with_state(state)
            .layer(middleware::from_fn(access_log))
            .layer(TraceLayer::new_for_http())
            .layer(RequestBodyLimitLayer::new(config.security.max_body_size))
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(PropagateRequestIdLayer::new(request_id_header()))
            .layer(SetRequestIdLayer::new(request_id_header(), UuidRequestId))
    }

    /// The fully layered router, for in-process use.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener, shutdown: ShutdownSignal) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                shutdown.wait().await;
                tracing::info!("HTTP server draining");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
