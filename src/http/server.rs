//! HTTP server setup.
//!
//! # Responsibilities
//! - Create the Axum router with all handlers
//! - Wire up middleware (CORS, access logging)
//! - Serve on a bound listener with graceful shutdown
//!
//! # Design Decisions
//! - Middleware order is fixed: CORS outermost, then request tracing, then
//!   route matching with the 404 fallback behind it
//! - The database handle lives in router state so future routes receive it
//!   explicitly instead of through a global

use axum::{routing::get, Router};
use mongodb::Database;
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::http::handlers;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    /// Startup-established store connection, shared by value (the driver
    /// handle is internally reference-counted).
    pub db: Database,
}

/// HTTP server for the API.
pub struct ApiServer {
    router: Router,
}

impl ApiServer {
    /// Create a new server around an established database handle.
    pub fn new(db: Database) -> Self {
        Self {
            router: build_router(AppState { db }),
        }
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Build the Axum router with all middleware layers.
///
/// A wrong-method request to a known path falls through to the same 404
/// handler as an unknown path, so the not-found contract covers both.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::health).fallback(handlers::not_found))
        // API routes mount here as they are added, e.g.
        // .nest("/api/v1/auth", auth::routes())
        .fallback(handlers::not_found)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received");
}
