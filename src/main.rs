//! Process entry point.
//!
//! Startup order is strict: configuration, then the database connection,
//! then the listener. A failed connection terminates the process before
//! any socket is bound.

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_server::config::Settings;
use api_server::http::error;
use api_server::ApiServer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = Settings::from_env()?;
    error::expose_traces(settings.debug_errors);

    tracing::info!(
        port = settings.port,
        debug_errors = settings.debug_errors,
        "Configuration loaded"
    );

    let db = match api_server::db::connect(&settings.mongo_uri).await {
        Ok(db) => db,
        Err(err) => {
            tracing::error!(error = %err, "MongoDB connection failed");
            tracing::error!("Server cannot start without the database, exiting");
            std::process::exit(1);
        }
    };

    let listener = TcpListener::bind(("0.0.0.0", settings.port)).await?;
    let port = listener.local_addr()?.port();

    tracing::info!("🚀 Server running on http://localhost:{port}");
    tracing::info!("💚 Health: http://localhost:{port}/health");

    ApiServer::new(db).run(listener).await?;
    Ok(())
}
