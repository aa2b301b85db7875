//! MongoDB startup connection.
//!
//! # Responsibilities
//! - Establish the single client connection at boot
//! - Verify reachability eagerly with a `ping` round-trip
//! - Hand back an owned `Database` handle for the router state
//!
//! # Design Decisions
//! - The driver connects lazily, so the ping is what actually surfaces an
//!   unreachable store at startup instead of on the first request
//! - No retry or backoff: the service is defined to be non-functional
//!   without the store, the caller exits instead
//! - Timeouts are URI-driven (`serverSelectionTimeoutMS`, `connectTimeoutMS`)

use mongodb::{bson::doc, options::ClientOptions, Client, Database};

/// Database used when the connection string names none.
pub const DEFAULT_DATABASE: &str = "app";

/// Connect to MongoDB and verify the connection with a ping.
///
/// Returns the database named in the URI, or [`DEFAULT_DATABASE`] when the
/// URI does not name one.
pub async fn connect(uri: &str) -> Result<Database, mongodb::error::Error> {
    let options = ClientOptions::parse(uri).await?;
    let client = Client::with_options(options)?;

    let db = client
        .default_database()
        .unwrap_or_else(|| client.database(DEFAULT_DATABASE));

    db.run_command(doc! { "ping": 1 }).await?;
    tracing::info!(database = %db.name(), "MongoDB connected");

    Ok(db)
}
