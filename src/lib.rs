//! Minimal HTTP API bootstrap.
//!
//! # Architecture Overview
//!
//! ```text
//! startup:
//!     .env → config (Settings) → db (MongoDB connect + ping) → http (listen)
//!
//! per request:
//!     CORS → access log → route match → handler
//!                              │            │
//!                              │ no match   │ Err(ApiError)
//!                              ▼            ▼
//!                         404 fallback   error dispatcher (uniform JSON)
//! ```
//!
//! The database connection is established once at startup and carried as an
//! owned handle in the router state; the service refuses to start without it.

pub mod config;
pub mod db;
pub mod http;

pub use config::Settings;
pub use http::error::{ApiError, ApiResult};
pub use http::server::ApiServer;
