//! HTTP surface.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware layers)
//!     → handlers.rs (health, 404 fallback)
//!     → error.rs (ApiError → uniform JSON error response)
//! ```

pub mod error;
pub mod handlers;
pub mod server;

pub use error::{ApiError, ApiResult};
pub use server::{ApiServer, AppState};
