//! HTTP server layer
//!
//! Axum server with:
//! - Server-rendered pages and form posts
//! - Request tracing
//! - Graceful shutdown
//! - JSON `{"detail": ...}` error bodies

pub mod error;
pub mod extractors;
pub mod render;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{build_router, run_server, ServerConfig, ServerError};
