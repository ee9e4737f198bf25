//! HTTP server layer
//!
//! Axum server with:
//! - JSON envelopes for success and error responses
//! - Extractors that keep rejections inside the envelope
//! - CORS, request tracing and graceful shutdown

pub mod envelope;
pub mod error;
pub mod extractors;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{build_router, run_server, ServerConfig};
