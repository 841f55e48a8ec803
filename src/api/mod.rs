//! API Module
//!
//! HTTP handlers and routing for the gateway REST API.
//!
//! # Endpoints
//! - `GET /` - Service banner
//! - `POST /generate` - Generate text through the response cache
//! - `GET /models` - List upstream models
//! - `GET /health` - Upstream and cache health
//! - `GET /cache/stats` - Cache statistics
//! - `DELETE /cache` - Clear all cached responses

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
