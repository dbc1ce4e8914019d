//! API Module
//!
//! HTTP handlers and routing for the bank bridge REST API.
//!
//! # Endpoints
//! - `GET /v1/banks/all` - Banks from the preloaded cache
//! - `GET /v2/banks/all` - Banks aggregated from remote sources
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
