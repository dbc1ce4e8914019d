//! Remote Module
//!
//! Source map loading and the HTTP fan-out used by the remote endpoint.

mod aggregator;
mod sources;

// Re-export public types
pub use aggregator::RemoteAggregator;
pub use sources::{load_sources, parse_sources, RemoteSource};
