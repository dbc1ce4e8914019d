//! Bank Bridge - Bank listing service
//!
//! Serves bank records from a preloaded cache and from live remote sources,
//! with filtering and pagination on both paths.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod mock;
pub mod models;
pub mod query;
pub mod remote;

pub use api::AppState;
pub use config::Config;
pub use error::BankError;
