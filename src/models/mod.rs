//! Data model and DTOs for the bank bridge API
//!
//! This module defines the bank record entity, the query parameters accepted
//! by the listing endpoints, and the serialized response shapes.

pub mod bank;
pub mod requests;
pub mod responses;
pub mod views;

// Re-export commonly used types
pub use bank::{BankList, BankRecord};
pub use requests::{CacheQuery, RemoteQuery};
pub use responses::{HealthResponse, MessageResponse, MSG_INTERNAL_SERVER, MSG_NO_RESULTS};
pub use views::{CacheView, RemoteView};
