//! Query Module
//!
//! Pure filtering and pagination shared by both listing endpoints.

mod filter;
mod pagination;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use filter::{BankFilter, NameMatch};
pub use pagination::{PageRequest, DEFAULT_PAGE_SIZE};
