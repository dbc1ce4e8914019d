//! Cache Module
//!
//! Preloaded, read-only bank storage for the cache-backed endpoint.

mod store;

// Re-export public types
pub use store::BankStore;

// == Public Constants ==
/// Default number of banks the cache can hold
pub const DEFAULT_MAX_ENTRIES: usize = 20;
