//! Cache Module
//!
//! In-memory response cache with fixed-TTL expiration and request
//! fingerprinting.

mod entry;
mod key;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use key::fingerprint;
pub use stats::CacheStats;
pub use store::ResponseCache;
