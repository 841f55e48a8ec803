//! Cache Statistics Module
//!
//! Snapshot of the response cache state for the observability endpoint.

use serde::Serialize;

// == Cache Stats ==
/// Point-in-time view of the cache, reported by `GET /cache/stats`.
///
/// `entries` only counts logically-live entries; the store sweeps
/// expired ones before taking the snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct CacheStats {
    /// Backend type ("memory" for the in-process store)
    #[serde(rename = "type")]
    pub backend: &'static str,
    /// Number of live entries
    pub entries: usize,
    /// Store-wide TTL in seconds
    pub ttl_seconds: u64,
    /// Number of successful lookups
    pub hits: u64,
    /// Number of lookups that found nothing (absent or expired)
    pub misses: u64,
}

impl CacheStats {
    // == Hit Rate ==
    /// Returns hits / (hits + misses), or 0.0 before any lookup.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}
