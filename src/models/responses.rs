//! Response DTOs for the gateway API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::cache::CacheStats;

/// Response body for text generation (POST /generate)
#[derive(Debug, Clone, Serialize)]
pub struct GenerateResponse {
    /// The generated (or cached) completion text
    pub text: String,
    /// The model that produced the text
    pub model: String,
    /// Whether the response was served from the cache
    pub cached: bool,
}

impl GenerateResponse {
    /// A completion freshly generated by the upstream.
    pub fn fresh(text: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            model: model.into(),
            cached: false,
        }
    }

    /// A completion served from the response cache.
    pub fn cached(text: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            model: model.into(),
            cached: true,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Overall status ("healthy" or "degraded")
    pub status: String,
    /// Whether the upstream Ollama probe succeeded
    pub ollama: bool,
    /// Whether the cache answered its liveness probe
    pub cache: bool,
    /// Cache backend type
    pub cache_type: &'static str,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a health report with the current timestamp.
    pub fn new(ollama: bool, cache: bool) -> Self {
        let status = if ollama && cache { "healthy" } else { "degraded" };
        Self {
            status: status.to_string(),
            ollama,
            cache,
            cache_type: "memory",
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Response body for the cache stats endpoint (GET /cache/stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Backend type ("memory")
    #[serde(rename = "type")]
    pub backend: &'static str,
    /// Number of live entries at the time of the snapshot
    pub entries: usize,
    /// Store-wide TTL in seconds
    pub ttl_seconds: u64,
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl StatsResponse {
    /// Creates a StatsResponse from a cache snapshot.
    pub fn from_stats(stats: &CacheStats) -> Self {
        Self {
            backend: stats.backend,
            entries: stats.entries,
            ttl_seconds: stats.ttl_seconds,
            hits: stats.hits,
            misses: stats.misses,
            hit_rate: stats.hit_rate(),
        }
    }
}

/// Response body for cache clearing (DELETE /cache)
#[derive(Debug, Clone, Serialize)]
pub struct ClearCacheResponse {
    /// Success message
    pub message: String,
    /// Number of entries removed
    pub cleared: usize,
}

impl ClearCacheResponse {
    /// Creates a new ClearCacheResponse.
    pub fn new(cleared: usize) -> Self {
        Self {
            message: "Cache cleared".to_string(),
            cleared,
        }
    }
}

/// Response body for the service banner (GET /)
#[derive(Debug, Clone, Serialize)]
pub struct RootResponse {
    /// Service banner message
    pub message: String,
    /// Crate version
    pub version: String,
}

impl RootResponse {
    /// Creates the banner for the running service.
    pub fn new() -> Self {
        Self {
            message: "LLM gateway is running".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl Default for RootResponse {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_response_fresh() {
        let resp = GenerateResponse::fresh("hello", "tinyllama");
        assert!(!resp.cached);
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains(r#""cached":false"#));
    }

    #[test]
    fn test_generate_response_cached() {
        let resp = GenerateResponse::cached("hello", "tinyllama");
        assert!(resp.cached);
    }

    #[test]
    fn test_health_response_healthy() {
        let resp = HealthResponse::new(true, true);
        assert_eq!(resp.status, "healthy");
        assert_eq!(resp.cache_type, "memory");
    }

    #[test]
    fn test_health_response_degraded() {
        let resp = HealthResponse::new(false, true);
        assert_eq!(resp.status, "degraded");
    }

    #[test]
    fn test_stats_response_hit_rate() {
        let stats = CacheStats {
            backend: "memory",
            entries: 5,
            ttl_seconds: 3600,
            hits: 80,
            misses: 20,
        };
        let resp = StatsResponse::from_stats(&stats);
        assert!((resp.hit_rate - 0.8).abs() < 0.001);
        assert_eq!(resp.entries, 5);
    }

    #[test]
    fn test_stats_response_serializes_type_field() {
        let stats = CacheStats {
            backend: "memory",
            entries: 0,
            ttl_seconds: 3600,
            hits: 0,
            misses: 0,
        };
        let json = serde_json::to_string(&StatsResponse::from_stats(&stats)).unwrap();
        assert!(json.contains(r#""type":"memory""#));
    }

    #[test]
    fn test_clear_cache_response() {
        let resp = ClearCacheResponse::new(3);
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains(r#""cleared":3"#));
    }
}
