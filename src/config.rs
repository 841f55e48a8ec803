//! Configuration Module
//!
//! Handles loading and managing gateway configuration from environment
//! variables.

use std::env;

/// Gateway configuration parameters.
///
/// All values can be configured via environment variables with sensible
/// defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Base URL of the Ollama API
    pub ollama_url: String,
    /// Default model used when a request does not name one
    pub ollama_model: String,
    /// Timeout in seconds for upstream generation calls
    pub ollama_timeout: u64,
    /// Lifetime in seconds of cached responses
    pub cache_ttl: u64,
    /// Background expired-entry sweep interval in seconds
    pub sweep_interval: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `PORT` - HTTP server port (default: 8000)
    /// - `OLLAMA_API_URL` - Ollama base URL (default: http://localhost:11434)
    /// - `OLLAMA_MODEL` - Default model name (default: tinyllama)
    /// - `OLLAMA_TIMEOUT` - Upstream timeout in seconds (default: 60)
    /// - `CACHE_TTL` - Response cache TTL in seconds (default: 3600)
    /// - `SWEEP_INTERVAL` - Sweep frequency in seconds (default: 60)
    pub fn from_env() -> Self {
        Self {
            server_port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8000),
            ollama_url: env::var("OLLAMA_API_URL")
                .unwrap_or_else(|_| "http://localhost:11434".to_string()),
            ollama_model: env::var("OLLAMA_MODEL").unwrap_or_else(|_| "tinyllama".to_string()),
            ollama_timeout: env::var("OLLAMA_TIMEOUT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(60),
            cache_ttl: env::var("CACHE_TTL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3600),
            sweep_interval: env::var("SWEEP_INTERVAL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(60),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 8000,
            ollama_url: "http://localhost:11434".to_string(),
            ollama_model: "tinyllama".to_string(),
            ollama_timeout: 60,
            cache_ttl: 3600,
            sweep_interval: 60,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.server_port, 8000);
        assert_eq!(config.ollama_url, "http://localhost:11434");
        assert_eq!(config.ollama_model, "tinyllama");
        assert_eq!(config.ollama_timeout, 60);
        assert_eq!(config.cache_ttl, 3600);
        assert_eq!(config.sweep_interval, 60);
    }

    #[test]
    fn test_config_from_env_defaults() {
        // Clear any existing env vars to test defaults
        env::remove_var("PORT");
        env::remove_var("OLLAMA_API_URL");
        env::remove_var("OLLAMA_MODEL");
        env::remove_var("OLLAMA_TIMEOUT");
        env::remove_var("CACHE_TTL");
        env::remove_var("SWEEP_INTERVAL");

        let config = Config::from_env();
        assert_eq!(config.server_port, 8000);
        assert_eq!(config.cache_ttl, 3600);
    }
}
