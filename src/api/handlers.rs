//! API Handlers
//!
//! HTTP request handlers for each gateway endpoint.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{extract::State, Json};
use tracing::{info, warn};

use crate::cache::{fingerprint, ResponseCache};
use crate::config::Config;
use crate::error::{GatewayError, Result};
use crate::models::{
    ClearCacheResponse, GenerateRequest, GenerateResponse, HealthResponse, RootResponse,
    StatsResponse,
};
use crate::upstream::OllamaClient;

/// Application state shared across all handlers.
///
/// The cache lives behind `Arc<RwLock<_>>`: one instance constructed at
/// startup, shared by every request-handling context. The lock is never
/// held across an upstream await.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe response cache
    pub cache: Arc<RwLock<ResponseCache>>,
    /// Upstream Ollama client
    pub upstream: Arc<OllamaClient>,
    /// Model used when a request does not name one
    pub default_model: String,
}

impl AppState {
    /// Creates a new AppState from its parts.
    pub fn new(cache: ResponseCache, upstream: OllamaClient, default_model: String) -> Self {
        Self {
            cache: Arc::new(RwLock::new(cache)),
            upstream: Arc::new(upstream),
            default_model,
        }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &Config) -> Self {
        let cache = ResponseCache::new(config.cache_ttl);
        let upstream = OllamaClient::new(config.ollama_url.clone(), config.ollama_timeout);
        Self::new(cache, upstream, config.ollama_model.clone())
    }
}

/// Handler for GET /
///
/// Service banner.
pub async fn root_handler() -> Json<RootResponse> {
    Json(RootResponse::new())
}

/// Handler for POST /generate
///
/// Validates the request, probes upstream health, then serves the
/// completion from the cache when an identical request was answered
/// within the TTL window, and from the upstream otherwise.
pub async fn generate_handler(
    State(state): State<AppState>,
    Json(req): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>> {
    // Reject malformed requests before touching the upstream
    if let Some(error_msg) = req.validate() {
        return Err(GatewayError::InvalidRequest(error_msg));
    }

    if !state.upstream.health().await {
        return Err(GatewayError::UpstreamUnavailable);
    }

    // Use model from request or the configured default
    let model = req.model.as_deref().unwrap_or(&state.default_model);
    let cache_key = fingerprint(model, &req.prompt, req.max_tokens, req.temperature);

    // Cache lookup; the lock is released before any upstream call
    let cached = {
        let mut cache = state.cache.write().await;
        cache.get(&cache_key)
    };

    if let Some(text) = cached {
        info!("Cache hit for key {}", &cache_key[..16]);
        return Ok(Json(GenerateResponse::cached(text, model)));
    }

    info!("Generating text with model: {model}");
    let text = state
        .upstream
        .generate(model, &req.prompt, req.max_tokens, req.temperature)
        .await?;

    // Cache the completion; a failed write only costs a recomputation
    {
        let mut cache = state.cache.write().await;
        if cache.set(cache_key.clone(), text.clone()) {
            info!("Cached response for key {}", &cache_key[..16]);
        } else {
            warn!("Failed to cache response for key {}", &cache_key[..16]);
        }
    }

    Ok(Json(GenerateResponse::fresh(text, model)))
}

/// Handler for GET /models
///
/// Lists the model names known upstream, falling back to the
/// configured default when the upstream reports none.
pub async fn models_handler(State(state): State<AppState>) -> Result<Json<Vec<String>>> {
    let models = state.upstream.list_models().await?;

    if models.is_empty() {
        return Ok(Json(vec![state.default_model.clone()]));
    }

    Ok(Json(models))
}

/// Handler for GET /health
///
/// Reports 503 when the upstream probe fails; a cache probe failure
/// only degrades the status, since the gateway stays usable without
/// caching.
pub async fn health_handler(State(state): State<AppState>) -> Result<Json<HealthResponse>> {
    let ollama_healthy = state.upstream.health().await;
    let cache_healthy = state.cache.read().await.ping();

    if !ollama_healthy {
        return Err(GatewayError::UpstreamUnavailable);
    }

    Ok(Json(HealthResponse::new(ollama_healthy, cache_healthy)))
}

/// Handler for GET /cache/stats
///
/// Sweeps expired entries first so the reported count only covers
/// logically-live entries.
pub async fn cache_stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let mut cache = state.cache.write().await;
    let stats = cache.stats();

    Json(StatsResponse::from_stats(&stats))
}

/// Handler for DELETE /cache
///
/// Clears all entries. Idempotent: clearing an empty cache succeeds
/// with a zero count.
pub async fn clear_cache_handler(State(state): State<AppState>) -> Json<ClearCacheResponse> {
    let mut cache = state.cache.write().await;
    let cleared = cache.len();
    cache.clear();

    info!("Cache cleared, {cleared} entries removed");
    Json(ClearCacheResponse::new(cleared))
}
