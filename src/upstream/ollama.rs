//! Ollama Client
//!
//! Thin reqwest wrapper over the three upstream endpoints the gateway
//! uses: version probe, text generation and model listing. Every call
//! carries a bounded timeout so a stalled upstream cannot stall the
//! gateway indefinitely.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{error, info};

use crate::error::{GatewayError, Result};

/// Timeout for the lightweight version probe, independent of the
/// (much longer) generation timeout.
const HEALTH_PROBE_TIMEOUT_SECS: u64 = 10;

// == Wire Types ==
/// Body of a successful `POST /api/generate` reply.
#[derive(Debug, Deserialize)]
struct GenerateReply {
    #[serde(default)]
    response: String,
}

/// Body of a `GET /api/tags` reply.
#[derive(Debug, Deserialize)]
struct TagsReply {
    #[serde(default)]
    models: Vec<ModelTag>,
}

#[derive(Debug, Deserialize)]
struct ModelTag {
    #[serde(default)]
    name: String,
}

// == Ollama Client ==
/// HTTP client for the Ollama backend.
#[derive(Debug, Clone)]
pub struct OllamaClient {
    http: Client,
    base_url: String,
}

impl OllamaClient {
    // == Constructor ==
    /// Creates a client for `base_url` with `timeout_secs` applied to
    /// generation and listing calls.
    pub fn new(base_url: impl Into<String>, timeout_secs: u64) -> Self {
        let http = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .expect("failed to build HTTP client");

        Self {
            http,
            base_url: base_url.into(),
        }
    }

    // == Health ==
    /// Probes `GET /api/version`. Never fails hard; an unreachable or
    /// erroring upstream is reported as unhealthy.
    pub async fn health(&self) -> bool {
        let url = format!("{}/api/version", self.base_url);
        let result = self
            .http
            .get(&url)
            .timeout(Duration::from_secs(HEALTH_PROBE_TIMEOUT_SECS))
            .send()
            .await
            .and_then(|resp| resp.error_for_status());

        match result {
            Ok(_) => {
                info!("Ollama health check passed");
                true
            }
            Err(e) => {
                error!("Ollama health check failed: {e}");
                false
            }
        }
    }

    // == Generate ==
    /// Runs a non-streaming generation and returns the completion text.
    pub async fn generate(
        &self,
        model: &str,
        prompt: &str,
        max_tokens: u32,
        temperature: f32,
    ) -> Result<String> {
        let url = format!("{}/api/generate", self.base_url);
        let body = build_generate_body(model, prompt, max_tokens, temperature);

        let response = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(map_upstream_error)?
            .error_for_status()
            .map_err(map_upstream_error)?;

        let reply: GenerateReply = response.json().await.map_err(map_upstream_error)?;

        if reply.response.is_empty() {
            return Err(GatewayError::EmptyCompletion);
        }

        Ok(reply.response)
    }

    // == List Models ==
    /// Returns the model names known to the upstream.
    pub async fn list_models(&self) -> Result<Vec<String>> {
        let url = format!("{}/api/tags", self.base_url);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .and_then(|resp| resp.error_for_status())
            .map_err(|e| {
                error!("Error fetching models: {e}");
                GatewayError::UpstreamUnavailable
            })?;

        let reply: TagsReply = response
            .json()
            .await
            .map_err(|_| GatewayError::UpstreamUnavailable)?;

        Ok(reply
            .models
            .into_iter()
            .map(|tag| tag.name)
            .filter(|name| !name.is_empty())
            .collect())
    }
}

// == Request Body ==
/// Builds the `POST /api/generate` body. Streaming is disabled; the
/// gateway caches whole completions.
pub fn build_generate_body(model: &str, prompt: &str, max_tokens: u32, temperature: f32) -> Value {
    json!({
        "model": model,
        "prompt": prompt,
        "options": {
            "num_predict": max_tokens,
            "temperature": temperature
        },
        "stream": false
    })
}

/// Maps a reqwest failure onto the gateway taxonomy: timeouts get
/// their own status, everything else is a generic upstream failure.
fn map_upstream_error(e: reqwest::Error) -> GatewayError {
    if e.is_timeout() {
        error!("Request to Ollama timed out");
        GatewayError::UpstreamTimeout
    } else {
        error!("Error generating text: {e}");
        GatewayError::Upstream(e.to_string())
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_generate_body_shape() {
        let body = build_generate_body("tinyllama", "Hello", 100, 0.7);

        assert_eq!(body["model"], "tinyllama");
        assert_eq!(body["prompt"], "Hello");
        assert_eq!(body["options"]["num_predict"], 100);
        assert_eq!(body["stream"], false);
        let temp = body["options"]["temperature"].as_f64().unwrap();
        assert!((temp - 0.7).abs() < 1e-6);
    }

    #[test]
    fn test_generate_reply_deserialize() {
        let reply: GenerateReply =
            serde_json::from_str(r#"{"response":"hi there","done":true}"#).unwrap();
        assert_eq!(reply.response, "hi there");
    }

    #[test]
    fn test_generate_reply_missing_response_field() {
        let reply: GenerateReply = serde_json::from_str(r#"{"done":true}"#).unwrap();
        assert!(reply.response.is_empty());
    }

    #[test]
    fn test_tags_reply_deserialize() {
        let reply: TagsReply = serde_json::from_str(
            r#"{"models":[{"name":"tinyllama","size":1},{"name":"mistral"}]}"#,
        )
        .unwrap();
        let names: Vec<String> = reply.models.into_iter().map(|m| m.name).collect();
        assert_eq!(names, vec!["tinyllama", "mistral"]);
    }

    #[tokio::test]
    async fn test_health_unreachable_upstream_is_unhealthy() {
        // Port 1 on localhost, nothing listens there
        let client = OllamaClient::new("http://127.0.0.1:1", 1);
        assert!(!client.health().await);
    }

    #[tokio::test]
    async fn test_generate_unreachable_upstream_errors() {
        let client = OllamaClient::new("http://127.0.0.1:1", 1);
        let result = client.generate("tinyllama", "Hello", 10, 0.7).await;
        assert!(result.is_err());
    }
}
