//! Request DTOs for the gateway API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;

fn default_max_tokens() -> u32 {
    100
}

fn default_temperature() -> f32 {
    0.7
}

/// Request body for text generation (POST /generate)
///
/// # Fields
/// - `prompt`: The text to complete
/// - `max_tokens`: Upper bound on generated tokens (default 100)
/// - `temperature`: Sampling temperature (default 0.7)
/// - `model`: Optional model name; falls back to the configured default
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateRequest {
    /// The prompt to send upstream
    pub prompt: String,
    /// Maximum number of tokens to generate
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// Sampling temperature
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    /// Optional model override
    #[serde(default)]
    pub model: Option<String>,
}

impl GenerateRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.prompt.trim().is_empty() {
            return Some("Prompt cannot be empty".to_string());
        }
        if self.max_tokens == 0 {
            return Some("max_tokens must be greater than zero".to_string());
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Some("temperature must be between 0.0 and 2.0".to_string());
        }
        None
    }
}
