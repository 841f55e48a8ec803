//! Upstream Module
//!
//! Client for the Ollama text-generation backend.

mod ollama;

pub use ollama::{build_generate_body, OllamaClient};
