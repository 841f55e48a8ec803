//! LLM Gateway - an HTTP gateway for a local Ollama backend
//!
//! Deduplicates identical generation requests through an in-memory
//! TTL response cache and probes upstream health.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod tasks;
pub mod upstream;

pub use api::AppState;
pub use config::Config;
pub use tasks::spawn_sweep_task;
