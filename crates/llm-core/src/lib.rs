//! llm-core: Shared library for local LLM access
//!
//! Provides:
//! - Configuration loading (agent.toml)
//! - Ollama API client (completion endpoint + health checks)

pub mod config;
pub mod ollama;

pub use config::Config;
pub use ollama::{GenerateResponse, OllamaClient, OllamaStatus};
