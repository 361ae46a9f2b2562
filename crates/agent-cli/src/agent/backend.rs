//! Completion backend seam

use anyhow::Result;
use async_trait::async_trait;
use llm_core::OllamaClient;

/// A blocking text-completion endpoint: one prompt in, one string out.
///
/// The agent loop takes this as an explicit dependency so tests can
/// substitute a deterministic stub.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    async fn complete(&self, model: &str, prompt: &str) -> Result<String>;
}

#[async_trait]
impl CompletionBackend for OllamaClient {
    async fn complete(&self, model: &str, prompt: &str) -> Result<String> {
        let resp = self.generate(model, prompt).await?;
        Ok(resp.response)
    }
}
