//! Ollama API client

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Ollama service status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OllamaStatus {
    /// Service is running and ready
    Running,
    /// Service is stopped
    Stopped,
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

/// Response from the completion endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateResponse {
    /// The generated completion text
    pub response: String,
    #[serde(default)]
    pub done: bool,
    /// Tokens consumed by the prompt
    pub prompt_eval_count: Option<u64>,
    /// Tokens generated
    pub eval_count: Option<u64>,
}

/// Ollama API client
#[derive(Debug, Clone)]
pub struct OllamaClient {
    base_url: String,
    client: reqwest::Client,
}

impl OllamaClient {
    /// Create a new client.
    ///
    /// The client carries no request timeout: a completion call blocks until
    /// the endpoint answers or the connection drops. Only the health probe
    /// applies its own short timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Check if Ollama is running
    pub async fn health_check(&self) -> Result<bool> {
        let url = format!("{}/api/tags", self.base_url);

        match self
            .client
            .get(&url)
            .timeout(Duration::from_secs(5))
            .send()
            .await
        {
            Ok(resp) => Ok(resp.status().is_success()),
            Err(_) => Ok(false),
        }
    }

    /// Get current status
    pub async fn status(&self) -> OllamaStatus {
        if self.health_check().await.unwrap_or(false) {
            OllamaStatus::Running
        } else {
            OllamaStatus::Stopped
        }
    }

    /// Run a single blocking completion against /api/generate
    pub async fn generate(&self, model: &str, prompt: &str) -> Result<GenerateResponse> {
        let url = format!("{}/api/generate", self.base_url);

        let req = GenerateRequest {
            model,
            prompt,
            stream: false,
        };

        debug!(model, prompt_len = prompt.len(), "Sending generate request");

        let resp: GenerateResponse = self
            .client
            .post(&url)
            .json(&req)
            .send()
            .await
            .context("Failed to connect to Ollama")?
            .error_for_status()
            .context("Generate request failed")?
            .json()
            .await
            .context("Failed to parse generate response")?;

        debug!(
            response_len = resp.response.len(),
            prompt_tokens = resp.prompt_eval_count,
            completion_tokens = resp.eval_count,
            "Received generate response"
        );

        Ok(resp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_response_deserializes() {
        let json = r#"{
            "model": "internlm2:1.8b-chat-v2.5-q2_K",
            "created_at": "2024-11-02T17:21:08Z",
            "response": "{\"final_answer\": \"Hi\"}",
            "done": true,
            "prompt_eval_count": 181,
            "eval_count": 12
        }"#;

        let resp: GenerateResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.response, "{\"final_answer\": \"Hi\"}");
        assert!(resp.done);
        assert_eq!(resp.prompt_eval_count, Some(181));
    }

    #[test]
    fn test_generate_response_minimal() {
        // Ollama omits token counts for some models
        let resp: GenerateResponse = serde_json::from_str(r#"{"response": "hi"}"#).unwrap();
        assert_eq!(resp.response, "hi");
        assert!(!resp.done);
        assert_eq!(resp.eval_count, None);
    }

    #[test]
    fn test_generate_request_serializes() {
        let req = GenerateRequest {
            model: "llama3.2",
            prompt: "Say hi",
            stream: false,
        };
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value["model"], "llama3.2");
        assert_eq!(value["stream"], false);
    }
}
