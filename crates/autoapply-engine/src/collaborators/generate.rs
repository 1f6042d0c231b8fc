//! HTTP completion client for answer generation.

use crate::config::GeneratorConfig;
use async_trait::async_trait;
use autoapply_core::collab::{GenerationError, Generator};
use serde_json::json;
use std::time::Duration;
use tracing::debug;

/// Posts prompts to an OpenAI-compatible completions endpoint.
pub struct HttpGenerator {
    http: reqwest::Client,
    endpoint: String,
    model: String,
    max_tokens: u32,
}

impl HttpGenerator {
    pub fn new(config: &GeneratorConfig) -> Result<Self, GenerationError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .build()
            .map_err(|e| GenerationError::Request(e.to_string()))?;
        Ok(Self {
            http,
            endpoint: config.endpoint.clone(),
            model: config.model.clone(),
            max_tokens: config.max_tokens,
        })
    }
}

#[async_trait]
impl Generator for HttpGenerator {
    async fn complete(&self, prompt: &str) -> Result<String, GenerationError> {
        debug!(endpoint = %self.endpoint, chars = prompt.len(), "Requesting completion");
        let response = self
            .http
            .post(&self.endpoint)
            .json(&json!({
                "model": self.model,
                "prompt": prompt,
                "max_tokens": self.max_tokens,
                "n": 1,
            }))
            .send()
            .await
            .map_err(|e| GenerationError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(GenerationError::Request(format!(
                "completion endpoint returned {}",
                status
            )));
        }

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| GenerationError::Malformed(e.to_string()))?;

        body["choices"][0]["text"]
            .as_str()
            .map(|s| s.to_string())
            .ok_or_else(|| {
                GenerationError::Malformed("response missing choices[0].text".to_string())
            })
    }
}
