use std::time::Duration;

use async_trait::async_trait;
use hirelens_common::{HireLensError, Result};
use serde_json::{json, Value as JsonValue};

use crate::traits::{LlmClient, LlmResponse};

const OLLAMA_CONNECTION_ERROR: &str = "No running Ollama server detected. Start it with: `ollama serve` (after installing). Install instructions: https://github.com/ollama/ollama";

/// Ollama client for local model inference.
///
/// Expects a running Ollama server (see https://github.com/ollama/ollama).
pub struct OllamaClient {
    client: reqwest::Client,
    base_url: String,
    model: String,
}

impl OllamaClient {
    /// Create a new client and verify the server is reachable. A model that
    /// is not present locally is reported but not pulled; summarization of
    /// a handful of pages does not justify a multi-gigabyte download.
    pub async fn new(base_url: String, model: String) -> Result<Self> {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| HireLensError::Llm(format!("Failed to create HTTP client: {}", e)))?;

        let ollama = Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            model,
        };

        let models = ollama.probe_server().await?;
        if !models.iter().any(|m| m == &ollama.model) {
            tracing::warn!(
                model = %ollama.model,
                "model not found locally; pull it with `ollama pull` before running"
            );
        }

        Ok(ollama)
    }

    /// Hit `/api/tags`; doubles as reachability probe and model listing.
    async fn probe_server(&self) -> Result<Vec<String>> {
        let url = format!("{}/api/tags", self.base_url);
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|_| HireLensError::Llm(OLLAMA_CONNECTION_ERROR.to_string()))?;

        if !resp.status().is_success() {
            return Err(HireLensError::Llm(OLLAMA_CONNECTION_ERROR.to_string()));
        }

        let val: JsonValue = resp
            .json()
            .await
            .map_err(|e| HireLensError::Llm(format!("Failed to parse models response: {}", e)))?;

        Ok(val
            .get("models")
            .and_then(|m| m.as_array())
            .map(|arr| {
                arr.iter()
                    .filter_map(|v| v.get("name").and_then(|n| n.as_str()))
                    .map(|s| s.to_string())
                    .collect()
            })
            .unwrap_or_default())
    }
}

#[async_trait]
impl LlmClient for OllamaClient {
    async fn generate(
        &self,
        prompt: &str,
        system_prompt: Option<&str>,
        max_tokens: Option<u32>,
        temperature: Option<f32>,
    ) -> Result<LlmResponse> {
        let url = format!("{}/api/generate", self.base_url);

        let mut options = serde_json::Map::new();
        if let Some(temp) = temperature {
            options.insert("temperature".to_string(), json!(temp));
        }
        if let Some(max_tok) = max_tokens {
            options.insert("num_predict".to_string(), json!(max_tok));
        }

        let mut payload = json!({
            "model": self.model,
            "prompt": prompt,
            "stream": false,
            "options": options
        });
        if let Some(sys) = system_prompt {
            payload["system"] = json!(sys);
        }

        let resp = self
            .client
            .post(&url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| HireLensError::Llm(format!("Generate request failed: {}", e)))?;

        if !resp.status().is_success() {
            return Err(HireLensError::Llm(format!(
                "Generate failed: HTTP {}",
                resp.status()
            )));
        }

        let val: JsonValue = resp
            .json()
            .await
            .map_err(|e| HireLensError::Llm(format!("Failed to parse response: {}", e)))?;

        let text = val
            .get("response")
            .and_then(|r| r.as_str())
            .unwrap_or("")
            .to_string();

        let tokens_used = val
            .get("eval_count")
            .and_then(|c| c.as_u64())
            .map(|c| c as u32);

        Ok(LlmResponse {
            text,
            model: Some(self.model.clone()),
            tokens_used,
        })
    }

    async fn health_check(&self) -> Result<bool> {
        Ok(self.probe_server().await.is_ok())
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
