use async_trait::async_trait;
use hirelens_common::{HireLensError, Result};
use hirelens_http::{Auth, HttpClient, HttpError, RequestOpts};

use crate::chat::{build_messages, first_content, ChatRequest, ChatResponse};
use crate::traits::{LlmClient, LlmResponse};

const OPENAI_API_BASE: &str = "https://api.openai.com/v1/";

pub struct OpenAiClient {
    client: HttpClient,
    api_key: String,
    model: String,
}

impl OpenAiClient {
    pub fn new(api_key: String, model: String) -> Result<Self> {
        let client = HttpClient::new(OPENAI_API_BASE)
            .map_err(|e| HireLensError::Llm(format!("HttpClient init failed: {e}")))?;

        Ok(Self {
            client,
            api_key,
            model,
        })
    }
}

#[async_trait]
impl LlmClient for OpenAiClient {
    async fn generate(
        &self,
        prompt: &str,
        system_prompt: Option<&str>,
        max_tokens: Option<u32>,
        temperature: Option<f32>,
    ) -> Result<LlmResponse> {
        let req = ChatRequest {
            model: Some(self.model.clone()),
            messages: build_messages(prompt, system_prompt),
            temperature,
            max_tokens,
        };

        let resp: ChatResponse = self
            .client
            .post_json(
                "chat/completions",
                &req,
                RequestOpts {
                    auth: Some(Auth::Bearer(&self.api_key)),
                    ..Default::default()
                },
            )
            .await
            .map_err(http_to_llm)?;

        Ok(LlmResponse {
            text: first_content(&resp),
            model: resp.model.clone(),
            tokens_used: resp.usage.and_then(|u| u.total_tokens),
        })
    }

    fn model_name(&self) -> &str {
        &self.model
    }

    async fn health_check(&self) -> Result<bool> {
        match self
            .generate("Respond with just 'OK'", None, Some(5), Some(0.1))
            .await
        {
            Ok(_) => Ok(true),
            Err(e) => {
                tracing::warn!("OpenAI health check failed: {}", e);
                Ok(false)
            }
        }
    }
}

fn http_to_llm(e: HttpError) -> HireLensError {
    HireLensError::Llm(format!("{e}"))
}
