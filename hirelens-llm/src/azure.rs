use async_trait::async_trait;
use hirelens_common::{HireLensError, Result};
use hirelens_http::{Auth, HttpClient, HttpError, RequestOpts};
use reqwest::header::{HeaderName, HeaderValue};

use crate::chat::{build_messages, first_content, ChatRequest, ChatResponse};
use crate::traits::{LlmClient, LlmResponse};

pub const DEFAULT_API_VERSION: &str = "2025-01-01-preview";

/// Azure OpenAI chat-completions client. The model is selected by the
/// deployment name in the URL, not by a request field, and the key travels
/// in an `api-key` header rather than a bearer token.
pub struct AzureOpenAiClient {
    client: HttpClient,
    api_key: String,
    deployment: String,
    api_version: String,
}

impl AzureOpenAiClient {
    /// `endpoint` is the resource root, e.g. `https://myres.openai.azure.com`.
    pub fn new(
        endpoint: &str,
        deployment: String,
        api_key: String,
        api_version: Option<String>,
    ) -> Result<Self> {
        let client = HttpClient::new(endpoint)
            .map_err(|e| HireLensError::Llm(format!("HttpClient init failed: {e}")))?;

        Ok(Self {
            client,
            api_key,
            deployment,
            api_version: api_version.unwrap_or_else(|| DEFAULT_API_VERSION.to_string()),
        })
    }

    fn completions_path(&self) -> String {
        format!("openai/deployments/{}/chat/completions", self.deployment)
    }
}

#[async_trait]
impl LlmClient for AzureOpenAiClient {
    async fn generate(
        &self,
        prompt: &str,
        system_prompt: Option<&str>,
        max_tokens: Option<u32>,
        temperature: Option<f32>,
    ) -> Result<LlmResponse> {
        let req = ChatRequest {
            model: None, // deployment carries the model on Azure
            messages: build_messages(prompt, system_prompt),
            temperature,
            max_tokens,
        };

        let key = HeaderValue::from_str(&self.api_key)
            .map_err(|e| HireLensError::Llm(format!("invalid api-key header: {e}")))?;

        let resp: ChatResponse = self
            .client
            .post_json(
                &self.completions_path(),
                &req,
                RequestOpts {
                    auth: Some(Auth::Header {
                        name: HeaderName::from_static("api-key"),
                        value: key,
                    }),
                    query: Some(vec![("api-version", self.api_version.as_str().into())]),
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
        &self.deployment
    }

    async fn health_check(&self) -> Result<bool> {
        match self
            .generate("Respond with just 'OK'", None, Some(5), Some(0.1))
            .await
        {
            Ok(_) => Ok(true),
            Err(e) => {
                tracing::warn!("Azure OpenAI health check failed: {}", e);
                Ok(false)
            }
        }
    }
}

fn http_to_llm(e: HttpError) -> HireLensError {
    HireLensError::Llm(format!("{e}"))
}
