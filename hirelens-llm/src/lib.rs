//! Provider-agnostic LLM integration for HireLens.
//!
//! This crate exposes a common [`traits::LlmClient`] interface and concrete
//! provider implementations for Azure OpenAI, OpenAI, and Ollama. It also
//! provides a convenience function to initialize a client from a
//! [`hirelens_common::LlmConfig`].
//!
//! # Examples
//! ```no_run
//! use hirelens_common::{LlmConfig, Result};
//! use hirelens_llm::ensure_llm_ready;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<()> {
//! let cfg = LlmConfig::None; // or provider variant under appropriate features
//! let client = ensure_llm_ready(&cfg).await?;
//! assert!(!client.model_name().is_empty());
//! # Ok(())
//! # }
//! ```
#[cfg(feature = "azure")]
pub mod azure;
pub mod chat;
#[cfg(feature = "ollama")]
pub mod ollama;
#[cfg(feature = "openai")]
pub mod openai;
pub mod traits;

use std::sync::Arc;

use hirelens_common::{HireLensError, LlmConfig};
use traits::LlmClient;

/// Default OpenAI model for summarization when none is configured.
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";

/// Build a ready-to-use LLM client from configuration.
pub async fn ensure_llm_ready(
    config: &LlmConfig,
) -> hirelens_common::Result<Arc<dyn LlmClient + Send + Sync + 'static>> {
    match config {
        #[cfg(feature = "azure")]
        LlmConfig::AzureOpenAi {
            endpoint,
            deployment,
            api_key,
            api_version,
        } => {
            let client = azure::AzureOpenAiClient::new(
                endpoint,
                deployment.clone(),
                api_key.clone(),
                api_version.clone(),
            )?;
            Ok(Arc::new(client))
        }
        #[cfg(feature = "openai")]
        LlmConfig::OpenAi { api_key, model } => {
            let client = openai::OpenAiClient::new(api_key.clone(), model.clone())?;
            Ok(Arc::new(client))
        }
        #[cfg(feature = "ollama")]
        LlmConfig::Ollama { base_url, model } => {
            let client = ollama::OllamaClient::new(base_url.clone(), model.clone()).await?;
            Ok(Arc::new(client))
        }
        LlmConfig::None => Err(HireLensError::Config("No LLM configured".to_string())),
        #[allow(unreachable_patterns)]
        _ => Err(HireLensError::Config(
            "LLM provider not enabled".to_string(),
        )),
    }
}
