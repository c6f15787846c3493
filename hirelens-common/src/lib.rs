//! Common types and utilities shared across HireLens crates.
//!
//! This crate defines the shared error type, the provider-agnostic LLM
//! configuration, and observability helpers used throughout the HireLens
//! workspace. It is intentionally lightweight so that all crates can depend
//! on it without heavy transitive costs.
//!
//! # Overview
//!
//! - [`LlmConfig`]: Provider-agnostic LLM configuration
//! - [`observability`]: Centralised tracing/logging initialisation
//! - [`HireLensError`] and [`Result`]: Shared error handling
use serde::{Deserialize, Serialize};

pub mod observability;

/// Configuration for an LLM provider used by the summarizer.
///
/// Feature flags control which variants are compiled in.
/// See the `hirelens-llm` crate for concrete client implementations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum LlmConfig {
    /// Azure OpenAI deployment (the provider the research flow was built
    /// against). `api_version` falls back to a current preview version
    /// when omitted.
    #[cfg(feature = "azure")]
    AzureOpenAi {
        endpoint: String,
        deployment: String,
        api_key: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        api_version: Option<String>,
    },
    #[cfg(feature = "openai")]
    OpenAi { api_key: String, model: String },
    #[cfg(feature = "ollama")]
    Ollama { base_url: String, model: String },
    None,
}

impl Default for LlmConfig {
    fn default() -> Self {
        // Default to a local Ollama if the feature is enabled
        #[cfg(feature = "ollama")]
        {
            Self::Ollama {
                base_url: "http://localhost:11434".to_string(),
                model: "llama3".to_string(),
            }
        }
        #[cfg(not(feature = "ollama"))]
        {
            Self::None
        }
    }
}

/// Error types used across the HireLens system.
#[derive(thiserror::Error, Debug)]
pub enum HireLensError {
    /// The web search provider failed; without links there is no run.
    #[error("Search error: {0}")]
    Search(String),

    /// An LLM provider failed to produce a summary.
    #[error("Llm error: {0}")]
    Llm(String),

    /// Configuration was incomplete or invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A lower-level transport or IO failure.
    #[error("Transport error: {0}")]
    Transport(#[from] anyhow::Error),
}

/// Convenient alias for results that use [`HireLensError`].
pub type Result<T> = std::result::Result<T, HireLensError>;
