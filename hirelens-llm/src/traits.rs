use async_trait::async_trait;
use hirelens_common::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmResponse {
    pub text: String,
    pub model: Option<String>,
    pub tokens_used: Option<u32>,
}

/// Sampling temperature used for article summaries.
pub const SUMMARY_TEMPERATURE: f32 = 0.4;

#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Generate a response to the given prompt with optional system prompt
    async fn generate(
        &self,
        prompt: &str,
        system_prompt: Option<&str>,
        max_tokens: Option<u32>,
        temperature: Option<f32>,
    ) -> Result<LlmResponse>;

    /// Check if the LLM service is available
    async fn health_check(&self) -> Result<bool>;

    /// Get the model name being used
    fn model_name(&self) -> &str;

    /// Summarize one article for the given company with the hiring-lens
    /// editorial focus. `max_prompt_chars` caps the article content placed
    /// in the prompt (character-wise, never mid-code-point).
    async fn summarize_article(
        &self,
        company: &str,
        article_text: &str,
        max_prompt_chars: usize,
    ) -> Result<String> {
        let prompt = build_summary_prompt(company, article_text, max_prompt_chars);
        tracing::debug!(
            company,
            prompt_len = prompt.len(),
            "llm.summarize.prompt_ready"
        );

        let response = self
            .generate(&prompt, None, None, Some(SUMMARY_TEMPERATURE))
            .await?;
        tracing::debug!(
            model = response.model.as_deref().unwrap_or("-"),
            tokens = ?response.tokens_used,
            "llm.summarize.done"
        );
        Ok(response.text)
    }
}

/// The fixed editorial prompt driving every summary.
pub fn build_summary_prompt(company: &str, article_text: &str, max_prompt_chars: usize) -> String {
    let content = truncate_chars(article_text, max_prompt_chars);
    format!(
        r#"Summarize the following article content with a focus on:
1. Workforce trends of {company}
2. Business lines, deals, or restructuring
3. Any hiring signals or relevance for staffing services

Content:
{content}"#
    )
}

/// Truncate to at most `max_chars` characters, respecting char boundaries.
pub fn truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_is_char_boundary_safe() {
        // 'é' is two bytes; slicing at a byte offset would panic.
        let s = "éléphant";
        assert_eq!(truncate_chars(s, 3), "élé");
        assert_eq!(truncate_chars(s, 100), s);
        assert_eq!(truncate_chars("", 10), "");
    }

    #[test]
    fn prompt_carries_the_three_focus_points() {
        let p = build_summary_prompt("Acme", "Acme opened a hub.", 4000);
        assert!(p.contains("Workforce trends of Acme"));
        assert!(p.contains("Business lines, deals, or restructuring"));
        assert!(p.contains("hiring signals or relevance for staffing services"));
        assert!(p.ends_with("Acme opened a hub."));
    }

    #[test]
    fn prompt_truncates_long_content() {
        let long = "x".repeat(5000);
        let p = build_summary_prompt("Acme", &long, 4000);
        let content = p.split("Content:\n").nth(1).unwrap();
        assert_eq!(content.chars().count(), 4000);
    }
}
