//! Single-GET page acquisition.
//!
//! One GET per link, fixed timeout, no retries. Any transport failure is
//! swallowed into an empty page so the run can continue with the remaining
//! links; the summarizer skips empty pages.

use std::time::Duration;

use chrono::{DateTime, Utc};
use hirelens_common::{HireLensError, Result};
use hirelens_http::{HttpClient, RequestOpts};
use url::Url;

use crate::extract;

/// Extracted text for one fetched page.
#[derive(Debug, Clone)]
pub struct PageText {
    pub url: Url,
    pub text: String,
    pub retrieved_at: DateTime<Utc>,
}

impl PageText {
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}

pub struct PageFetcher {
    http: HttpClient,
    max_paragraphs: usize,
}

impl PageFetcher {
    /// `timeout` bounds the whole GET; `max_paragraphs` caps extraction.
    pub fn new(timeout: Duration, max_paragraphs: usize) -> Result<Self> {
        // The base is never joined against: every fetch passes an absolute
        // result URL with `allow_absolute`.
        let http = HttpClient::new("http://localhost")
            .map_err(|e| HireLensError::Config(format!("HttpClient init failed: {e}")))?
            .with_timeout(timeout)
            .with_retries(0);
        Ok(Self {
            http,
            max_paragraphs,
        })
    }

    /// Fetch one page and extract its paragraph text. Infallible by
    /// contract: transport errors produce an empty `PageText`.
    pub async fn fetch(&self, url: &Url) -> PageText {
        let text = match self
            .http
            .get_text(
                url.as_str(),
                RequestOpts {
                    allow_absolute: true,
                    retries: Some(0),
                    ..Default::default()
                },
            )
            .await
        {
            Ok(html) => {
                let text = extract::paragraph_text(&html, self.max_paragraphs);
                tracing::debug!(
                    target: "web.fetch",
                    url = %url,
                    html_len = html.len(),
                    text_len = text.len(),
                    "fetch.page"
                );
                text
            }
            Err(e) => {
                tracing::warn!(
                    target: "web.fetch",
                    url = %url,
                    error = %e,
                    "fetch.error.treating_as_empty"
                );
                String::new()
            }
        };

        PageText {
            url: url.clone(),
            text,
            retrieved_at: Utc::now(),
        }
    }
}
