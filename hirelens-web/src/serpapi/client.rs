use std::borrow::Cow;
use std::time::Instant;

use hirelens_common::{HireLensError, Result};
use hirelens_http::{Auth, HttpClient, RequestOpts};

use super::types::{collect_organic_hits, SearchHit, SearchResponse};

const SERPAPI_BASE: &str = "https://serpapi.com";

/// Minimal client for the SerpAPI Google engine.
#[derive(Clone)]
pub struct SerpApiClient {
    http: HttpClient,
    api_key: String,
}

impl SerpApiClient {
    pub fn new(api_key: String) -> Result<Self> {
        Self::with_base(api_key, SERPAPI_BASE)
    }

    /// Anchor the client to a non-default base URL. Integration tests use
    /// this to point at a local mock server.
    pub fn with_base(api_key: String, base: &str) -> Result<Self> {
        let http = HttpClient::new(base)
            .map_err(|e| HireLensError::Search(format!("HttpClient init failed: {e}")))?;
        Ok(Self { http, api_key })
    }

    /// Run one Google search and keep the first `count` organic links in
    /// provider order. No pagination and no deduplication; a failed search
    /// is an error because the run has nothing to work with without links.
    pub async fn top_hits(&self, query: &str, count: usize) -> Result<Vec<SearchHit>> {
        let count_param = count.to_string();
        let params: Vec<(&str, Cow<'_, str>)> = vec![
            ("engine", "google".into()),
            ("q", query.into()),
            ("num", count_param.as_str().into()),
        ];

        let query_snippet = log_snippet(query);
        let started = Instant::now();
        tracing::info!(
            target: "web.serpapi",
            query = %query_snippet,
            count,
            "serpapi.search.start"
        );

        let resp: SearchResponse = match self
            .http
            .get_json(
                "search.json",
                RequestOpts {
                    auth: Some(Auth::Query {
                        name: "api_key",
                        value: Cow::Borrowed(self.api_key.as_str()),
                    }),
                    query: Some(params),
                    retries: Some(0),
                    ..Default::default()
                },
            )
            .await
        {
            Ok(resp) => resp,
            Err(e) => {
                tracing::warn!(
                    target: "web.serpapi",
                    query = %query_snippet,
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    error = %e,
                    "serpapi.search.error"
                );
                return Err(HireLensError::Search(format!(
                    "serpapi request failed: {e}"
                )));
            }
        };

        if let Some(msg) = resp.error.as_deref() {
            tracing::warn!(target: "web.serpapi", query = %query_snippet, message = %msg, "serpapi.search.rejected");
            return Err(HireLensError::Search(msg.to_string()));
        }

        let hits = collect_organic_hits(&resp, count);
        tracing::info!(
            target: "web.serpapi",
            query = %query_snippet,
            elapsed_ms = started.elapsed().as_millis() as u64,
            hit_count = hits.len(),
            "serpapi.search.success"
        );
        Ok(hits)
    }
}

fn log_snippet(query: &str) -> String {
    if query.chars().count() > 160 {
        let cut: String = query.chars().take(160).collect();
        format!("{cut}…")
    } else {
        query.to_string()
    }
}
