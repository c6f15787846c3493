//! The research run: one query, one search, a sequential fetch+summarize
//! loop over the returned links. No caching, no deduplication, no parallel
//! fetches; link order is the provider's order throughout.

use std::sync::Arc;
use std::time::Duration;

use hirelens_common::Result;
use hirelens_config::HireLensConfig;
use hirelens_llm::ensure_llm_ready;
use hirelens_llm::traits::LlmClient;
use hirelens_web::fetch::PageFetcher;
use hirelens_web::query::{build_search_query, SearchScope};
use hirelens_web::serpapi::SerpApiClient;
use uuid::Uuid;

use crate::report::{ReportEntry, ResearchReport};

pub struct Pipeline {
    search: SerpApiClient,
    fetcher: PageFetcher,
    llm: Arc<dyn LlmClient + Send + Sync>,
    result_count: usize,
    max_prompt_chars: usize,
}

impl Pipeline {
    /// Assemble a pipeline from pre-built components. Tests use this with
    /// mock-backed clients.
    pub fn new(
        search: SerpApiClient,
        fetcher: PageFetcher,
        llm: Arc<dyn LlmClient + Send + Sync>,
        result_count: usize,
        max_prompt_chars: usize,
    ) -> Self {
        Self {
            search,
            fetcher,
            llm,
            result_count,
            max_prompt_chars,
        }
    }

    /// Build every component from configuration.
    pub async fn from_config(cfg: &HireLensConfig) -> Result<Self> {
        let search = SerpApiClient::new(cfg.search.api_key.clone())?;
        let fetcher = PageFetcher::new(
            Duration::from_secs(cfg.fetch.timeout_secs),
            cfg.fetch.max_paragraphs,
        )?;
        let llm = ensure_llm_ready(&cfg.llm.to_llm_config()).await?;

        Ok(Self::new(
            search,
            fetcher,
            llm,
            cfg.search.result_count,
            cfg.fetch.max_prompt_chars,
        ))
    }

    pub fn with_result_count(mut self, n: usize) -> Self {
        self.result_count = n;
        self
    }

    /// Run the whole flow for one company and return the report.
    ///
    /// A failed search aborts the run; a failed fetch only drops that page
    /// (the fetcher hands back empty text, which is skipped); a failed
    /// summary aborts the run.
    pub async fn run(
        &self,
        company: &str,
        location: &str,
        scope: SearchScope,
    ) -> Result<ResearchReport> {
        let run_id = Uuid::new_v4();
        let query = build_search_query(company, location, scope);
        tracing::info!(
            %run_id,
            company,
            location,
            ?scope,
            query = %query,
            model = self.llm.model_name(),
            "run.start"
        );

        let hits = self.search.top_hits(&query, self.result_count).await?;
        let links: Vec<_> = hits.iter().map(|h| h.url.clone()).collect();

        let mut entries = Vec::with_capacity(hits.len());
        for hit in &hits {
            let page = self.fetcher.fetch(&hit.url).await;
            if page.is_empty() {
                tracing::warn!(%run_id, url = %hit.url, "run.page_skipped.no_text");
                continue;
            }

            let summary = self
                .llm
                .summarize_article(company, &page.text, self.max_prompt_chars)
                .await?;
            tracing::info!(
                %run_id,
                url = %hit.url,
                rank = hit.rank,
                summary_len = summary.len(),
                "run.page_summarized"
            );
            entries.push(ReportEntry {
                url: hit.url.clone(),
                summary,
            });
        }

        tracing::info!(
            %run_id,
            links = links.len(),
            summarized = entries.len(),
            "run.done"
        );
        Ok(ResearchReport {
            query,
            links,
            entries,
        })
    }
}
