use serde::Deserialize;
use url::Url;

/// Response envelope for `GET /search.json`.
///
/// SerpAPI returns far more verticals than we consume (news, knowledge
/// graph, ads); only the organic results drive the research run, so the
/// rest is left undeclared and dropped by serde.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub search_metadata: Option<SearchMetadata>,
    #[serde(default)]
    pub organic_results: Vec<OrganicResult>,
    /// Present when SerpAPI accepted the request but the search itself
    /// failed (e.g. "Google hasn't returned any results for this query.").
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchMetadata {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// One entry of `organic_results`. Every field is optional in practice;
/// entries without a `link` are skipped during collection.
#[derive(Debug, Clone, Deserialize)]
pub struct OrganicResult {
    #[serde(default)]
    pub position: Option<u32>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub snippet: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
}

/// A ranked search hit kept for the run, in provider order.
#[derive(Debug, Clone)]
pub struct SearchHit {
    pub rank: u32,
    pub url: Url,
    pub title: Option<String>,
    pub snippet: Option<String>,
}

/// Collect organic links in provider order, skipping entries without a
/// parseable link, capped at `limit`. No deduplication.
pub fn collect_organic_hits(resp: &SearchResponse, limit: usize) -> Vec<SearchHit> {
    let mut out = Vec::new();
    for it in &resp.organic_results {
        if out.len() >= limit {
            break;
        }
        let Some(url) = it.link.as_deref().and_then(|s| Url::parse(s).ok()) else {
            continue;
        };
        out.push(SearchHit {
            rank: (out.len() + 1) as u32,
            url,
            title: it.title.clone(),
            snippet: it.snippet.clone(),
        });
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "search_metadata": { "id": "653aa1", "status": "Success" },
        "search_parameters": { "engine": "google", "q": "acme workforce trends" },
        "organic_results": [
            {
                "position": 1,
                "title": "Acme expands engineering hub",
                "link": "https://news.example.com/acme-hub",
                "snippet": "Acme announced 500 new roles...",
                "date": "Jan 12, 2025"
            },
            {
                "position": 2,
                "title": "Entry with no link"
            },
            {
                "position": 3,
                "title": "Acme restructures sales org",
                "link": "https://biz.example.org/acme-restructure"
            },
            {
                "position": 4,
                "title": "Acme quarterly report",
                "link": "https://ir.example.com/q4"
            }
        ]
    }"#;

    #[test]
    fn parses_serpapi_sample() {
        let resp: SearchResponse = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(resp.organic_results.len(), 4);
        assert_eq!(
            resp.search_metadata.unwrap().status.as_deref(),
            Some("Success")
        );
        assert!(resp.error.is_none());
    }

    #[test]
    fn collection_skips_linkless_and_keeps_order() {
        let resp: SearchResponse = serde_json::from_str(SAMPLE).unwrap();
        let hits = collect_organic_hits(&resp, 5);
        assert_eq!(hits.len(), 3);
        assert_eq!(hits[0].url.as_str(), "https://news.example.com/acme-hub");
        assert_eq!(
            hits[1].url.as_str(),
            "https://biz.example.org/acme-restructure"
        );
        assert_eq!(hits[0].rank, 1);
        assert_eq!(hits[2].rank, 3);
    }

    #[test]
    fn collection_respects_limit() {
        let resp: SearchResponse = serde_json::from_str(SAMPLE).unwrap();
        let hits = collect_organic_hits(&resp, 2);
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[1].url.as_str(), "https://biz.example.org/acme-restructure");
    }
}
