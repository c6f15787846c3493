//! SerpAPI (Google engine) discovery client.

mod client;
mod types;

pub use client::SerpApiClient;
pub use types::{collect_organic_hits, OrganicResult, SearchHit, SearchResponse};
