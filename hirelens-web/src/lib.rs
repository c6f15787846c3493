//! Web discovery and acquisition utilities.
//!
//! - Search query construction (`query`) with the hiring-lens editorial focus
//! - SerpAPI client (`serpapi`) for organic-result discovery
//! - Single-GET page fetcher (`fetch`) that treats failures as empty pages
//! - Paragraph extraction from HTML (`extract`)

pub mod extract;
pub mod fetch;
pub mod query;
pub mod serpapi;
