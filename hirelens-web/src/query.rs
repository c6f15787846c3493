//! Search string construction for company research runs.

/// Geographic reach of a research run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchScope {
    /// Restrict results to one country/location.
    Local,
    /// Search without a location qualifier.
    Global,
}

/// Build the single search string a run is driven by.
///
/// Global scope, or a location of "all" (case-insensitive), drops the
/// location qualifier entirely.
pub fn build_search_query(company: &str, location: &str, scope: SearchScope) -> String {
    let company = company.trim();
    let location = location.trim();

    let everywhere = scope == SearchScope::Global || location.eq_ignore_ascii_case("all");
    if everywhere {
        format!("{company} workforce trends and business expansion news")
    } else {
        format!("{company} workforce trends and business expansion news in {location}")
    }
}
