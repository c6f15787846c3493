//! Plain-text rendering of a research run.

use url::Url;

#[derive(Debug)]
pub struct ResearchReport {
    pub query: String,
    pub links: Vec<Url>,
    pub entries: Vec<ReportEntry>,
}

#[derive(Debug)]
pub struct ReportEntry {
    pub url: Url,
    pub summary: String,
}

/// Render the report the way the run unfolded: the query, the ordered link
/// list, then one block per summarized page.
pub fn render(report: &ResearchReport) -> String {
    let mut out = String::new();
    out.push_str(&format!("Searching for: {}\n\n", report.query));

    out.push_str("Top links found:\n");
    for link in &report.links {
        out.push_str(&format!("- {link}\n"));
    }
    out.push('\n');

    if report.entries.is_empty() {
        out.push_str("No pages could be summarized.\n");
        return out;
    }

    for entry in &report.entries {
        out.push_str(&format!("Summary from: {}\n", entry.url));
        out.push_str(entry.summary.trim_end());
        out.push_str("\n---\n");
    }
    out
}
