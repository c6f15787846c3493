//! Paragraph extraction from fetched HTML.
//!
//! The research flow only ever reads `<p>` content; navigation chrome,
//! scripts, and styles never reach the summarizer.

use scraper::{Html, Selector};

/// Extract `<p>` texts in document order, whitespace-collapsed, skipping
/// empty paragraphs, capped at `max_paragraphs`.
pub fn paragraphs(html: &str, max_paragraphs: usize) -> Vec<String> {
    let doc = Html::parse_document(html);
    let p = Selector::parse("p").expect("static selector");

    doc.select(&p)
        .filter_map(|el| {
            let text = el
                .text()
                .collect::<Vec<_>>()
                .join(" ")
                .split_whitespace()
                .collect::<Vec<_>>()
                .join(" ");
            (!text.is_empty()).then_some(text)
        })
        .take(max_paragraphs)
        .collect()
}

/// Paragraphs joined with newlines — the text handed to the summarizer.
pub fn paragraph_text(html: &str, max_paragraphs: usize) -> String {
    paragraphs(html, max_paragraphs).join("\n")
}
