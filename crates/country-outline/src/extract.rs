//! Heading extraction and outline assembly.

use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::types::{HeadingNode, Outline, OutlineError, OutlineResult};

/// Synthetic entry injected at the head of every outline. The source page's
/// table-of-contents link renders as a heading-like element, so the outline
/// carries one fixed `Contents` entry and suppresses the in-body original.
const CONTENTS_TEXT: &str = "Contents";

/// Extract the heading outline from the raw HTML of a Wikipedia article.
///
/// The output sequence is fixed: a synthetic level-2 `Contents` entry, the
/// level-1 page title when one is present, then every h2–h6 inside the
/// content region in document order. Once the content region is confirmed
/// present there are no further error exits.
pub fn extract_outline(html: &str) -> OutlineResult<Outline> {
    let content_selector = Selector::parse("#mw-content-text").unwrap();
    let title_selector = Selector::parse("h1#firstHeading").unwrap();
    let heading_selector = Selector::parse("h2, h3, h4, h5, h6").unwrap();

    let document = Html::parse_document(html);

    let content = document
        .select(&content_selector)
        .next()
        .ok_or(OutlineError::ContentRegionMissing)?;

    // The page title lives outside the content region, so it is searched
    // document-wide. Body-level h1s are never collected; the level-1 entry
    // comes solely from here.
    let title = document.select(&title_selector).next();

    let mut outline = Outline::new();
    outline.push(HeadingNode::new(2, CONTENTS_TEXT));

    if let Some(title) = title {
        let text = title.text().collect::<String>();
        outline.push(HeadingNode::new(1, text.trim()));
    }

    for element in content.select(&heading_selector) {
        let level = match element.value().name() {
            "h2" => 2,
            "h3" => 3,
            "h4" => 4,
            "h5" => 5,
            "h6" => 6,
            _ => continue,
        };

        let text = clean_heading_text(element);

        // The page's own in-body contents marker is already represented by
        // the synthetic entry; emitting it again would duplicate the line.
        if text.contains(CONTENTS_TEXT) {
            continue;
        }

        outline.push(HeadingNode::new(level, text));
    }

    debug!("extracted {} headings", outline.len());
    Ok(outline)
}

/// Concatenated descendant text, trimmed, with the interactive edit-link
/// labels removed wherever they occur.
fn clean_heading_text(element: ElementRef) -> String {
    let text = element.text().collect::<String>();
    text.trim().replace("[edit]", "").replace("[Edit]", "")
}
