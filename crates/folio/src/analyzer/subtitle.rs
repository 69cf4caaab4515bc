// ABOUTME: Subtitle (deck/standfirst) detection from class markers or the opening paragraphs.
// ABOUTME: Returns None when nothing suitable exists; that is a normal outcome.

use aho_corasick::AhoCorasick;
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

use crate::dom::flow::{element_text, paragraphs};

/// Class fragments that mark a subtitle, in priority order.
const SUBTITLE_MARKERS: &[&str] = &["subtitle", "deck", "standfirst", "dek", "subheadline", "excerpt"];

/// A marked element must be longer than this to count.
const MIN_MARKED_CHARS: usize = 30;

/// Opening-paragraph fallback window, exclusive on both ends.
const LEAD_MIN_CHARS: usize = 80;
const LEAD_MAX_CHARS: usize = 300;

/// How many opening paragraphs the fallback inspects.
const LEAD_PARAGRAPHS: usize = 2;

static MARKER_MATCHER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .ascii_case_insensitive(true)
        .build(SUBTITLE_MARKERS)
        .unwrap()
});

static CLASSED: Lazy<Selector> = Lazy::new(|| Selector::parse("[class]").unwrap());

/// For each marker, the first element (document order) whose class contains it.
fn first_marked_elements(doc: &Html) -> Vec<Option<ElementRef<'_>>> {
    let mut firsts: Vec<Option<ElementRef<'_>>> = vec![None; SUBTITLE_MARKERS.len()];
    for element in doc.select(&CLASSED) {
        let class = element.value().attr("class").unwrap_or("");
        for m in MARKER_MATCHER.find_overlapping_iter(class) {
            let slot = &mut firsts[m.pattern().as_usize()];
            if slot.is_none() {
                *slot = Some(element);
            }
        }
    }
    firsts
}

/// Find a subtitle for the article body.
pub fn extract_subtitle(doc: &Html, title: &str) -> Option<String> {
    let title = title.trim();

    for (marker, element) in SUBTITLE_MARKERS.iter().zip(first_marked_elements(doc)) {
        let Some(element) = element else {
            continue;
        };
        let text = element_text(&element);
        if !text.is_empty() && text != title && text.chars().count() > MIN_MARKED_CHARS {
            tracing::debug!(marker, "subtitle taken from marked element");
            return Some(text);
        }
    }

    for paragraph in paragraphs(doc).iter().take(LEAD_PARAGRAPHS) {
        let text = element_text(paragraph);
        let len = text.chars().count();
        if text != title && LEAD_MIN_CHARS < len && len < LEAD_MAX_CHARS {
            tracing::debug!("subtitle taken from opening paragraph");
            return Some(text);
        }
    }

    None
}
