// ABOUTME: Flow-level node classification and the shared paragraph index.
// ABOUTME: Analyzer and composer both count paragraphs through collect_paragraphs.

use ego_tree::NodeRef;
use scraper::{ElementRef, Html, Node};

/// Block-level tags that take part in composition.
const FLOW_TAGS: &[&str] = &[
    "p", "h1", "h2", "h3", "h4", "h5", "h6", "blockquote", "ul", "ol", "pre",
];

/// Figures are owned by the image placement, never carried over.
pub const FIGURE_TAG: &str = "figure";

/// Check if a tag name is a flow-level block.
pub fn is_flow_tag(name: &str) -> bool {
    FLOW_TAGS.iter().any(|t| t.eq_ignore_ascii_case(name))
}

/// Check if a tag name is a heading (h1-h6).
pub fn is_heading(name: &str) -> bool {
    matches!(
        name.to_ascii_lowercase().as_str(),
        "h1" | "h2" | "h3" | "h4" | "h5" | "h6"
    )
}

/// Normalize whitespace in text
pub fn normalize_spaces(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Whitespace-normalized text content of an element.
pub fn element_text(element: &ElementRef) -> String {
    normalize_spaces(&element.text().collect::<String>())
}

/// A `<p>` with no visible text.
pub fn is_empty_paragraph(element: &ElementRef) -> bool {
    element.value().name().eq_ignore_ascii_case("p")
        && element.text().all(|t| t.trim().is_empty())
}

fn is_counted_paragraph(element: &ElementRef) -> bool {
    element.value().name().eq_ignore_ascii_case("p") && !is_empty_paragraph(element)
}

/// Collect the counted paragraphs below `node` in document order.
///
/// Counted paragraphs are non-empty `<p>` elements outside any `<figure>`.
/// The node itself is not considered, only its descendants.
pub fn collect_paragraphs<'a>(node: NodeRef<'a, Node>, out: &mut Vec<ElementRef<'a>>) {
    for child in node.children() {
        if let Some(element) = ElementRef::wrap(child) {
            if element.value().name().eq_ignore_ascii_case(FIGURE_TAG) {
                continue;
            }
            if is_counted_paragraph(&element) {
                out.push(element);
            }
            collect_paragraphs(child, out);
        }
    }
}

/// All counted paragraphs of a parsed body, in document order.
pub fn paragraphs(doc: &Html) -> Vec<ElementRef<'_>> {
    let mut out = Vec::new();
    collect_paragraphs(*doc.root_element(), &mut out);
    out
}

/// Number of counted paragraphs an element spans, itself included.
pub fn paragraphs_covered(element: &ElementRef) -> usize {
    let mut nested = Vec::new();
    collect_paragraphs(**element, &mut nested);
    nested.len() + usize::from(is_counted_paragraph(element))
}
