// ABOUTME: Full-page shell around the composed body: head, article header, page chrome.
// ABOUTME: The renderer may embed the body alone; this is the ready-to-print variant.

use chrono::{DateTime, NaiveDate};

use crate::analyzer::AnalyzedContent;
use crate::composer::{Composer, ARTICLE_BODY_CLASS};
use crate::dom::tree::{Fragment, OutNode};
use crate::options::LayoutOptions;

const DATE_DISPLAY: &str = "%B %-d, %Y";

/// Render a machine date as `March 5, 2024`; other strings pass through.
pub fn format_date(raw: &str) -> String {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format(DATE_DISPLAY).to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format(DATE_DISPLAY).to_string();
    }
    raw.to_string()
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// "By Author · March 5, 2024 · 4 min read"
fn byline(content: &AnalyzedContent) -> String {
    let mut parts = Vec::new();
    if let Some(author) = non_empty(&content.author) {
        parts.push(format!("By {}", author));
    }
    if let Some(date) = non_empty(&content.date) {
        parts.push(format_date(date));
    }
    parts.push(format!("{} min read", content.reading_time_minutes));
    parts.join(" · ")
}

fn append_text_element(parent: &mut ego_tree::NodeMut<'_, OutNode>, name: &str, class: &str, text: &str) {
    let mut node = parent.append(OutNode::element(name, &[("class", class)]));
    node.append(OutNode::text(text));
}

/// Compose a complete HTML page for the analyzed article.
pub fn compose_document(content: &AnalyzedContent, options: &LayoutOptions) -> String {
    let composer = Composer::new(options.clone());
    let mut page = Fragment::new(OutNode::element("html", &[("lang", "en")]));
    let mut html = page.root_mut();

    {
        let mut head = html.append(OutNode::element("head", &[]));
        head.append(OutNode::element("meta", &[("charset", "utf-8")]));
        let mut title = head.append(OutNode::element("title", &[]));
        title.append(OutNode::text(content.title.as_str()));
    }

    let body_class = format!("layout-{}", options.style);
    let mut body = html.append(OutNode::element("body", &[("class", body_class.as_str())]));

    if options.include_header_footer && !content.source_name.is_empty() {
        append_text_element(&mut body, "header", "page-header", &content.source_name);
    }

    {
        let mut article = body.append(OutNode::element("article", &[("class", "article")]));
        {
            let mut header = article.append(OutNode::element("header", &[("class", "article-header")]));
            if let Some(kicker) = non_empty(&content.kicker) {
                append_text_element(&mut header, "p", "kicker", kicker);
            }
            append_text_element(&mut header, "h1", "article-title", &content.title);
            if let Some(subtitle) = non_empty(&content.subtitle) {
                append_text_element(&mut header, "p", "subtitle", subtitle);
            }
            append_text_element(&mut header, "p", "byline", &byline(content));
        }
        let mut article_body = article.append(OutNode::element("div", &[("class", ARTICLE_BODY_CLASS)]));
        composer.fill_body(content, &mut article_body);
    }

    if options.include_header_footer && !content.source_url.is_empty() {
        let mut footer = body.append(OutNode::element("footer", &[("class", "page-footer")]));
        let label = if content.source_name.is_empty() {
            content.source_url.as_str()
        } else {
            content.source_name.as_str()
        };
        let mut link = footer.append(OutNode::element("a", &[("href", content.source_url.as_str())]));
        link.append(OutNode::text(label));
    }

    format!("<!DOCTYPE html>\n{}", page.to_html())
}
