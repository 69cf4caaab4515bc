// ABOUTME: Output filename suggestion from an article title or its source URL.
// ABOUTME: Keeps only filesystem-friendly characters and bounds the length.

use url::Url;

const MAX_TITLE_CHARS: usize = 50;
const MAX_PATH_CHARS: usize = 30;

/// Suggest a filename like `Harbour-Lights.html` for an article.
///
/// Falls back to `<site>-<last path segment>.<ext>` when the title has no
/// usable characters.
pub fn suggest_filename(title: &str, source_url: &str, ext: &str) -> String {
    let kept: String = title
        .chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, ' ' | '-' | '_'))
        .collect();
    let clean: String = kept
        .trim()
        .replace(' ', "-")
        .chars()
        .take(MAX_TITLE_CHARS)
        .collect();
    if !clean.is_empty() {
        return format!("{}.{}", clean, ext);
    }

    let parsed = Url::parse(source_url).ok();
    let site = parsed
        .as_ref()
        .and_then(|u| u.host_str())
        .map(|h| h.replace("www.", ""))
        .and_then(|h| h.split('.').next().map(str::to_string))
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "article".to_string());

    let segment: String = parsed
        .as_ref()
        .and_then(|u| u.path().trim_matches('/').rsplit('/').next().map(str::to_string))
        .unwrap_or_default()
        .chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, '-' | '_'))
        .take(MAX_PATH_CHARS)
        .collect();

    if segment.is_empty() {
        format!("{}-article.{}", site, ext)
    } else {
        format!("{}-{}.{}", site, segment, ext)
    }
}
