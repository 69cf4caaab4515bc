// ABOUTME: Input model for the layout engine: ExtractedContent and ImageDescriptor.
// ABOUTME: Mirrors the JSON record produced by the external extraction step.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::LayoutError;

/// Average reading speed used for the reading-time estimate.
const WORDS_PER_MINUTE: usize = 200;

/// An image that has already been downloaded and encoded for embedding.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ImageDescriptor {
    /// Where the image originally came from. Informational only.
    #[serde(default)]
    pub original_url: String,
    /// Embeddable reference (usually a `data:` URI) used as the `src`.
    pub data_uri: String,
    #[serde(default)]
    pub width: u32,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub alt_text: String,
    #[serde(default)]
    pub caption: String,
}

impl ImageDescriptor {
    /// Width divided by height; 1.0 when the height is unknown.
    pub fn aspect_ratio(&self) -> f64 {
        if self.height == 0 {
            return 1.0;
        }
        self.width as f64 / self.height as f64
    }

    /// True when the aspect ratio is at or below `cutoff`.
    pub fn is_square_or_vertical_with(&self, cutoff: f64) -> bool {
        self.aspect_ratio() <= cutoff
    }

    /// Caption text for a figure: the caption, falling back to the alt text.
    pub fn caption_text(&self) -> Option<&str> {
        [self.caption.as_str(), self.alt_text.as_str()]
            .into_iter()
            .find(|s| !s.trim().is_empty())
    }
}

/// An article as handed over by the extraction step.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ExtractedContent {
    pub title: String,
    /// Raw body markup. Preserved verbatim through analysis.
    pub html_content: String,
    #[serde(default)]
    pub text_content: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub kicker: Option<String>,
    #[serde(default)]
    pub source_url: String,
    #[serde(default)]
    pub source_name: String,
    #[serde(default)]
    pub images: Vec<ImageDescriptor>,
}

impl ExtractedContent {
    /// Decode the JSON shape emitted by the extractor.
    pub fn from_json(json: &str) -> Result<Self, LayoutError> {
        serde_json::from_str(json)
            .map_err(|e| LayoutError::input("decode content", Some(anyhow::Error::new(e))))
    }

    pub fn word_count(&self) -> usize {
        self.text_content.split_whitespace().count()
    }

    /// Whole minutes at 200 words per minute, never less than one.
    pub fn reading_time_minutes(&self) -> usize {
        (self.word_count() / WORDS_PER_MINUTE).max(1)
    }

    /// The publication name, or the source host when no name was scraped.
    pub fn display_source_name(&self) -> String {
        let name = self.source_name.trim();
        if !name.is_empty() {
            return name.to_string();
        }
        Url::parse(&self.source_url)
            .ok()
            .and_then(|u| u.host_str().map(|h| h.trim_start_matches("www.").to_string()))
            .unwrap_or_default()
    }
}
