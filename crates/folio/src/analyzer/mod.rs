// ABOUTME: Content analysis: subtitle, pull-quote selection and image placement.
// ABOUTME: Produces an immutable AnalyzedContent; the original markup is carried verbatim.

//! Article analysis.
//!
//! The [`Analyzer`] reads an [`ExtractedContent`] and decides what the composer
//! should do with it, without touching the markup itself. Paragraph indices
//! throughout refer to the sequence defined by [`crate::dom::flow::paragraphs`].

pub mod placement;
pub mod quotes;
pub mod subtitle;

use scraper::Html;
use serde::{Deserialize, Serialize};

use crate::content::{ExtractedContent, ImageDescriptor};
use crate::dom::flow::{element_text, paragraphs};
use crate::options::AnalyzerOptions;

/// A sentence chosen (or considered) for display as a pull quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PullQuote {
    pub text: String,
    pub score: f64,
    /// Paragraph the sentence was taken from.
    pub paragraph_index: usize,
}

/// How an image is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlacementKind {
    Hero,
    Paired,
    Centered,
}

impl PlacementKind {
    /// Styling class the renderer keys its CSS on.
    pub fn as_class(&self) -> &'static str {
        match self {
            PlacementKind::Hero => "hero",
            PlacementKind::Paired => "paired",
            PlacementKind::Centered => "centered",
        }
    }
}

/// Where one image goes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImagePlacement {
    pub image: ImageDescriptor,
    pub kind: PlacementKind,
    /// The image is inserted ahead of this paragraph.
    pub paragraph_index: usize,
    /// Index of the other half of a pair within the placement list.
    pub partner: Option<usize>,
}

/// The analyzed article, ready for composition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzedContent {
    pub title: String,
    pub subtitle: Option<String>,
    pub author: Option<String>,
    pub date: Option<String>,
    pub kicker: Option<String>,
    pub source_name: String,
    pub source_url: String,
    /// Original body markup, untouched.
    pub html_content: String,
    pub pull_quotes: Vec<PullQuote>,
    pub image_placements: Vec<ImagePlacement>,
    pub word_count: usize,
    pub reading_time_minutes: usize,
    pub paragraph_count: usize,
}

impl AnalyzedContent {
    /// The hero placement, if the article has images.
    pub fn hero(&self) -> Option<&ImagePlacement> {
        self.image_placements
            .iter()
            .find(|p| p.kind == PlacementKind::Hero)
    }
}

/// Stateless analyzer; all working data is allocated per call.
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    options: AnalyzerOptions,
}

impl Analyzer {
    pub fn new(options: AnalyzerOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &AnalyzerOptions {
        &self.options
    }

    /// Analyze extracted content and prepare it for layout.
    pub fn analyze(&self, content: &ExtractedContent) -> AnalyzedContent {
        let doc = Html::parse_fragment(&content.html_content);

        let subtitle = subtitle::extract_subtitle(&doc, &content.title);

        let paragraph_texts: Vec<String> = paragraphs(&doc).iter().map(element_text).collect();
        let paragraph_count = paragraph_texts.len();

        let pull_quotes = if self.options.num_pull_quotes == 0 {
            Vec::new()
        } else {
            let pool = quotes::candidates(&paragraph_texts);
            tracing::debug!(candidates = pool.len(), "scored pull-quote candidates");
            quotes::select(
                pool,
                self.options.num_pull_quotes,
                self.options.min_quote_spacing,
            )
        };

        let image_placements = placement::plan(&content.images, paragraph_count, &self.options);

        tracing::debug!(
            paragraphs = paragraph_count,
            quotes = pull_quotes.len(),
            images = image_placements.len(),
            has_subtitle = subtitle.is_some(),
            "analyzed article"
        );

        AnalyzedContent {
            title: content.title.clone(),
            subtitle,
            author: content.author.clone(),
            date: content.date.clone(),
            kicker: content.kicker.clone(),
            source_name: content.display_source_name(),
            source_url: content.source_url.clone(),
            html_content: content.html_content.clone(),
            pull_quotes,
            image_placements,
            word_count: content.word_count(),
            reading_time_minutes: content.reading_time_minutes(),
            paragraph_count,
        }
    }
}

/// Analyze with default tunables and the given quote budget.
pub fn analyze_content(content: &ExtractedContent, num_pull_quotes: usize) -> AnalyzedContent {
    Analyzer::new(AnalyzerOptions {
        num_pull_quotes,
        ..Default::default()
    })
    .analyze(content)
}
