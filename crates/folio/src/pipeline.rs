// ABOUTME: Pipeline facade tying the analyzer and composer together under one configuration.
// ABOUTME: Built through PipelineBuilder, which validates options before any work is done.

use serde::Serialize;

use crate::analyzer::{AnalyzedContent, Analyzer};
use crate::composer::Composer;
use crate::content::ExtractedContent;
use crate::document;
use crate::options::{AnalyzerOptions, LayoutOptions, PipelineBuilder};

/// Analysis result together with the composed body markup.
#[derive(Debug, Clone, Serialize)]
pub struct Composed {
    pub analysis: AnalyzedContent,
    pub body: String,
}

/// A configured analyze-then-compose pipeline.
///
/// Holds only immutable configuration, so one instance can serve many
/// articles from many threads.
#[derive(Debug, Clone)]
pub struct Pipeline {
    analyzer: Analyzer,
    composer: Composer,
}

impl Pipeline {
    /// Create a builder for configuring a Pipeline.
    pub fn builder() -> PipelineBuilder {
        PipelineBuilder::new()
    }

    pub(crate) fn new(layout: LayoutOptions, analyzer: AnalyzerOptions) -> Self {
        Self {
            analyzer: Analyzer::new(analyzer),
            composer: Composer::new(layout),
        }
    }

    pub fn layout_options(&self) -> &LayoutOptions {
        self.composer.options()
    }

    pub fn analyzer_options(&self) -> &AnalyzerOptions {
        self.analyzer.options()
    }

    pub fn analyze(&self, content: &ExtractedContent) -> AnalyzedContent {
        self.analyzer.analyze(content)
    }

    /// The composed body fragment.
    pub fn compose_body(&self, content: &AnalyzedContent) -> String {
        self.composer.compose_body(content)
    }

    /// The body wrapped in a complete page.
    pub fn compose_document(&self, content: &AnalyzedContent) -> String {
        document::compose_document(content, self.composer.options())
    }

    /// Analyze and compose in one pass.
    pub fn run(&self, content: &ExtractedContent) -> Composed {
        let analysis = self.analyze(content);
        let body = self.compose_body(&analysis);
        Composed { analysis, body }
    }
}
